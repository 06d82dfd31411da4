//! # Payment Method Abstraction
//!
//! A uniform interface over heterogeneous payment backends.
//!
//! ## Capability Set
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       PaymentService<G>                                 │
//! │                                                                         │
//! │   create_payment ──► dispatch on method ──► PaymentRecord               │
//! │   verify_payment ──► COD: settled at door; others: ask the gateway      │
//! │   available_methods ──► static UI catalog                               │
//! │                                                                         │
//! │   Variants                                                              │
//! │   ├── CashOnDelivery  slot + date, own fee table, verified at creation  │
//! │   ├── BankTransfer    fixed account directory, quoted reference         │
//! │   ├── MobileWallet    fixed provider directory, manual transfer steps   │
//! │   └── PayPal          upstream order creation via the injected gateway  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each record is a common header plus a strongly-typed, exhaustively
//! matched payload per method; there is no stringly-typed `method` field
//! with an ad-hoc blob behind it.

pub mod bank;
pub mod cod;
pub mod gateway;
pub mod reference;
pub mod wallet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::customer::Customer;
use crate::error::{PaymentError, PaymentResult};
use crate::money::Money;
use crate::validation::validate_payment_amount;

use bank::BankAccount;
use cod::{DeliverySlot, SlotSchedule};
use gateway::{PaymentGateway, Verification};
use wallet::WalletProvider;

/// Currency code for every amount in the storefront.
pub const CURRENCY: &str = "LKR";

// =============================================================================
// Payment Method
// =============================================================================

/// The closed set of supported payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CashOnDelivery,
    BankTransfer,
    MobileWallet,
    Paypal,
}

impl PaymentMethod {
    /// Parses the wire tag used by the frontend.
    pub fn parse(tag: &str) -> PaymentResult<Self> {
        match tag {
            "cash_on_delivery" => Ok(PaymentMethod::CashOnDelivery),
            "bank_transfer" => Ok(PaymentMethod::BankTransfer),
            "mobile_wallet" => Ok(PaymentMethod::MobileWallet),
            "paypal" => Ok(PaymentMethod::Paypal),
            other => Err(PaymentError::InvalidMethod(other.to_string())),
        }
    }

    /// The wire tag, inverse of [`PaymentMethod::parse`].
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "cash_on_delivery",
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::MobileWallet => "mobile_wallet",
            PaymentMethod::Paypal => "paypal",
        }
    }

    /// Reference prefix per method family, for support triage.
    pub fn reference_prefix(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "COD",
            PaymentMethod::BankTransfer => "BNK",
            PaymentMethod::MobileWallet => "MOB",
            PaymentMethod::Paypal => "PPL",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Payment Status
// =============================================================================

/// Lifecycle status of a payment record.
///
/// Transitions are one-directional: a failed or cancelled payment is never
/// resurrected; retrying means creating a new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
}

impl PaymentStatus {
    /// Whether moving to `next` is a permitted transition.
    pub fn can_transition_to(self, next: PaymentStatus) -> bool {
        matches!(
            (self, next),
            (
                PaymentStatus::Pending,
                PaymentStatus::Completed | PaymentStatus::Failed | PaymentStatus::Cancelled
            )
        )
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

// =============================================================================
// Payment Record
// =============================================================================

/// Method-specific payload of a payment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum PaymentDetail {
    CashOnDelivery {
        #[ts(as = "String")]
        delivery_date: NaiveDate,
        slot: DeliverySlot,
        /// COD courier fee, separate from the order's shipping fee.
        delivery_fee: Money,
        /// Base amount plus the COD fee: what the courier collects.
        total_amount: Money,
    },
    BankTransfer {
        account: BankAccount,
        instructions: String,
    },
    MobileWallet {
        provider: WalletProvider,
        instructions: String,
    },
    Paypal {
        order_id: String,
        payment_url: String,
    },
}

/// A payment created for one checkout attempt.
///
/// Created when a payment request is submitted; never persisted beyond the
/// instructions it yields. The order keeps only the chosen method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    /// Internal identifier (UUID v4).
    pub id: String,

    /// Human-and-machine reference, `<PREFIX>-<millis>-<suffix>`.
    pub reference: String,

    /// Base amount: the order total.
    pub amount: Money,

    /// ISO currency code.
    pub currency: String,

    /// Lifecycle status; transitions only via [`PaymentRecord::update_status`].
    pub status: PaymentStatus,

    /// When the record was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// Strongly-typed method payload.
    pub detail: PaymentDetail,
}

impl PaymentRecord {
    /// The method this record belongs to.
    pub fn method(&self) -> PaymentMethod {
        match self.detail {
            PaymentDetail::CashOnDelivery { .. } => PaymentMethod::CashOnDelivery,
            PaymentDetail::BankTransfer { .. } => PaymentMethod::BankTransfer,
            PaymentDetail::MobileWallet { .. } => PaymentMethod::MobileWallet,
            PaymentDetail::Paypal { .. } => PaymentMethod::Paypal,
        }
    }

    /// Moves the record to a new status, enforcing one-directional flow.
    pub fn update_status(&mut self, next: PaymentStatus) -> PaymentResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(PaymentError::InvalidStatusTransition {
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }

        self.status = next;
        Ok(())
    }
}

// =============================================================================
// Payment Request
// =============================================================================

/// Method-specific input for creating a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum MethodData {
    CashOnDelivery {
        #[ts(as = "String")]
        delivery_date: NaiveDate,
        slot: DeliverySlot,
    },
    BankTransfer {
        /// Selector id from [`bank::directory`].
        bank_id: String,
    },
    MobileWallet {
        /// Selector id from [`wallet::directory`].
        provider_id: String,
    },
    Paypal,
}

/// A transient per-checkout payment request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// The order total to collect.
    pub amount: Money,

    /// Contact and delivery details (COD fees key off the district).
    pub customer: Customer,

    /// Method choice plus its extra data.
    pub data: MethodData,
}

// =============================================================================
// Method Catalog (UI enumeration)
// =============================================================================

/// Static description of one payment method for UI enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MethodInfo {
    pub id: PaymentMethod,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub fee_note: String,
    pub processing_time: String,
}

/// The method catalog shown on the checkout page.
pub fn available_methods() -> Vec<MethodInfo> {
    vec![
        MethodInfo {
            id: PaymentMethod::CashOnDelivery,
            name: "Cash on Delivery".to_string(),
            description: "Pay the courier in cash when your order arrives".to_string(),
            icon: "banknote".to_string(),
            fee_note: "Delivery fee by district, from Rs 150".to_string(),
            processing_time: "Settles at delivery".to_string(),
        },
        MethodInfo {
            id: PaymentMethod::BankTransfer,
            name: "Bank Transfer".to_string(),
            description: "Deposit to one of our bank accounts and quote your reference"
                .to_string(),
            icon: "building-bank".to_string(),
            fee_note: "No extra fee".to_string(),
            processing_time: "Confirmed within 1 business day".to_string(),
        },
        MethodInfo {
            id: PaymentMethod::MobileWallet,
            name: "Mobile Wallet".to_string(),
            description: "eZ Cash, mCash or FriMi transfer to our wallet number".to_string(),
            icon: "device-mobile".to_string(),
            fee_note: "No extra fee".to_string(),
            processing_time: "Confirmed within a few hours".to_string(),
        },
        MethodInfo {
            id: PaymentMethod::Paypal,
            name: "PayPal".to_string(),
            description: "Pay by card or PayPal balance via secure redirect".to_string(),
            icon: "brand-paypal".to_string(),
            fee_note: "No extra fee".to_string(),
            processing_time: "Instant".to_string(),
        },
    ]
}

// =============================================================================
// Payment Service
// =============================================================================

/// Dispatches payment creation and verification across the method variants.
///
/// The gateway `G` is the injected port for every upstream provider call;
/// adapters own timeouts and transport, so a pure in-test gateway makes the
/// whole service unit-testable.
#[derive(Debug, Clone)]
pub struct PaymentService<G> {
    gateway: G,
    slots: SlotSchedule,
}

impl<G: PaymentGateway> PaymentService<G> {
    /// Creates a service with every delivery slot open.
    pub fn new(gateway: G) -> Self {
        PaymentService {
            gateway,
            slots: SlotSchedule::new(),
        }
    }

    /// Replaces the COD slot schedule.
    pub fn with_slots(mut self, slots: SlotSchedule) -> Self {
        self.slots = slots;
        self
    }

    /// The current COD slot schedule.
    pub fn slots(&self) -> &SlotSchedule {
        &self.slots
    }

    /// Mutable access for marking slots (un)available at runtime.
    pub fn slots_mut(&mut self) -> &mut SlotSchedule {
        &mut self.slots
    }

    /// Creates a payment for one checkout attempt.
    ///
    /// ## Behavior per method
    /// - COD: checks slot availability, folds the district COD fee into a
    ///   `total_amount` distinct from the base amount. No upstream call.
    /// - BankTransfer / MobileWallet: resolves the selected account or
    ///   provider from its fixed directory and renders instructions around
    ///   a freshly generated reference. No upstream call.
    /// - PayPal: awaits the gateway's order creation; on failure, returns
    ///   `UpstreamCreateFailed` and NO record is created.
    ///
    /// Every record starts `Pending` and carries a globally-unique
    /// reference.
    pub async fn create_payment(&self, request: PaymentRequest) -> PaymentResult<PaymentRecord> {
        validate_payment_amount(request.amount.rupees())?;

        let (method, detail) = match request.data {
            MethodData::CashOnDelivery {
                delivery_date,
                slot,
            } => {
                if !self.slots.is_available(slot) {
                    return Err(PaymentError::SlotUnavailable(slot.label().to_string()));
                }

                let delivery_fee = cod::delivery_fee(&request.customer.address.district);
                (
                    PaymentMethod::CashOnDelivery,
                    PaymentDetail::CashOnDelivery {
                        delivery_date,
                        slot,
                        delivery_fee,
                        total_amount: request.amount + delivery_fee,
                    },
                )
            }
            MethodData::BankTransfer { bank_id } => {
                let account = bank::find(&bank_id)
                    .ok_or_else(|| PaymentError::UnknownBankAccount(bank_id.clone()))?;
                let reference = reference::generate(PaymentMethod::BankTransfer);
                let instructions = bank::instructions(request.amount, &account, &reference);

                return Ok(Self::record(
                    reference,
                    request.amount,
                    PaymentDetail::BankTransfer {
                        account,
                        instructions,
                    },
                ));
            }
            MethodData::MobileWallet { provider_id } => {
                let provider = wallet::find(&provider_id)
                    .ok_or_else(|| PaymentError::UnknownWalletProvider(provider_id.clone()))?;
                let reference = reference::generate(PaymentMethod::MobileWallet);
                let instructions = wallet::instructions(request.amount, &provider, &reference);

                return Ok(Self::record(
                    reference,
                    request.amount,
                    PaymentDetail::MobileWallet {
                        provider,
                        instructions,
                    },
                ));
            }
            MethodData::Paypal => {
                let order = self
                    .gateway
                    .create_paypal_order(request.amount, CURRENCY)
                    .await
                    .map_err(|e| PaymentError::UpstreamCreateFailed(e.to_string()))?;

                (
                    PaymentMethod::Paypal,
                    PaymentDetail::Paypal {
                        order_id: order.order_id,
                        payment_url: order.payment_url,
                    },
                )
            }
        };

        Ok(Self::record(
            reference::generate(method),
            request.amount,
            detail,
        ))
    }

    /// Checks a payment against its upstream source of truth.
    ///
    /// COD is always verified: settlement happens physically at delivery,
    /// so there is nothing upstream to ask. For the out-of-band methods a
    /// gateway failure maps to `VerificationUnavailable`, distinct from a
    /// successful check that reports "not yet paid", which callers handle
    /// by re-polling later.
    pub async fn verify_payment(&self, record: &PaymentRecord) -> PaymentResult<Verification> {
        let result = match &record.detail {
            PaymentDetail::CashOnDelivery { .. } => {
                return Ok(Verification::confirmed(record.amount));
            }
            PaymentDetail::BankTransfer { .. } => {
                self.gateway.verify_bank_transfer(&record.reference).await
            }
            PaymentDetail::MobileWallet { provider, .. } => {
                self.gateway
                    .verify_wallet(&provider.id, &record.reference)
                    .await
            }
            PaymentDetail::Paypal { order_id, .. } => self.gateway.verify_paypal(order_id).await,
        };

        result.map_err(|e| PaymentError::VerificationUnavailable(e.to_string()))
    }

    fn record(reference: String, amount: Money, detail: PaymentDetail) -> PaymentRecord {
        PaymentRecord {
            id: Uuid::new_v4().to_string(),
            reference,
            amount,
            currency: CURRENCY.to_string(),
            status: PaymentStatus::Pending,
            created_at: Utc::now(),
            detail,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::{Address, Customer};
    use crate::error::GatewayError;
    use gateway::PaypalOrder;

    /// Scriptable in-test gateway.
    struct MockGateway {
        create_fails: bool,
        verify_fails: bool,
        verified: bool,
    }

    impl Default for MockGateway {
        fn default() -> Self {
            MockGateway {
                create_fails: false,
                verify_fails: false,
                verified: false,
            }
        }
    }

    impl MockGateway {
        fn outcome(&self, amount: Option<Money>) -> Result<Verification, GatewayError> {
            if self.verify_fails {
                return Err(GatewayError::Unreachable("connect timed out".to_string()));
            }
            Ok(if self.verified {
                Verification {
                    verified: true,
                    amount,
                }
            } else {
                Verification::unconfirmed()
            })
        }
    }

    impl PaymentGateway for MockGateway {
        async fn create_paypal_order(
            &self,
            _amount: Money,
            _currency: &str,
        ) -> Result<PaypalOrder, GatewayError> {
            if self.create_fails {
                return Err(GatewayError::Unreachable("503 from upstream".to_string()));
            }
            Ok(PaypalOrder {
                order_id: "PP-ORDER-1".to_string(),
                payment_url: "https://paypal.example/approve/PP-ORDER-1".to_string(),
            })
        }

        async fn verify_bank_transfer(
            &self,
            _reference: &str,
        ) -> Result<Verification, GatewayError> {
            self.outcome(Some(Money::from_rupees(1975)))
        }

        async fn verify_wallet(
            &self,
            _provider_id: &str,
            _reference: &str,
        ) -> Result<Verification, GatewayError> {
            self.outcome(None)
        }

        async fn verify_paypal(&self, _order_id: &str) -> Result<Verification, GatewayError> {
            self.outcome(Some(Money::from_rupees(1975)))
        }
    }

    fn kandy_customer() -> Customer {
        Customer {
            first_name: "Nimal".to_string(),
            last_name: "Perera".to_string(),
            email: "nimal@example.com".to_string(),
            phone: "0771234567".to_string(),
            address: Address {
                street: "24 Temple Road".to_string(),
                city: "Peradeniya".to_string(),
                district: "Kandy".to_string(),
                postal_code: "20400".to_string(),
                country: "Sri Lanka".to_string(),
            },
        }
    }

    fn cod_request(amount: i64) -> PaymentRequest {
        PaymentRequest {
            amount: Money::from_rupees(amount),
            customer: kandy_customer(),
            data: MethodData::CashOnDelivery {
                delivery_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
                slot: DeliverySlot::Morning,
            },
        }
    }

    #[test]
    fn test_method_parse() {
        assert_eq!(
            PaymentMethod::parse("bank_transfer").unwrap(),
            PaymentMethod::BankTransfer
        );
        assert!(matches!(
            PaymentMethod::parse("bitcoin"),
            Err(PaymentError::InvalidMethod(_))
        ));
    }

    #[test]
    fn test_status_transitions_one_directional() {
        let mut record = PaymentService::<MockGateway>::record(
            reference::generate(PaymentMethod::BankTransfer),
            Money::from_rupees(100),
            PaymentDetail::BankTransfer {
                account: bank::find("boc").unwrap(),
                instructions: String::new(),
            },
        );

        record.update_status(PaymentStatus::Failed).unwrap();
        let err = record.update_status(PaymentStatus::Completed).unwrap_err();
        assert!(matches!(err, PaymentError::InvalidStatusTransition { .. }));
        assert_eq!(record.status, PaymentStatus::Failed);
    }

    /// COD total composition: order total 1975 to Kandy, COD fee 200 on
    /// top → courier collects 2175, while the base amount stays 1975.
    #[tokio::test]
    async fn test_cod_total_composition() {
        let service = PaymentService::new(MockGateway::default());
        let record = service.create_payment(cod_request(1975)).await.unwrap();

        assert_eq!(record.method(), PaymentMethod::CashOnDelivery);
        assert_eq!(record.amount.rupees(), 1975);
        assert_eq!(record.status, PaymentStatus::Pending);
        assert!(record.reference.starts_with("COD-"));

        match record.detail {
            PaymentDetail::CashOnDelivery {
                delivery_fee,
                total_amount,
                ..
            } => {
                assert_eq!(delivery_fee.rupees(), 200);
                assert_eq!(total_amount.rupees(), 2175);
            }
            other => panic!("expected COD detail, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_cod_unavailable_slot_rejected() {
        let mut schedule = SlotSchedule::new();
        schedule.mark_unavailable(DeliverySlot::Morning);
        let service = PaymentService::new(MockGateway::default()).with_slots(schedule);

        let err = service.create_payment(cod_request(1975)).await.unwrap_err();
        assert!(matches!(err, PaymentError::SlotUnavailable(_)));
    }

    #[tokio::test]
    async fn test_cod_verified_at_creation() {
        let service = PaymentService::new(MockGateway::default());
        let record = service.create_payment(cod_request(1975)).await.unwrap();

        let verification = service.verify_payment(&record).await.unwrap();
        assert!(verification.verified);
        assert_eq!(verification.amount, Some(Money::from_rupees(1975)));
    }

    #[tokio::test]
    async fn test_bank_transfer_creation() {
        let service = PaymentService::new(MockGateway::default());
        let record = service
            .create_payment(PaymentRequest {
                amount: Money::from_rupees(1975),
                customer: kandy_customer(),
                data: MethodData::BankTransfer {
                    bank_id: "combank".to_string(),
                },
            })
            .await
            .unwrap();

        assert!(record.reference.starts_with("BNK-"));
        match &record.detail {
            PaymentDetail::BankTransfer {
                account,
                instructions,
            } => {
                assert_eq!(account.id, "combank");
                assert!(instructions.contains(&record.reference));
                assert!(instructions.contains("Rs 1975"));
            }
            other => panic!("expected bank detail, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unknown_bank_and_provider() {
        let service = PaymentService::new(MockGateway::default());

        let err = service
            .create_payment(PaymentRequest {
                amount: Money::from_rupees(100),
                customer: kandy_customer(),
                data: MethodData::BankTransfer {
                    bank_id: "hsbc".to_string(),
                },
            })
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::UnknownBankAccount(_)));

        let err = service
            .create_payment(PaymentRequest {
                amount: Money::from_rupees(100),
                customer: kandy_customer(),
                data: MethodData::MobileWallet {
                    provider_id: "venmo".to_string(),
                },
            })
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::UnknownWalletProvider(_)));
    }

    #[tokio::test]
    async fn test_paypal_creation_returns_redirect() {
        let service = PaymentService::new(MockGateway::default());
        let record = service
            .create_payment(PaymentRequest {
                amount: Money::from_rupees(1975),
                customer: kandy_customer(),
                data: MethodData::Paypal,
            })
            .await
            .unwrap();

        assert!(record.reference.starts_with("PPL-"));
        match &record.detail {
            PaymentDetail::Paypal {
                order_id,
                payment_url,
            } => {
                assert_eq!(order_id, "PP-ORDER-1");
                assert!(payment_url.contains("paypal.example"));
            }
            other => panic!("expected paypal detail, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_paypal_upstream_failure_creates_nothing() {
        let service = PaymentService::new(MockGateway {
            create_fails: true,
            ..MockGateway::default()
        });

        let err = service
            .create_payment(PaymentRequest {
                amount: Money::from_rupees(1975),
                customer: kandy_customer(),
                data: MethodData::Paypal,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::UpstreamCreateFailed(_)));
    }

    #[tokio::test]
    async fn test_verify_unconfirmed_is_not_an_error() {
        let service = PaymentService::new(MockGateway::default());
        let record = service
            .create_payment(PaymentRequest {
                amount: Money::from_rupees(500),
                customer: kandy_customer(),
                data: MethodData::BankTransfer {
                    bank_id: "boc".to_string(),
                },
            })
            .await
            .unwrap();

        // "Checked and not yet paid": a successful verification, re-pollable
        let verification = service.verify_payment(&record).await.unwrap();
        assert!(!verification.verified);
        assert_eq!(record.status, PaymentStatus::Pending);
    }

    #[tokio::test]
    async fn test_verify_unreachable_maps_to_unavailable() {
        let service = PaymentService::new(MockGateway {
            verify_fails: true,
            ..MockGateway::default()
        });
        let record = service
            .create_payment(PaymentRequest {
                amount: Money::from_rupees(500),
                customer: kandy_customer(),
                data: MethodData::MobileWallet {
                    provider_id: "ezcash".to_string(),
                },
            })
            .await
            .unwrap();

        let err = service.verify_payment(&record).await.unwrap_err();
        assert!(matches!(err, PaymentError::VerificationUnavailable(_)));
        // The record stays pending: the transfer may still land
        assert_eq!(record.status, PaymentStatus::Pending);
    }

    #[tokio::test]
    async fn test_zero_amount_rejected() {
        let service = PaymentService::new(MockGateway::default());
        let err = service.create_payment(cod_request(0)).await.unwrap_err();
        assert!(matches!(err, PaymentError::Validation(_)));
    }

    #[test]
    fn test_available_methods_catalog() {
        let methods = available_methods();
        assert_eq!(methods.len(), 4);

        let ids: Vec<PaymentMethod> = methods.iter().map(|m| m.id).collect();
        assert!(ids.contains(&PaymentMethod::CashOnDelivery));
        assert!(ids.contains(&PaymentMethod::BankTransfer));
        assert!(ids.contains(&PaymentMethod::MobileWallet));
        assert!(ids.contains(&PaymentMethod::Paypal));

        for info in &methods {
            assert!(!info.name.is_empty());
            assert!(!info.description.is_empty());
            assert!(!info.processing_time.is_empty());
        }
    }
}
