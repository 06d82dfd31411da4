//! # Payment Gateway Port
//!
//! The seam between the pure payment logic and real provider integrations.
//!
//! ## Ports and Adapters
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   PaymentService  ──────────►  trait PaymentGateway  (THIS PORT)        │
//! │                                       │                                 │
//! │              ┌────────────────────────┼─────────────────────────┐       │
//! │              ▼                        ▼                         ▼       │
//! │      PayPal REST adapter      bank reconciliation        wallet API     │
//! │      (real SDK, kade-store)   (statement import)         adapter        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Adapters own all I/O concerns, including bounding their calls with a
//! timeout. A timed-out or unreachable provider surfaces here as
//! [`GatewayError::Unreachable`]; the payment service maps that onto
//! `UpstreamCreateFailed` (during creation) or `VerificationUnavailable`
//! (during verification) without ever flipping a record out of `Pending`:
//! the upstream operation may still have succeeded, so reconciliation
//! happens via a later verify call, never by assuming failure.

use std::future::Future;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::GatewayError;
use crate::money::Money;

/// Outcome of checking a payment with its upstream source of truth.
///
/// `verified == false` means "not yet confirmed", NOT a hard failure;
/// callers are expected to re-poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    pub verified: bool,
    /// The amount the provider saw, when it reports one.
    pub amount: Option<Money>,
}

impl Verification {
    /// A confirmed payment of the given amount.
    pub fn confirmed(amount: Money) -> Self {
        Verification {
            verified: true,
            amount: Some(amount),
        }
    }

    /// Checked upstream, not yet paid.
    pub fn unconfirmed() -> Self {
        Verification {
            verified: false,
            amount: None,
        }
    }
}

/// A PayPal order created upstream, ready for customer redirect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaypalOrder {
    /// Upstream order identifier, quoted on later verification calls.
    pub order_id: String,
    /// URL the customer is redirected to for approval.
    pub payment_url: String,
}

/// Upstream provider calls the payment service depends on.
///
/// All methods are unreliable network operations from the caller's point of
/// view; rejection and unreachability are reported as [`GatewayError`], never
/// conflated with a definitive "not verified" answer.
pub trait PaymentGateway {
    /// Creates a PayPal order and returns its redirect URL.
    fn create_paypal_order(
        &self,
        amount: Money,
        currency: &str,
    ) -> impl Future<Output = Result<PaypalOrder, GatewayError>> + Send;

    /// Checks a bank statement source for a transfer quoting `reference`.
    fn verify_bank_transfer(
        &self,
        reference: &str,
    ) -> impl Future<Output = Result<Verification, GatewayError>> + Send;

    /// Asks a mobile-money provider whether `reference` has been paid.
    fn verify_wallet(
        &self,
        provider_id: &str,
        reference: &str,
    ) -> impl Future<Output = Result<Verification, GatewayError>> + Send;

    /// Asks PayPal for the state of a previously created order.
    fn verify_paypal(
        &self,
        order_id: &str,
    ) -> impl Future<Output = Result<Verification, GatewayError>> + Send;
}
