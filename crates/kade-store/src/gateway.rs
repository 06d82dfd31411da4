//! # Gateway Adapters
//!
//! Concrete [`PaymentGateway`] implementations and decorators.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PaymentService<BoundedGateway<SimulatedGateway>>                       │
//! │                        │                                                │
//! │                        ▼                                                │
//! │  BoundedGateway ── tokio::time::timeout around every call               │
//! │                        │                                                │
//! │                        ▼                                                │
//! │  SimulatedGateway ── deterministic stand-in until the real PayPal       │
//! │                      and reconciliation integrations land               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The core never sees a timeout: a slow upstream surfaces as
//! [`GatewayError::Unreachable`], which the payment service maps without
//! ever flipping a record out of `Pending`.

use std::time::Duration;

use tracing::warn;
use uuid::Uuid;

use kade_core::error::GatewayError;
use kade_core::money::Money;
use kade_core::payment::gateway::{PaymentGateway, PaypalOrder, Verification};

// =============================================================================
// BoundedGateway
// =============================================================================

/// Decorator that bounds every upstream call with a hard timeout.
#[derive(Debug, Clone)]
pub struct BoundedGateway<G> {
    inner: G,
    timeout: Duration,
}

/// Default upstream timeout for provider calls.
pub const DEFAULT_GATEWAY_TIMEOUT: Duration = Duration::from_secs(10);

impl<G> BoundedGateway<G> {
    /// Wraps a gateway with the default timeout.
    pub fn new(inner: G) -> Self {
        BoundedGateway {
            inner,
            timeout: DEFAULT_GATEWAY_TIMEOUT,
        }
    }

    /// Wraps a gateway with a custom timeout.
    pub fn with_timeout(inner: G, timeout: Duration) -> Self {
        BoundedGateway { inner, timeout }
    }

    async fn bounded<T>(
        &self,
        operation: &'static str,
        fut: impl std::future::Future<Output = Result<T, GatewayError>>,
    ) -> Result<T, GatewayError> {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                warn!(operation, timeout_ms = self.timeout.as_millis() as u64, "Gateway call timed out");
                Err(GatewayError::Unreachable(format!(
                    "{operation} timed out after {}ms",
                    self.timeout.as_millis()
                )))
            }
        }
    }
}

impl<G: PaymentGateway + Sync> PaymentGateway for BoundedGateway<G> {
    async fn create_paypal_order(
        &self,
        amount: Money,
        currency: &str,
    ) -> Result<PaypalOrder, GatewayError> {
        self.bounded(
            "create_paypal_order",
            self.inner.create_paypal_order(amount, currency),
        )
        .await
    }

    async fn verify_bank_transfer(&self, reference: &str) -> Result<Verification, GatewayError> {
        self.bounded(
            "verify_bank_transfer",
            self.inner.verify_bank_transfer(reference),
        )
        .await
    }

    async fn verify_wallet(
        &self,
        provider_id: &str,
        reference: &str,
    ) -> Result<Verification, GatewayError> {
        self.bounded(
            "verify_wallet",
            self.inner.verify_wallet(provider_id, reference),
        )
        .await
    }

    async fn verify_paypal(&self, order_id: &str) -> Result<Verification, GatewayError> {
        self.bounded("verify_paypal", self.inner.verify_paypal(order_id))
            .await
    }
}

// =============================================================================
// SimulatedGateway
// =============================================================================

/// Deterministic gateway stand-in for the demo and for integration tests.
///
/// Every call "succeeds" after a small artificial latency; out-of-band
/// verifications report unconfirmed, matching a freshly created transfer.
#[derive(Debug, Clone, Default)]
pub struct SimulatedGateway {
    /// Artificial per-call latency.
    pub latency: Duration,
}

impl SimulatedGateway {
    pub fn new() -> Self {
        SimulatedGateway::default()
    }

    /// A gateway that stalls longer than any sane timeout; pairs with
    /// [`BoundedGateway`] in tests.
    pub fn with_latency(latency: Duration) -> Self {
        SimulatedGateway { latency }
    }

    async fn stall(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl PaymentGateway for SimulatedGateway {
    async fn create_paypal_order(
        &self,
        _amount: Money,
        _currency: &str,
    ) -> Result<PaypalOrder, GatewayError> {
        self.stall().await;
        let order_id = format!("SIM-{}", Uuid::new_v4().simple());
        let payment_url = format!("https://sandbox.paypal.example/approve/{order_id}");
        Ok(PaypalOrder {
            order_id,
            payment_url,
        })
    }

    async fn verify_bank_transfer(&self, _reference: &str) -> Result<Verification, GatewayError> {
        self.stall().await;
        Ok(Verification::unconfirmed())
    }

    async fn verify_wallet(
        &self,
        _provider_id: &str,
        _reference: &str,
    ) -> Result<Verification, GatewayError> {
        self.stall().await;
        Ok(Verification::unconfirmed())
    }

    async fn verify_paypal(&self, _order_id: &str) -> Result<Verification, GatewayError> {
        self.stall().await;
        Ok(Verification::unconfirmed())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bounded_passes_fast_calls_through() {
        let gateway = BoundedGateway::new(SimulatedGateway::new());
        let order = gateway
            .create_paypal_order(Money::from_rupees(1975), "LKR")
            .await
            .unwrap();
        assert!(order.order_id.starts_with("SIM-"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_bounded_times_out_slow_calls() {
        let slow = SimulatedGateway::with_latency(Duration::from_secs(60));
        let gateway = BoundedGateway::with_timeout(slow, Duration::from_secs(5));

        let err = gateway
            .verify_bank_transfer("BNK-1-ABCDEF12")
            .await
            .unwrap_err();
        match err {
            GatewayError::Unreachable(message) => assert!(message.contains("timed out")),
            other => panic!("expected Unreachable, got {other:?}"),
        }
    }
}
