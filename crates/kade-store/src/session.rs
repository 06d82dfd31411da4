//! # Cart Session
//!
//! Glues the pure cart state machine to its persisted snapshot and drives
//! checkout.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CartSession::open(store, catalog, key)                                 │
//! │       │  load snapshot ──► Cart::load_items (reconcile vs catalog)      │
//! │       ▼                                                                 │
//! │  add / update / remove  ──► mutate in-memory cart ──► persist snapshot  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  place_order(customer, payment)                                         │
//! │       │  create_order ──► insert row ──► clear cart ──► drop snapshot   │
//! │       ▼                                                                 │
//! │  Order                                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence Policy
//! Snapshot writes after a mutation are best-effort: the in-memory cart is
//! the source of truth for this session, so a failed write is logged and
//! the shopper keeps shopping. Checkout is the opposite - the order insert
//! must succeed before the cart is cleared.

use thiserror::Error;
use tracing::warn;

use kade_core::cart::Cart;
use kade_core::catalog::Catalog;
use kade_core::customer::Customer;
use kade_core::error::{CoreError, OrderError};
use kade_core::order::{create_order, Order};
use kade_core::payment::PaymentRecord;

use crate::error::StoreError;
use crate::pool::Store;

/// Errors surfaced by checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Order assembly rejected the input (empty cart, invalid customer).
    #[error(transparent)]
    Order(#[from] OrderError),

    /// Persisting the order failed; the cart is left untouched.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One shopper's cart bound to a session key and a database handle.
pub struct CartSession {
    store: Store,
    session_key: String,
    cart: Cart,
}

impl CartSession {
    /// Opens a session, restoring any saved snapshot.
    ///
    /// Saved lines are reconciled against the live catalog: vanished
    /// products are dropped and quantities are clamped to current stock.
    pub async fn open(
        store: Store,
        catalog: &Catalog,
        session_key: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let session_key = session_key.into();
        let saved = store.carts().load(&session_key).await?;

        let mut cart = Cart::new();
        cart.load_items(saved, catalog);

        Ok(CartSession {
            store,
            session_key,
            cart,
        })
    }

    /// The in-memory cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Adds a pack variant to the cart and persists the snapshot.
    pub async fn add_item(
        &mut self,
        catalog: &Catalog,
        product_id: u32,
        pack_size: &str,
        quantity: i64,
    ) -> Result<(), CoreError> {
        self.cart.add_item(catalog, product_id, pack_size, quantity)?;
        self.persist().await;
        Ok(())
    }

    /// Changes a line's quantity and persists the snapshot.
    pub async fn update_quantity(
        &mut self,
        product_id: u32,
        pack_size: &str,
        new_quantity: i64,
    ) -> Result<(), CoreError> {
        self.cart.update_quantity(product_id, pack_size, new_quantity)?;
        self.persist().await;
        Ok(())
    }

    /// Removes every pack size of a product and persists the snapshot.
    pub async fn remove_product(&mut self, product_id: u32) {
        self.cart.remove_product(product_id);
        self.persist().await;
    }

    /// Empties the cart and persists the snapshot.
    pub async fn clear(&mut self) {
        self.cart.clear();
        self.persist().await;
    }

    /// Assembles and stores an order from the current cart, then clears it.
    ///
    /// Ordering matters: the insert happens first, so a database failure
    /// leaves the cart intact for a retry.
    pub async fn place_order(
        &mut self,
        customer: Customer,
        payment: &PaymentRecord,
        notes: Option<String>,
    ) -> Result<Order, CheckoutError> {
        let order = create_order(&self.cart, customer, payment, notes)?;
        self.store.orders().insert(&order).await?;

        self.cart.clear();
        if let Err(e) = self.store.carts().delete(&self.session_key).await {
            warn!(session_key = %self.session_key, error = %e, "Failed to drop cart snapshot after checkout");
        }

        Ok(order)
    }

    /// Best-effort snapshot write after a mutation.
    async fn persist(&self) {
        if let Err(e) = self
            .store
            .carts()
            .save(&self.session_key, self.cart.items())
            .await
        {
            warn!(session_key = %self.session_key, error = %e, "Failed to persist cart snapshot");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::StoreConfig;
    use kade_core::catalog::{PackVariant, Product};
    use kade_core::customer::Address;
    use kade_core::money::Money;
    use kade_core::payment::{PaymentDetail, PaymentStatus};
    use chrono::Utc;

    fn catalog() -> Catalog {
        Catalog::new(vec![Product {
            id: 1,
            name: "Ceylon Black Tea".to_string(),
            brand: "Watawala".to_string(),
            category: "Tea".to_string(),
            image: None,
            base_price: Money::from_rupees(750),
            variants: vec![PackVariant {
                size: "500g".to_string(),
                price: Money::from_rupees(750),
                weight_grams: 500,
                stock: 20,
                sku: "TEA-BLK-500".to_string(),
            }],
        }])
        .unwrap()
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

    fn cod_payment() -> PaymentRecord {
        PaymentRecord {
            id: "pay-1".to_string(),
            reference: "COD-1-ABCDEF12".to_string(),
            amount: Money::from_rupees(1975),
            currency: "LKR".to_string(),
            status: PaymentStatus::Pending,
            created_at: Utc::now(),
            detail: PaymentDetail::CashOnDelivery {
                delivery_date: chrono::NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
                slot: kade_core::payment::cod::DeliverySlot::Morning,
                delivery_fee: Money::from_rupees(200),
                total_amount: Money::from_rupees(2175),
            },
        }
    }

    #[tokio::test]
    async fn test_session_survives_reopen() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let catalog = catalog();

        let mut session = CartSession::open(store.clone(), &catalog, "visitor-1")
            .await
            .unwrap();
        session.add_item(&catalog, 1, "500g", 2).await.unwrap();
        drop(session);

        let reopened = CartSession::open(store, &catalog, "visitor-1")
            .await
            .unwrap();
        assert_eq!(reopened.cart().items().len(), 1);
        assert_eq!(reopened.cart().items()[0].quantity, 2);
        assert_eq!(reopened.cart().total(), Money::from_rupees(1500));
    }

    #[tokio::test]
    async fn test_reopen_drops_vanished_products() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let catalog_before = catalog();

        let mut session = CartSession::open(store.clone(), &catalog_before, "visitor-1")
            .await
            .unwrap();
        session.add_item(&catalog_before, 1, "500g", 2).await.unwrap();
        drop(session);

        // Product discontinued overnight
        let catalog_after = Catalog::new(vec![]).unwrap();
        let reopened = CartSession::open(store, &catalog_after, "visitor-1")
            .await
            .unwrap();
        assert!(reopened.cart().is_empty());
    }

    #[tokio::test]
    async fn test_place_order_clears_cart_and_snapshot() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let catalog = catalog();

        let mut session = CartSession::open(store.clone(), &catalog, "visitor-1")
            .await
            .unwrap();
        session.add_item(&catalog, 1, "500g", 2).await.unwrap();

        let order = session
            .place_order(kandy_customer(), &cod_payment(), None)
            .await
            .unwrap();

        assert_eq!(order.total, Money::from_rupees(1975));
        assert!(session.cart().is_empty());

        // Stored row matches the returned order
        let stored = store.orders().get_by_id(&order.id).await.unwrap().unwrap();
        assert_eq!(stored.total, order.total);

        // Snapshot is gone
        let reopened = CartSession::open(store, &catalog, "visitor-1")
            .await
            .unwrap();
        assert!(reopened.cart().is_empty());
    }

    #[tokio::test]
    async fn test_place_order_empty_cart_rejected() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let catalog = catalog();

        let mut session = CartSession::open(store, &catalog, "visitor-1")
            .await
            .unwrap();
        let err = session
            .place_order(kandy_customer(), &cod_payment(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, CheckoutError::Order(OrderError::EmptyCart)));
    }
}
