//! # Order Repository
//!
//! Database operations for assembled orders.
//!
//! ## Storage Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  orders row                                                             │
//! │                                                                         │
//! │  id, payment_method, status          ← tag columns, parsed on read      │
//! │  customer, items                     ← JSON snapshots                   │
//! │  subtotal/shipping/tax/total         ← integer rupees, queryable        │
//! │  created_at, updated_at              ← RFC 3339 UTC                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Status updates re-check the transition matrix from the domain and use a
//! guarded UPDATE (`WHERE id AND status`), so a concurrent writer cannot
//! skip a lifecycle step.

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use kade_core::customer::Customer;
use kade_core::order::{Order, OrderItem, OrderStatus};
use kade_core::payment::PaymentMethod;

use crate::error::{StoreError, StoreResult};

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Inserts a fully assembled order.
    pub async fn insert(&self, order: &Order) -> StoreResult<()> {
        debug!(id = %order.id, total = %order.total, "Inserting order");

        let customer = serde_json::to_string(&order.customer)?;
        let items = serde_json::to_string(&order.items)?;

        sqlx::query(
            r#"
            INSERT INTO orders (
                id, customer, items,
                subtotal, shipping, tax, total,
                payment_method, status, notes,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            "#,
        )
        .bind(&order.id)
        .bind(customer)
        .bind(items)
        .bind(order.subtotal.rupees())
        .bind(order.shipping.rupees())
        .bind(order.tax.rupees())
        .bind(order.total.rupees())
        .bind(order.payment_method.as_str())
        .bind(order.status.as_str())
        .bind(&order.notes)
        .bind(order.created_at.to_rfc3339())
        .bind(order.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Gets an order by ID.
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<Order>> {
        let row = sqlx::query("SELECT * FROM orders WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(row_to_order).transpose()
    }

    /// Lists the most recently created orders.
    pub async fn list_recent(&self, limit: i64) -> StoreResult<Vec<Order>> {
        let rows = sqlx::query("SELECT * FROM orders ORDER BY created_at DESC LIMIT ?1")
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(row_to_order).collect()
    }

    /// Moves an order to a new status.
    ///
    /// Validates the transition against the current stored status, then
    /// applies a guarded UPDATE. If a concurrent writer changed the status
    /// in between, no row matches and the call reports NotFound rather
    /// than clobbering the newer state.
    pub async fn update_status(&self, id: &str, next: OrderStatus) -> StoreResult<()> {
        let Some(order) = self.get_by_id(id).await? else {
            return Err(StoreError::not_found("Order", id));
        };

        if !order.status.can_transition_to(next) {
            return Err(StoreError::Domain(
                kade_core::error::OrderError::InvalidStatusTransition {
                    from: order.status.to_string(),
                    to: next.to_string(),
                },
            ));
        }

        let result = sqlx::query(
            "UPDATE orders SET status = ?1, updated_at = ?2 WHERE id = ?3 AND status = ?4",
        )
        .bind(next.as_str())
        .bind(Utc::now().to_rfc3339())
        .bind(id)
        .bind(order.status.as_str())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            // Lost a race with another status writer
            return Err(StoreError::not_found("Order", id));
        }

        debug!(id, status = %next, "Order status updated");
        Ok(())
    }
}

/// Maps one `orders` row onto the domain type.
fn row_to_order(row: SqliteRow) -> StoreResult<Order> {
    let id: String = row.try_get("id")?;

    let customer: Customer = serde_json::from_str(&row.try_get::<String, _>("customer")?)?;
    let items: Vec<OrderItem> = serde_json::from_str(&row.try_get::<String, _>("items")?)?;

    let method_tag: String = row.try_get("payment_method")?;
    let payment_method =
        PaymentMethod::parse(&method_tag).map_err(|_| StoreError::UnknownTag {
            id: id.clone(),
            column: "payment_method",
            tag: method_tag,
        })?;

    let status_tag: String = row.try_get("status")?;
    let status = OrderStatus::parse(&status_tag).ok_or_else(|| StoreError::UnknownTag {
        id: id.clone(),
        column: "status",
        tag: status_tag,
    })?;

    Ok(Order {
        id,
        customer,
        items,
        subtotal: kade_core::Money::from_rupees(row.try_get("subtotal")?),
        shipping: kade_core::Money::from_rupees(row.try_get("shipping")?),
        tax: kade_core::Money::from_rupees(row.try_get("tax")?),
        total: kade_core::Money::from_rupees(row.try_get("total")?),
        payment_method,
        status,
        notes: row.try_get("notes")?,
        created_at: parse_timestamp(&row.try_get::<String, _>("created_at")?)?,
        updated_at: parse_timestamp(&row.try_get::<String, _>("updated_at")?)?,
    })
}

fn parse_timestamp(raw: &str) -> StoreResult<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Store, StoreConfig};
    use kade_core::customer::Address;
    use kade_core::Money;

    fn sample_order(id: &str) -> Order {
        let now = Utc::now();
        Order {
            id: id.to_string(),
            customer: Customer {
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
            },
            items: vec![OrderItem {
                product_id: 1,
                name: "Ceylon Black Tea".to_string(),
                sku: "TEA-BLK-500".to_string(),
                pack_size: "500g".to_string(),
                price: Money::from_rupees(750),
                quantity: 2,
                image: None,
            }],
            subtotal: Money::from_rupees(1500),
            shipping: Money::from_rupees(250),
            tax: Money::from_rupees(225),
            total: Money::from_rupees(1975),
            payment_method: PaymentMethod::CashOnDelivery,
            status: OrderStatus::Processing,
            notes: Some("Ring the bell twice".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let repo = store.orders();

        repo.insert(&sample_order("order-1")).await.unwrap();
        let loaded = repo.get_by_id("order-1").await.unwrap().unwrap();

        assert_eq!(loaded.customer.first_name, "Nimal");
        assert_eq!(loaded.items.len(), 1);
        assert_eq!(loaded.subtotal, Money::from_rupees(1500));
        assert_eq!(loaded.total, Money::from_rupees(1975));
        assert_eq!(loaded.payment_method, PaymentMethod::CashOnDelivery);
        assert_eq!(loaded.status, OrderStatus::Processing);
        assert_eq!(loaded.notes.as_deref(), Some("Ring the bell twice"));
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        assert!(store.orders().get_by_id("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_recent_orders_newest_first() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let repo = store.orders();

        let mut older = sample_order("order-old");
        older.created_at = Utc::now() - chrono::Duration::hours(1);
        repo.insert(&older).await.unwrap();
        repo.insert(&sample_order("order-new")).await.unwrap();

        let recent = repo.list_recent(10).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, "order-new");

        let limited = repo.list_recent(1).await.unwrap();
        assert_eq!(limited.len(), 1);
    }

    #[tokio::test]
    async fn test_update_status_follows_lifecycle() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let repo = store.orders();
        repo.insert(&sample_order("order-1")).await.unwrap();

        repo.update_status("order-1", OrderStatus::Completed)
            .await
            .unwrap();
        let loaded = repo.get_by_id("order-1").await.unwrap().unwrap();
        assert_eq!(loaded.status, OrderStatus::Completed);

        // Completed → Cancelled is not a legal transition
        let err = repo
            .update_status("order-1", OrderStatus::Cancelled)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Domain(_)));
    }

    #[tokio::test]
    async fn test_update_status_missing_order() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let err = store
            .orders()
            .update_status("ghost", OrderStatus::Completed)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }
}
