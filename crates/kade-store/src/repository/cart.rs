//! # Cart Snapshot Repository
//!
//! Persists cart line items as one JSON row per session key.
//!
//! ## Why Snapshots
//! The cart is a client-side state machine; the database never enforces
//! stock or pricing rules on it. A loaded snapshot is reconciled against the
//! live catalog by `Cart::load_items` before it is shown to anyone, so stale
//! rows are harmless.

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use kade_core::cart::CartItem;

use crate::error::StoreResult;

/// Repository for persisted cart snapshots.
#[derive(Debug, Clone)]
pub struct CartSnapshotRepository {
    pool: SqlitePool,
}

impl CartSnapshotRepository {
    /// Creates a new CartSnapshotRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CartSnapshotRepository { pool }
    }

    /// Saves (upserts) the cart lines for a session.
    pub async fn save(&self, session_key: &str, items: &[CartItem]) -> StoreResult<()> {
        debug!(session_key, lines = items.len(), "Saving cart snapshot");

        let payload = serde_json::to_string(items)?;
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO cart_snapshots (session_key, items, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(session_key) DO UPDATE SET
                items = excluded.items,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(session_key)
        .bind(payload)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Loads the saved cart lines for a session.
    ///
    /// Returns an empty list when no snapshot exists; callers cannot tell
    /// "never saved" from "saved empty", and don't need to.
    pub async fn load(&self, session_key: &str) -> StoreResult<Vec<CartItem>> {
        let row = sqlx::query("SELECT items FROM cart_snapshots WHERE session_key = ?1")
            .bind(session_key)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(Vec::new());
        };

        let payload: String = row.try_get("items")?;
        let items: Vec<CartItem> = serde_json::from_str(&payload)?;

        debug!(session_key, lines = items.len(), "Loaded cart snapshot");
        Ok(items)
    }

    /// Deletes the snapshot for a session (after checkout).
    pub async fn delete(&self, session_key: &str) -> StoreResult<()> {
        sqlx::query("DELETE FROM cart_snapshots WHERE session_key = ?1")
            .bind(session_key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Store, StoreConfig};
    use kade_core::money::Money;

    fn tea_line(quantity: i64) -> CartItem {
        CartItem {
            product_id: 1,
            pack_size: "500g".to_string(),
            sku: "TEA-BLK-500".to_string(),
            name: "Ceylon Black Tea".to_string(),
            brand: "Watawala".to_string(),
            image: None,
            unit_price: Money::from_rupees(750),
            weight_grams: 500,
            quantity,
            max_quantity: 20,
        }
    }

    #[tokio::test]
    async fn test_save_load_round_trip() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let repo = store.carts();

        repo.save("session-1", &[tea_line(2)]).await.unwrap();
        let loaded = repo.load("session-1").await.unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].sku, "TEA-BLK-500");
        assert_eq!(loaded[0].quantity, 2);
        assert_eq!(loaded[0].unit_price, Money::from_rupees(750));
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_snapshot() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let repo = store.carts();

        repo.save("session-1", &[tea_line(2)]).await.unwrap();
        repo.save("session-1", &[tea_line(5)]).await.unwrap();

        let loaded = repo.load("session-1").await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].quantity, 5);
    }

    #[tokio::test]
    async fn test_missing_session_loads_empty() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let loaded = store.carts().load("no-such-session").await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let store = Store::new(StoreConfig::in_memory()).await.unwrap();
        let repo = store.carts();

        repo.save("session-1", &[tea_line(2)]).await.unwrap();
        repo.delete("session-1").await.unwrap();

        assert!(repo.load("session-1").await.unwrap().is_empty());
    }
}
