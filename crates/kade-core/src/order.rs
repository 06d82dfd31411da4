//! # Order Assembly
//!
//! Turns a validated cart, a customer, and a created payment into an
//! immutable order snapshot.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   Cart + Customer + PaymentRecord                                       │
//! │         │ create_order                                                  │
//! │         ▼                                                               │
//! │   Order (status: Processing)                                            │
//! │         │                                                               │
//! │         ├──► Completed ──► Refunded                                     │
//! │         └──► Cancelled                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rules
//! - Orders snapshot prices and quantities at assembly time; later catalog
//!   or cart changes never reach back into an existing order.
//! - Totals are computed once, here, from the pricing rules; the stored
//!   breakdown always satisfies `total = subtotal + shipping + tax`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::{Cart, CartItem};
use crate::customer::Customer;
use crate::error::OrderError;
use crate::money::Money;
use crate::payment::{PaymentMethod, PaymentRecord};
use crate::pricing;

// =============================================================================
// Order Status
// =============================================================================

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    /// Whether moving to `next` is a permitted transition.
    ///
    /// Cancelled and Refunded are terminal; a refund requires the order to
    /// have completed first.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (
                OrderStatus::Pending,
                OrderStatus::Processing | OrderStatus::Completed | OrderStatus::Cancelled
            ) | (
                OrderStatus::Processing,
                OrderStatus::Completed | OrderStatus::Cancelled
            ) | (OrderStatus::Completed, OrderStatus::Refunded)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Refunded => "refunded",
        }
    }

    /// Parses the stored tag, inverse of [`OrderStatus::as_str`].
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "pending" => Some(OrderStatus::Pending),
            "processing" => Some(OrderStatus::Processing),
            "completed" => Some(OrderStatus::Completed),
            "cancelled" => Some(OrderStatus::Cancelled),
            "refunded" => Some(OrderStatus::Refunded),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Order Line
// =============================================================================

/// One purchased line, snapshotted from the cart at assembly time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: u32,
    pub name: String,
    pub sku: String,
    pub pack_size: String,
    /// Unit price at purchase time.
    pub price: Money,
    pub quantity: i64,
    pub image: Option<String>,
}

impl From<&CartItem> for OrderItem {
    fn from(item: &CartItem) -> Self {
        OrderItem {
            product_id: item.product_id,
            name: item.name.clone(),
            sku: item.sku.clone(),
            pack_size: item.pack_size.clone(),
            price: item.unit_price,
            quantity: item.quantity,
            image: item.image.clone(),
        }
    }
}

impl OrderItem {
    /// Price times quantity for this line.
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order
// =============================================================================

/// An assembled order: customer, line snapshot, totals breakdown, payment
/// method, and lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Internal identifier (UUID v4).
    pub id: String,

    pub customer: Customer,
    pub items: Vec<OrderItem>,

    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,

    pub payment_method: PaymentMethod,
    pub status: OrderStatus,

    /// Optional customer note to the store.
    pub notes: Option<String>,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Moves the order to a new status, enforcing the transition matrix
    /// and bumping `updated_at`.
    pub fn update_status(&mut self, next: OrderStatus) -> Result<(), OrderError> {
        if !self.status.can_transition_to(next) {
            return Err(OrderError::InvalidStatusTransition {
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }

        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// Assembles an order from a cart, customer, and created payment.
///
/// Fails on an empty cart and on invalid customer details (all violations
/// reported together). Totals come from the pricing rules keyed off the
/// customer's district; the order starts in `Processing`.
pub fn create_order(
    cart: &Cart,
    customer: Customer,
    payment: &PaymentRecord,
    notes: Option<String>,
) -> Result<Order, OrderError> {
    if cart.items().is_empty() {
        return Err(OrderError::EmptyCart);
    }
    if let Err(messages) = customer.validate() {
        return Err(OrderError::InvalidCustomer { messages });
    }

    let items: Vec<OrderItem> = cart.items().iter().map(OrderItem::from).collect();
    let totals = pricing::order_totals(cart.total(), &customer.address.district);
    let now = Utc::now();

    Ok(Order {
        id: Uuid::new_v4().to_string(),
        customer,
        items,
        subtotal: totals.subtotal,
        shipping: totals.shipping,
        tax: totals.tax,
        total: totals.total,
        payment_method: payment.method(),
        status: OrderStatus::Processing,
        notes,
        created_at: now,
        updated_at: now,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
