//! # Cart Engine
//!
//! Holds cart line items, applies add/update/remove operations against the
//! catalog, recomputes totals, and enforces stock ceilings.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Transitions                               │
//! │                                                                         │
//! │  Frontend Action        Cart Operation          State Change            │
//! │  ───────────────        ──────────────          ────────────            │
//! │                                                                         │
//! │  Click "Add" ─────────► add_item() ───────────► merge or append line    │
//! │                                                                         │
//! │  Change quantity ─────► update_quantity() ────► line.quantity = n       │
//! │                                                                         │
//! │  Click "Remove" ──────► remove_product() ─────► drop ALL product lines  │
//! │                                                                         │
//! │  Click "Clear" ───────► clear() ──────────────► items.clear()           │
//! │                                                                         │
//! │  App startup ─────────► load_items() ─────────► reconcile vs catalog    │
//! │                                                                         │
//! │  Pre-checkout ────────► validate() ───────────► errors only, no mutate  │
//! │                                                                         │
//! │  Every transition is a pure, synchronous (CartState, Action) → State;   │
//! │  a failed business rule leaves `items` untouched and records a message. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by `(product_id, pack_size)`; adding the same pack
//!   size merges quantities
//! - `0 < quantity <= max_quantity` for every line
//! - Totals are never cached: `total()` and `item_count()` reduce over
//!   `items` on every call, so `total == Σ(price × quantity)` holds by
//!   construction

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{Catalog, PackVariant, Product};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::validate_quantity;

// =============================================================================
// Cart Item
// =============================================================================

/// A line item in the shopping cart.
///
/// ## Design Notes
/// - `unit_price` and the display fields are frozen at add time: the cart
///   shows consistent data even if the catalog changes afterwards
/// - `max_quantity` is the stock ceiling captured at the last mutation or
///   validation touching this line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product ID (catalog key).
    pub product_id: u32,

    /// Pack size label this line resolves to ("100g", "250g", ...).
    pub pack_size: String,

    /// SKU at time of adding (frozen).
    pub sku: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Brand at time of adding (frozen).
    pub brand: String,

    /// Product image at time of adding (frozen).
    pub image: Option<String>,

    /// Unit price at time of adding (frozen).
    pub unit_price: Money,

    /// Shipping weight per unit, in grams.
    pub weight_grams: u32,

    /// Quantity in cart. Always `0 < quantity <= max_quantity`.
    pub quantity: i64,

    /// Stock ceiling as of the last validation/mutation of this line.
    pub max_quantity: i64,
}

impl CartItem {
    /// Creates a cart line snapshotting the product and variant.
    fn from_variant(product: &Product, variant: &PackVariant, quantity: i64) -> Self {
        CartItem {
            product_id: product.id,
            pack_size: variant.size.clone(),
            sku: variant.sku.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            image: product.image.clone(),
            unit_price: variant.price,
            weight_grams: variant.weight_grams,
            quantity,
            max_quantity: variant.stock,
        }
    }

    /// Line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart state machine.
///
/// `errors` is the transient list of messages produced by the last mutation:
/// failures accumulate, the next successful mutation clears them.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    /// Line items, in insertion order (irrelevant to totals, kept for display).
    items: Vec<CartItem>,

    /// Validation/business-rule messages from the last mutation.
    errors: Vec<String>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Read access to the line items.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Messages recorded by the last failed mutation or `validate()` pass.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Cart total, always recomputed by reduction over the lines.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total quantity across all lines, always recomputed.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Records a failed transition: the message is surfaced to the UI and
    /// the error propagates to the caller. `items` is never touched here.
    fn fail(&mut self, err: CoreError) -> CoreError {
        self.errors.push(err.to_string());
        err
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds a pack size of a product to the cart.
    ///
    /// ## Behavior
    /// - Resolves the product and pack size against the catalog
    /// - The stock ceiling uses the COMBINED quantity when a line for this
    ///   exact `(product, pack_size)` already exists: adding 3 more to an
    ///   existing line of 8 with stock 10 fails, it does not clamp
    /// - On success the existing line is merged (and its `max_quantity`
    ///   refreshed) or a new snapshot line is appended; prior errors clear
    ///
    /// ## Errors
    /// `ProductNotFound`, `InvalidPackSize`, `OutOfStock`, or a validation
    /// error for a non-positive quantity. All of them leave `items` intact.
    pub fn add_item(
        &mut self,
        catalog: &Catalog,
        product_id: u32,
        pack_size: &str,
        quantity: i64,
    ) -> CoreResult<()> {
        if let Err(e) = validate_quantity(quantity) {
            return Err(self.fail(e.into()));
        }

        let Some(product) = catalog.get(product_id) else {
            return Err(self.fail(CoreError::ProductNotFound(product_id)));
        };

        let Some(variant) = product.variant(pack_size) else {
            return Err(self.fail(CoreError::InvalidPackSize {
                product_id,
                pack_size: pack_size.to_string(),
            }));
        };

        let existing = self
            .items
            .iter()
            .position(|i| i.product_id == product_id && i.pack_size == pack_size);

        let existing_qty = existing.map(|i| self.items[i].quantity).unwrap_or(0);
        let combined = existing_qty + quantity;

        if combined > variant.stock {
            return Err(self.fail(CoreError::OutOfStock {
                sku: variant.sku.clone(),
                available: variant.stock,
                requested: combined,
            }));
        }

        match existing {
            Some(i) => {
                let line = &mut self.items[i];
                line.quantity = combined;
                line.max_quantity = variant.stock;
            }
            None => self
                .items
                .push(CartItem::from_variant(product, variant, quantity)),
        }

        self.errors.clear();
        Ok(())
    }

    /// Removes ALL lines for a product, regardless of pack size.
    ///
    /// Removal is deliberately coarser-grained than the `(product, pack)`
    /// line key: the storefront's "remove" control acts on the whole product
    /// card, so a product carried in two pack sizes disappears entirely.
    /// Never fails; removing an absent product is a no-op.
    pub fn remove_product(&mut self, product_id: u32) {
        self.items.retain(|i| i.product_id != product_id);
        self.errors.clear();
    }

    /// Sets the quantity of one line.
    ///
    /// ## Behavior
    /// - `new_quantity <= 0` removes the line (equivalent to removal)
    /// - `new_quantity > max_quantity` fails with `QuantityExceedsStock`
    ///   and leaves state unchanged
    /// - Updating a line that is not in the cart is a no-op
    pub fn update_quantity(
        &mut self,
        product_id: u32,
        pack_size: &str,
        new_quantity: i64,
    ) -> CoreResult<()> {
        if new_quantity <= 0 {
            self.items
                .retain(|i| !(i.product_id == product_id && i.pack_size == pack_size));
            self.errors.clear();
            return Ok(());
        }

        let Some(line) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product_id && i.pack_size == pack_size)
        else {
            return Ok(());
        };

        if new_quantity > line.max_quantity {
            let err = CoreError::QuantityExceedsStock {
                sku: line.sku.clone(),
                requested: new_quantity,
                max: line.max_quantity,
            };
            return Err(self.fail(err));
        }

        line.quantity = new_quantity;
        self.errors.clear();
        Ok(())
    }

    /// Resets to the empty state unconditionally. Idempotent.
    pub fn clear(&mut self) {
        self.items.clear();
        self.errors.clear();
    }

    /// Hydrates the cart from persisted storage, reconciling against the
    /// live catalog.
    ///
    /// Lines whose product or pack size no longer exists, or whose saved
    /// quantity exceeds current stock, are silently dropped: this is a
    /// load-time reconciliation, not a user action, so nothing lands in
    /// `errors`. Survivors get their `max_quantity` refreshed.
    pub fn load_items(&mut self, saved: Vec<CartItem>, catalog: &Catalog) {
        self.items = saved
            .into_iter()
            .filter_map(|mut item| {
                let stock = catalog.pack_stock(item.product_id, &item.pack_size)?;
                if item.quantity <= 0 || item.quantity > stock {
                    return None;
                }
                item.max_quantity = stock;
                Some(item)
            })
            .collect();
        self.errors.clear();
    }

    /// Re-checks every line against the catalog without mutating `items`.
    ///
    /// Populates `errors` with one message per violated line, leaving
    /// quantities untouched so the caller can decide remediation (e.g.
    /// prompt the user to reduce a quantity). Returns `true` when clean.
    pub fn validate(&mut self, catalog: &Catalog) -> bool {
        let mut messages = Vec::new();

        for item in &self.items {
            match catalog.pack_stock(item.product_id, &item.pack_size) {
                None => messages.push(format!(
                    "{} ({}) is no longer available",
                    item.name, item.pack_size
                )),
                Some(stock) if item.quantity > stock => messages.push(
                    CoreError::OutOfStock {
                        sku: item.sku.clone(),
                        available: stock,
                        requested: item.quantity,
                    }
                    .to_string(),
                ),
                Some(_) => {}
            }
        }

        self.errors = messages;
        self.errors.is_empty()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Number of distinct lines.
    pub lines: usize,
    /// Sum of quantities across lines.
    pub item_count: i64,
    /// Sum of price × quantity across lines.
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            lines: cart.items().len(),
            item_count: cart.item_count(),
            total: cart.total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
