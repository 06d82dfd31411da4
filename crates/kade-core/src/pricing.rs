//! # Pricing & Fee Calculator
//!
//! Derives the shipping fee (by destination district) and VAT from a cart
//! subtotal, and composes them into order totals.
//!
//! ## Composition
//! ```text
//! subtotal ──► shipping_fee(subtotal, district) ──┐
//!     │                                           │
//!     ├──────► vat_amount(subtotal) ──────────────┤
//!     │                                           ▼
//!     └──────────────────────────────► total = subtotal + shipping + tax
//! ```
//!
//! Totals are recomputed from inputs whenever any input changes, never
//! cached independently.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{Money, TaxRate};

// =============================================================================
// Constants
// =============================================================================

/// Orders at or above this subtotal ship free.
pub const FREE_SHIPPING_THRESHOLD: Money = Money::from_rupees(2000);

/// Flat VAT rate: 15%.
pub const VAT_RATE: TaxRate = TaxRate::from_bps(1500);

/// Shipping fee for districts absent from the table.
pub const DEFAULT_SHIPPING_FEE: Money = Money::from_rupees(350);

/// District → shipping fee, in rupees.
///
/// Static configuration, not computed geodesically: fees step up with
/// distance from the Colombo warehouse. Districts not listed fall back to
/// [`DEFAULT_SHIPPING_FEE`].
const SHIPPING_FEES: &[(&str, i64)] = &[
    ("Colombo", 200),
    ("Gampaha", 250),
    ("Kalutara", 250),
    ("Kandy", 250),
    ("Galle", 300),
    ("Matara", 300),
    ("Kurunegala", 300),
    ("Ratnapura", 300),
    ("Anuradhapura", 350),
    ("Jaffna", 400),
    ("Batticaloa", 400),
];

// =============================================================================
// Calculations
// =============================================================================

/// Shipping fee for a subtotal delivered to a district.
///
/// Returns zero at or above [`FREE_SHIPPING_THRESHOLD`]; otherwise the
/// table fee, or [`DEFAULT_SHIPPING_FEE`] for an unknown district.
pub fn shipping_fee(subtotal: Money, district: &str) -> Money {
    if subtotal >= FREE_SHIPPING_THRESHOLD {
        return Money::zero();
    }

    SHIPPING_FEES
        .iter()
        .find(|(d, _)| *d == district)
        .map(|(_, fee)| Money::from_rupees(*fee))
        .unwrap_or(DEFAULT_SHIPPING_FEE)
}

/// VAT on a subtotal, rounded half-up to the nearest whole rupee.
pub fn vat_amount(subtotal: Money) -> Money {
    subtotal.calculate_tax(VAT_RATE)
}

// =============================================================================
// Order Totals
// =============================================================================

/// The composed totals for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
}

/// Composes subtotal + shipping + tax for a destination district.
pub fn order_totals(subtotal: Money, district: &str) -> OrderTotals {
    let shipping = shipping_fee(subtotal, district);
    let tax = vat_amount(subtotal);

    OrderTotals {
        subtotal,
        shipping,
        tax,
        total: subtotal + shipping + tax,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_shipping_threshold_boundary() {
        assert!(shipping_fee(Money::from_rupees(1999), "Colombo").is_positive());
        assert!(shipping_fee(Money::from_rupees(2000), "Colombo").is_zero());
        assert!(shipping_fee(Money::from_rupees(5000), "Jaffna").is_zero());
    }

    #[test]
    fn test_district_table() {
        let subtotal = Money::from_rupees(1500);

        assert_eq!(shipping_fee(subtotal, "Colombo").rupees(), 200);
        assert_eq!(shipping_fee(subtotal, "Kandy").rupees(), 250);
        assert_eq!(shipping_fee(subtotal, "Jaffna").rupees(), 400);
    }

    #[test]
    fn test_unknown_district_gets_default_fee() {
        let subtotal = Money::from_rupees(1500);
        assert_eq!(
            shipping_fee(subtotal, "Nuwara Eliya"),
            DEFAULT_SHIPPING_FEE
        );
    }

    #[test]
    fn test_vat() {
        assert_eq!(vat_amount(Money::from_rupees(1000)).rupees(), 150);
        // 333 × 0.15 = 49.95 → 50
        assert_eq!(vat_amount(Money::from_rupees(333)).rupees(), 50);
    }

    #[test]
    fn test_order_totals_composition() {
        // subtotal 1500 to Kandy: shipping 250, tax round(225) = 225
        let totals = order_totals(Money::from_rupees(1500), "Kandy");

        assert_eq!(totals.subtotal.rupees(), 1500);
        assert_eq!(totals.shipping.rupees(), 250);
        assert_eq!(totals.tax.rupees(), 225);
        assert_eq!(totals.total.rupees(), 1975);
    }

    #[test]
    fn test_order_totals_above_threshold() {
        let totals = order_totals(Money::from_rupees(2400), "Galle");

        assert_eq!(totals.shipping.rupees(), 0);
        assert_eq!(totals.tax.rupees(), 360);
        assert_eq!(totals.total.rupees(), 2760);
    }
}
