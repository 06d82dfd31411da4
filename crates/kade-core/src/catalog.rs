//! # Product Catalog
//!
//! Read-only lookup of products and their pack-size variants. Everything
//! else in the core (cart, pricing, checkout) consumes this module.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product "Kade Ceylon Tea"                                              │
//! │  ├── PackVariant { size: "100g", price: 450,  stock: 24, sku: KT-100G } │
//! │  ├── PackVariant { size: "250g", price: 980,  stock: 10, sku: KT-250G } │
//! │  └── PackVariant { size: "500g", price: 1850, stock: 4,  sku: KT-500G } │
//! │                                                                         │
//! │  Invariants (checked at construction):                                  │
//! │  • SKUs unique within a product                                         │
//! │  • Stock quantities are non-negative                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is assumed consistent for the duration of a single cart
//! operation; it is never mutated by the core.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Pack Size Variant
// =============================================================================

/// One purchasable pack size of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PackVariant {
    /// Size label shown to the customer ("100g", "250g", "1kg").
    pub size: String,

    /// Price for this pack size, in whole rupees.
    pub price: Money,

    /// Shipping weight in grams.
    pub weight_grams: u32,

    /// Units currently in stock. Never negative.
    pub stock: i64,

    /// Stock Keeping Unit - business identifier, unique within the product.
    pub sku: String,
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog, externally supplied and immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog identifier.
    pub id: u32,

    /// Display name shown on product cards and receipts.
    pub name: String,

    /// Brand name.
    pub brand: String,

    /// Category slug ("tea", "spices", ...).
    pub category: String,

    /// Primary product image path, if any.
    pub image: Option<String>,

    /// Reference price of the smallest pack (display only; real prices
    /// live on the variants).
    pub base_price: Money,

    /// Available pack sizes.
    pub variants: Vec<PackVariant>,
}

impl Product {
    /// Finds the pack-size variant with the given size label.
    pub fn variant(&self, size: &str) -> Option<&PackVariant> {
        self.variants.iter().find(|v| v.size == size)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Read-only product lookup.
///
/// Construction validates the data-source invariants once, so every later
/// lookup can trust them.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: HashMap<u32, Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting products that violate invariants.
    ///
    /// ## Errors
    /// - `DuplicateSku` if two variants of one product share a SKU
    /// - `NegativeStock` if any variant has stock below zero
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut map = HashMap::with_capacity(products.len());

        for product in products {
            let mut seen = HashSet::new();
            for variant in &product.variants {
                if !seen.insert(variant.sku.as_str()) {
                    return Err(CoreError::DuplicateSku {
                        product_id: product.id,
                        sku: variant.sku.clone(),
                    });
                }
                if variant.stock < 0 {
                    return Err(CoreError::NegativeStock {
                        sku: variant.sku.clone(),
                        stock: variant.stock,
                    });
                }
            }
            map.insert(product.id, product);
        }

        Ok(Catalog { products: map })
    }

    /// Looks up a product by id.
    pub fn get(&self, product_id: u32) -> Option<&Product> {
        self.products.get(&product_id)
    }

    /// Price for a specific pack size, if the product and size exist.
    pub fn pack_price(&self, product_id: u32, size: &str) -> Option<Money> {
        self.get(product_id)?.variant(size).map(|v| v.price)
    }

    /// Current stock for a specific pack size, if the product and size exist.
    pub fn pack_stock(&self, product_id: u32, size: &str) -> Option<i64> {
        self.get(product_id)?.variant(size).map(|v| v.stock)
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tea_product() -> Product {
        Product {
            id: 1,
            name: "Kade Ceylon Tea".to_string(),
            brand: "Kade".to_string(),
            category: "tea".to_string(),
            image: Some("/images/tea.jpg".to_string()),
            base_price: Money::from_rupees(450),
            variants: vec![
                PackVariant {
                    size: "100g".to_string(),
                    price: Money::from_rupees(450),
                    weight_grams: 120,
                    stock: 24,
                    sku: "KT-100G".to_string(),
                },
                PackVariant {
                    size: "250g".to_string(),
                    price: Money::from_rupees(980),
                    weight_grams: 280,
                    stock: 10,
                    sku: "KT-250G".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::new(vec![tea_product()]).unwrap();

        assert!(catalog.get(1).is_some());
        assert!(catalog.get(99).is_none());
        assert_eq!(catalog.pack_price(1, "250g"), Some(Money::from_rupees(980)));
        assert_eq!(catalog.pack_stock(1, "100g"), Some(24));
        assert_eq!(catalog.pack_price(1, "5kg"), None);
    }

    #[test]
    fn test_duplicate_sku_rejected() {
        let mut product = tea_product();
        product.variants[1].sku = "KT-100G".to_string();

        let err = Catalog::new(vec![product]).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateSku { .. }));
    }

    #[test]
    fn test_negative_stock_rejected() {
        let mut product = tea_product();
        product.variants[0].stock = -1;

        let err = Catalog::new(vec![product]).unwrap_err();
        assert!(matches!(err, CoreError::NegativeStock { .. }));
    }

    #[test]
    fn test_variant_lookup() {
        let product = tea_product();
        assert_eq!(product.variant("100g").unwrap().sku, "KT-100G");
        assert!(product.variant("1kg").is_none());
    }
}
