//! # kade-core: Pure Business Logic for Kade Storefront
//!
//! This crate is the **heart** of the storefront. It contains all business
//! logic as pure functions and state machines with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Kade Storefront Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                        Storefront UI                            │   │
//! │  │    Catalog ──► Cart ──► Checkout ──► Payment ──► Confirmation  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kade-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ │   │
//! │  │   │ catalog │ │  cart   │ │ pricing │ │ payment │ │  order  │ │   │
//! │  │   │ Product │ │  Cart   │ │shipping │ │ Service │ │assembly │ │   │
//! │  │   │ variants│ │  items  │ │  + VAT  │ │ 4 kinds │ │snapshot │ │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • GATEWAY AS A PORT        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  kade-store (Persistence Layer)                 │   │
//! │  │         SQLite cart snapshots, orders, gateway adapters         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Products with per-pack variants, prices and stock
//! - [`cart`] - Cart state machine with stock-ceiling enforcement
//! - [`pricing`] - District shipping fees, free-shipping threshold, VAT
//! - [`payment`] - Uniform abstraction over COD, bank, wallet and PayPal
//! - [`order`] - Order assembly and lifecycle
//! - [`customer`] - Customer and address types with validation
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Field-level validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: Database, network and file system access is FORBIDDEN
//!    here; the one async seam is the injected [`payment::gateway`] port
//! 2. **Integer Money**: All monetary values are whole rupees (i64) to avoid
//!    float errors
//! 3. **Explicit Errors**: All errors are typed, never strings or panics
//! 4. **Snapshots, not references**: Cart lines and orders copy the prices
//!    they were created with
//!
//! ## Example Usage
//!
//! ```rust
//! use kade_core::money::{Money, TaxRate};
//!
//! // Create money from whole rupees (never from floats!)
//! let subtotal = Money::from_rupees(1000);
//!
//! // 15% VAT with half-up rounding
//! let vat = subtotal.calculate_tax(TaxRate::from_bps(1500));
//! assert_eq!(vat.rupees(), 150);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod customer;
pub mod error;
pub mod money;
pub mod order;
pub mod payment;
pub mod pricing;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kade_core::Cart` instead of
// `use kade_core::cart::Cart`

pub use cart::{Cart, CartItem, CartTotals};
pub use catalog::{Catalog, PackVariant, Product};
pub use customer::{Address, Customer};
pub use error::{CoreError, OrderError, PaymentError, ValidationError};
pub use money::{Money, TaxRate};
pub use order::{create_order, Order, OrderItem, OrderStatus};
pub use payment::{
    MethodData, PaymentMethod, PaymentRecord, PaymentRequest, PaymentService, PaymentStatus,
    CURRENCY,
};
