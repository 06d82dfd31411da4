//! # Error Types
//!
//! Domain-specific error types for kade-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kade-core errors (this file)                                           │
//! │  ├── CoreError        - Cart & catalog business rules                   │
//! │  ├── ValidationError  - Input validation failures                       │
//! │  ├── PaymentError     - Payment method abstraction                      │
//! │  ├── GatewayError     - Raw upstream provider failures                  │
//! │  └── OrderError       - Order assembly & status transitions             │
//! │                                                                         │
//! │  kade-store errors (separate crate)                                     │
//! │  └── StoreError       - Database operation failures                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError/OrderError → StoreError → Frontend   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (SKU, pack size, available stock)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart and catalog business-rule errors.
///
/// These block the mutation that raised them and leave prior state fully
/// intact; the cart additionally records the message for the UI.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    /// The product exists but has no such pack size.
    #[error("Product {product_id} has no pack size '{pack_size}'")]
    InvalidPackSize { product_id: u32, pack_size: String },

    /// Insufficient stock to add the requested quantity.
    ///
    /// `requested` is the combined quantity (existing line + newly requested)
    /// so that merging into an existing line cannot slip past the ceiling.
    ///
    /// ## User Workflow
    /// ```text
    /// Add to Cart (qty: 3, already 8 in cart)
    ///      │
    ///      ▼
    /// Check stock: available=10, combined=11
    ///      │
    ///      ▼
    /// OutOfStock { sku: "KT-100G", available: 10, requested: 11 }
    ///      │
    ///      ▼
    /// UI shows: "Only 10 of KT-100G in stock"
    /// ```
    #[error("Insufficient stock for {sku}: available {available}, requested {requested}")]
    OutOfStock {
        sku: String,
        available: i64,
        requested: i64,
    },

    /// Quantity update exceeds the stock ceiling recorded on the line.
    #[error("Quantity {requested} for {sku} exceeds available stock ({max})")]
    QuantityExceedsStock {
        sku: String,
        requested: i64,
        max: i64,
    },

    /// Duplicate SKU across a product's pack-size variants.
    #[error("Duplicate SKU '{sku}' in product {product_id}")]
    DuplicateSku { product_id: u32, sku: String },

    /// A pack-size variant carries negative stock.
    #[error("Negative stock ({stock}) for SKU '{sku}'")]
    NegativeStock { sku: String, stock: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements and are rejected
/// synchronously, before any state mutation runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., malformed email or phone number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Payment Error
// =============================================================================

/// Payment method abstraction errors.
///
/// ## Taxonomy
/// - `InvalidMethod` / `Unknown*` / `SlotUnavailable`: bad input, rejected
///   before anything is created.
/// - `UpstreamCreateFailed`: the remote call needed to construct the payment
///   (e.g. PayPal order creation) failed; no record was created. Retryable.
/// - `VerificationUnavailable`: verification could not be attempted at all.
///   Distinct from "checked and not yet paid", which is a successful
///   verification with `verified == false`.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Unrecognized payment method tag.
    #[error("Invalid payment method: '{0}'")]
    InvalidMethod(String),

    /// The remote call needed to construct the payment failed.
    #[error("Upstream payment creation failed: {0}")]
    UpstreamCreateFailed(String),

    /// Verification could not be attempted (provider unreachable, timeout).
    #[error("Payment verification unavailable: {0}")]
    VerificationUnavailable(String),

    /// The requested COD delivery slot is marked unavailable.
    #[error("Delivery slot '{0}' is not available")]
    SlotUnavailable(String),

    /// The selected bank account id is not in the directory.
    #[error("Unknown bank account: '{0}'")]
    UnknownBankAccount(String),

    /// The selected mobile-money provider id is not in the directory.
    #[error("Unknown wallet provider: '{0}'")]
    UnknownWalletProvider(String),

    /// Payment status transitions are one-directional; a failed or cancelled
    /// payment must be retried with a new record, never resurrected.
    #[error("Payment cannot move from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Gateway Error
// =============================================================================

/// Raw failure from an upstream payment provider.
///
/// Adapters translate their SDK/transport errors into this type; the
/// payment service maps it onto [`PaymentError`] depending on the operation.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The provider could not be reached (network, DNS, TLS, 5xx).
    #[error("Provider unreachable: {0}")]
    Unreachable(String),

    /// The provider answered but rejected the request.
    #[error("Provider rejected request: {0}")]
    Rejected(String),
}

// =============================================================================
// Order Error
// =============================================================================

/// Order assembly errors.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Orders cannot be created from an empty cart.
    #[error("Cannot create an order from an empty cart")]
    EmptyCart,

    /// Customer details failed validation; one message per violation.
    #[error("Invalid customer details: {}", messages.join("; "))]
    InvalidCustomer { messages: Vec<String> },

    /// The requested status change is not a permitted transition.
    #[error("Order cannot move from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for Results with PaymentError.
pub type PaymentResult<T> = Result<T, PaymentError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::OutOfStock {
            sku: "KT-100G".to_string(),
            available: 10,
            requested: 11,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for KT-100G: available 10, requested 11"
        );

        let err = CoreError::InvalidPackSize {
            product_id: 7,
            pack_size: "5kg".to_string(),
        };
        assert_eq!(err.to_string(), "Product 7 has no pack size '5kg'");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "email is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_invalid_customer_joins_messages() {
        let err = OrderError::InvalidCustomer {
            messages: vec!["email is required".to_string(), "phone is required".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Invalid customer details: email is required; phone is required"
        );
    }
}
