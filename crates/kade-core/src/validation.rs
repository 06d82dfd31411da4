//! # Validation Module
//!
//! Input validation utilities for the storefront core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                         │
//! │  ├── Basic format checks (empty, length)                                │
//! │  └── Immediate user feedback                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                            │
//! │  ├── Field shape validation (email, phone, required)                    │
//! │  └── Rejected synchronously, before any state mutation                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Business rules (cart/payment/order modules)                   │
//! │  └── Stock ceilings, slot availability, status transitions              │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a required field is present and non-blank.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - Must contain exactly one `@` with a dot somewhere after it
/// - No whitespace
///
/// Deliberately loose: the definitive check is the mail actually arriving.
///
/// ## Example
/// ```rust
/// use kade_core::validation::validate_email;
///
/// assert!(validate_email("nimal@example.com").is_ok());
/// assert!(validate_email("not-an-email").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    if email.len() > 254 {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: 254,
        });
    }

    let invalid = || ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: "must look like name@domain.tld".to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    // Domain needs an interior dot: "a.b", not ".b" or "a."
    if !domain
        .find('.')
        .map(|i| i > 0 && i < domain.len() - 1)
        .unwrap_or(false)
    {
        return Err(invalid());
    }

    Ok(())
}

/// Validates a Sri Lankan phone number.
///
/// ## Rules
/// - Local form: `0XXXXXXXXX` (10 digits starting with 0)
/// - International form: `+94XXXXXXXXX` (9 digits after +94)
/// - Spaces and hyphens are ignored
///
/// ## Example
/// ```rust
/// use kade_core::validation::validate_phone;
///
/// assert!(validate_phone("0771234567").is_ok());
/// assert!(validate_phone("+94 77 123 4567").is_ok());
/// assert!(validate_phone("12345").is_err());
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let cleaned: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    if cleaned.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    let digits = cleaned.strip_prefix("+94").unwrap_or(&cleaned);

    let valid = if cleaned.starts_with("+94") {
        digits.len() == 9 && digits.chars().all(|c| c.is_ascii_digit())
    } else {
        digits.len() == 10
            && digits.starts_with('0')
            && digits.chars().all(|c| c.is_ascii_digit())
    };

    if !valid {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must be 0XXXXXXXXX or +94XXXXXXXXX".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart quantity.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// A non-positive quantity reaching the cart engine is a caller bug; it is
/// rejected here before any state is touched.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a payment amount in rupees.
///
/// ## Rules
/// - Must be positive (> 0); zero or negative payments make no sense
pub fn validate_payment_amount(rupees: i64) -> ValidationResult<()> {
    if rupees <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "payment amount".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
