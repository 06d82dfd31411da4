//! # Payment Reference Generation
//!
//! Every payment record carries a globally-unique, human-quotable reference
//! in the format `<PREFIX>-<timestamp-millis>-<random-suffix>`. The prefix
//! differs by method family to aid support triage.
//!
//! Uniqueness is probabilistic: the 8-hex-char suffix gives 16^8 ≈ 4.3e9
//! combinations within a single millisecond, comfortably above the 36^6
//! floor this domain needs. Collisions are not safety-critical here, so no
//! coordination is required.

use chrono::Utc;
use uuid::Uuid;

use super::PaymentMethod;

/// Length of the random suffix, in hex characters.
const SUFFIX_LEN: usize = 8;

/// Generates a reference like `BNK-1724567890123-A3F9C2D1`.
pub fn generate(method: PaymentMethod) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    let suffix = hex[..SUFFIX_LEN].to_uppercase();

    format!(
        "{}-{}-{}",
        method.reference_prefix(),
        Utc::now().timestamp_millis(),
        suffix
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_reference_format() {
        let reference = generate(PaymentMethod::BankTransfer);
        let parts: Vec<&str> = reference.split('-').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "BNK");
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), SUFFIX_LEN);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_prefix_per_method() {
        assert!(generate(PaymentMethod::CashOnDelivery).starts_with("COD-"));
        assert!(generate(PaymentMethod::BankTransfer).starts_with("BNK-"));
        assert!(generate(PaymentMethod::MobileWallet).starts_with("MOB-"));
        assert!(generate(PaymentMethod::Paypal).starts_with("PPL-"));
    }

    /// 10,000 references for the same method in rapid succession must not
    /// collide.
    #[test]
    fn test_reference_uniqueness() {
        let refs: HashSet<String> = (0..10_000)
            .map(|_| generate(PaymentMethod::MobileWallet))
            .collect();
        assert_eq!(refs.len(), 10_000);
    }
}
