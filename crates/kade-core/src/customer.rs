//! # Customer Types
//!
//! Customer contact and delivery details captured at checkout.
//!
//! The shapes here are snapshotted into orders, so field names are stable
//! for any reporting/admin tooling built on the persisted records.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::validation::{validate_email, validate_phone, validate_required};

/// A delivery address.
///
/// `district` is the key used by both the shipping and COD fee tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub district: String,
    pub postal_code: String,
    pub country: String,
}

/// Customer contact details and delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

impl Customer {
    /// Validates every field and collects ALL violations.
    ///
    /// Returns one human-readable message per problem so the UI can show the
    /// complete list in a single round trip rather than one error at a time.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let checks = [
            validate_required("first name", &self.first_name),
            validate_required("last name", &self.last_name),
            validate_email(&self.email),
            validate_phone(&self.phone),
            validate_required("street", &self.address.street),
            validate_required("city", &self.address.city),
            validate_required("district", &self.address.district),
            validate_required("postal code", &self.address.postal_code),
            validate_required("country", &self.address.country),
        ];

        let messages: Vec<String> = checks
            .into_iter()
            .filter_map(|c| c.err().map(|e| e.to_string()))
            .collect();

        if messages.is_empty() {
            Ok(())
        } else {
            Err(messages)
        }
    }
}
