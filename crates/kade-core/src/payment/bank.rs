//! # Bank Transfer
//!
//! Direct deposit into one of the store's named bank accounts. The customer
//! transfers manually and must quote the generated reference so the deposit
//! can be matched during statement reconciliation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// A store bank account customers can deposit into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    /// Stable selector id used by the checkout UI.
    pub id: String,
    pub bank_name: String,
    pub account_number: String,
    pub account_name: String,
    pub branch: String,
    /// Present only on accounts that accept international transfers.
    pub swift_code: Option<String>,
}

/// The fixed directory of deposit accounts.
pub fn directory() -> Vec<BankAccount> {
    vec![
        BankAccount {
            id: "boc".to_string(),
            bank_name: "Bank of Ceylon".to_string(),
            account_number: "79845632".to_string(),
            account_name: "Kade Storefront (Pvt) Ltd".to_string(),
            branch: "Colombo Fort".to_string(),
            swift_code: Some("BCEYLKLX".to_string()),
        },
        BankAccount {
            id: "combank".to_string(),
            bank_name: "Commercial Bank".to_string(),
            account_number: "8001245790".to_string(),
            account_name: "Kade Storefront (Pvt) Ltd".to_string(),
            branch: "Union Place".to_string(),
            swift_code: Some("CCEYLKLX".to_string()),
        },
        BankAccount {
            id: "sampath".to_string(),
            bank_name: "Sampath Bank".to_string(),
            account_number: "104857236914".to_string(),
            account_name: "Kade Storefront (Pvt) Ltd".to_string(),
            branch: "Nugegoda".to_string(),
            swift_code: None,
        },
    ]
}

/// Looks up an account by selector id.
pub fn find(id: &str) -> Option<BankAccount> {
    directory().into_iter().find(|a| a.id == id)
}

/// Human-readable deposit instructions embedding amount, account details
/// and the reference the customer must quote.
pub fn instructions(amount: Money, account: &BankAccount, reference: &str) -> String {
    let swift_line = account
        .swift_code
        .as_deref()
        .map(|code| format!("SWIFT code: {code}\n"))
        .unwrap_or_default();

    format!(
        "Transfer {amount} to the following account:\n\
         Bank: {bank}\n\
         Account name: {name}\n\
         Account number: {number}\n\
         Branch: {branch}\n\
         {swift_line}\
         Quote reference {reference} in the deposit remarks.\n\
         Your order ships once the deposit is confirmed.",
        amount = amount,
        bank = account.bank_name,
        name = account.account_name,
        number = account.account_number,
        branch = account.branch,
        swift_line = swift_line,
        reference = reference,
    )
}
