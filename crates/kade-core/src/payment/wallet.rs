//! # Mobile Wallet
//!
//! Manual mobile-money transfer to one of the store's wallet numbers
//! (eZ Cash, mCash, FriMi). Like bank transfer, the customer quotes the
//! generated reference and the payment is confirmed out-of-band.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// A mobile-money provider the store accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WalletProvider {
    /// Stable selector id used by the checkout UI.
    pub id: String,
    pub name: String,
    /// The store's wallet number customers send to.
    pub wallet_number: String,
}

/// The fixed directory of accepted wallet providers.
pub fn directory() -> Vec<WalletProvider> {
    vec![
        WalletProvider {
            id: "ezcash".to_string(),
            name: "Dialog eZ Cash".to_string(),
            wallet_number: "0771230456".to_string(),
        },
        WalletProvider {
            id: "mcash".to_string(),
            name: "Mobitel mCash".to_string(),
            wallet_number: "0711230789".to_string(),
        },
        WalletProvider {
            id: "frimi".to_string(),
            name: "FriMi".to_string(),
            wallet_number: "0751230123".to_string(),
        },
    ]
}

/// Looks up a provider by selector id.
pub fn find(id: &str) -> Option<WalletProvider> {
    directory().into_iter().find(|p| p.id == id)
}

/// Step-by-step manual transfer instructions for a provider.
pub fn instructions(amount: Money, provider: &WalletProvider, reference: &str) -> String {
    format!(
        "Pay {amount} via {name}:\n\
         1. Open your {name} app or dial the USSD menu\n\
         2. Send {amount} to wallet number {number}\n\
         3. Enter reference {reference} in the message/remarks field\n\
         4. Keep the confirmation SMS until your order is confirmed",
        amount = amount,
        name = provider.name,
        number = provider.wallet_number,
        reference = reference,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find() {
        assert_eq!(find("ezcash").unwrap().name, "Dialog eZ Cash");
        assert!(find("venmo").is_none());
    }

    #[test]
    fn test_instructions_embed_details() {
        let provider = find("mcash").unwrap();
        let text = instructions(Money::from_rupees(2175), &provider, "MOB-1-1A2B3C4D");

        assert!(text.contains("Rs 2175"));
        assert!(text.contains("Mobitel mCash"));
        assert!(text.contains("0711230789"));
        assert!(text.contains("MOB-1-1A2B3C4D"));
    }
}
