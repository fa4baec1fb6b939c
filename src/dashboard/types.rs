//! Wallet valuation types.

use serde::{Deserialize, Serialize};

/// Parameters for a wallet valuation lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletValueRequest {
    /// Wallet addresses, sent in this order.
    pub addresses: Vec<String>,
}

impl WalletValueRequest {
    pub fn new<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            addresses: addresses.into_iter().map(Into::into).collect(),
        }
    }
}

/// Aggregated valuation of one address's token holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletValue {
    pub address: String,
    pub assets: Vec<AssetValue>,
    pub total_coin_value: f64,
}

/// Valuation of a single token balance within a wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetValue {
    pub token_address: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    /// Human-readable balance. Kept textual to avoid precision loss.
    pub balance: String,
    /// Balance in the token's smallest unit.
    pub balance_raw: String,
    pub price: f64,
    pub value: f64,
    pub icon_url: String,
}
