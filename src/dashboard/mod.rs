//! Dashboard SDK facade and its request/response types.

pub mod sdk;
pub mod types;

pub use sdk::LiquidlinkDashboard;
pub use types::{AssetValue, WalletValue, WalletValueRequest};
