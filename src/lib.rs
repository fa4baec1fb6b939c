//! Liquidlink Dashboard SDK
//!
//! Typed client for the Liquidlink dashboard API.
//!
//! ```no_run
//! use liquidlink_dashboard_sdk::{ClientOptions, LiquidlinkDashboard, WalletValueRequest};
//!
//! # async fn run() -> Result<(), liquidlink_dashboard_sdk::Error> {
//! let sdk = LiquidlinkDashboard::new(ClientOptions::new("my-api-key").with_timeout_ms(5_000))?;
//! let values = sdk
//!     .wallets_token_value(&WalletValueRequest::new(["0xabc"]))
//!     .await?;
//! for wallet in values {
//!     println!("{} holds {}", wallet.address, wallet.total_coin_value);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dashboard;
pub mod error;
pub mod observability;
pub mod transport;

pub use config::{ClientConfig, ClientOptions, API_VERSION, DEFAULT_BASE_URL};
pub use dashboard::{AssetValue, LiquidlinkDashboard, WalletValue, WalletValueRequest};
pub use error::{DashboardResult, Error};
pub use transport::DashboardClient;
