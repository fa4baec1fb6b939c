//! Liquidlink dashboard SDK facade.

use crate::config::{ClientConfig, ClientOptions};
use crate::dashboard::types::{WalletValue, WalletValueRequest};
use crate::error::DashboardResult;
use crate::transport::{versioned_path, DashboardClient};

/// Typed entry point to the dashboard API.
///
/// Construction validates the options up front; a missing or empty API key
/// is reported here and never on a later request.
#[derive(Debug, Clone)]
pub struct LiquidlinkDashboard {
    client: DashboardClient,
}

impl LiquidlinkDashboard {
    pub fn new(options: ClientOptions) -> DashboardResult<Self> {
        let config = options.resolve()?;
        let client = DashboardClient::new(config)?;
        Ok(Self { client })
    }

    /// Fetch the token valuation of each address.
    ///
    /// Records are returned in the order the API sends them. An empty address
    /// list is forwarded as-is.
    pub async fn wallets_token_value(
        &self,
        request: &WalletValueRequest,
    ) -> DashboardResult<Vec<WalletValue>> {
        tracing::debug!(addresses = request.addresses.len(), "Fetching wallet token values");
        self.client
            .get_json(&versioned_path("/wallet/value"), request)
            .await
    }

    pub fn config(&self) -> &ClientConfig {
        self.client.config()
    }
}
