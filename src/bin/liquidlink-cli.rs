use std::path::PathBuf;

use clap::{Parser, Subcommand};

use liquidlink_dashboard_sdk::config::loader::load_config;
use liquidlink_dashboard_sdk::config::SdkConfig;
use liquidlink_dashboard_sdk::observability::init_logging;
use liquidlink_dashboard_sdk::{LiquidlinkDashboard, WalletValueRequest};

#[derive(Parser)]
#[command(name = "liquidlink-cli")]
#[command(about = "Query the Liquidlink dashboard API", long_about = None)]
struct Cli {
    /// TOML file with [client] and [observability] tables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dashboard base URL
    #[arg(short = 'u', long)]
    base_url: Option<String>,

    /// API key sent as x-api-key
    #[arg(short = 'k', long, env = "LIQUIDLINK_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Request timeout in milliseconds
    #[arg(short, long)]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch token valuations for one or more wallets
    WalletValue {
        #[arg(required = true)]
        addresses: Vec<String>,
    },
}

/// Command-line values win over whatever the config file set.
fn apply_overrides(cli: &Cli, config: &mut SdkConfig) {
    if let Some(url) = &cli.base_url {
        config.client.base_url = Some(url.clone());
    }
    if let Some(key) = &cli.api_key {
        config.client.api_key = Some(key.clone());
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.client.timeout_ms = Some(timeout_ms);
    }
    if let Some(level) = &cli.log_level {
        config.observability.log_level = level.clone();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SdkConfig::default(),
    };
    apply_overrides(&cli, &mut config);

    init_logging(&config.observability.log_level);

    let sdk = LiquidlinkDashboard::new(config.client)?;

    match cli.command {
        Commands::WalletValue { addresses } => {
            let values = sdk
                .wallets_token_value(&WalletValueRequest::new(addresses))
                .await?;
            println!("{}", serde_json::to_string_pretty(&values)?);
        }
    }

    Ok(())
}
