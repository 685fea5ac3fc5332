//! Carrier billing service
//!
//! Serves the plan catalog, rating preview, customer usage and statements and the
//! make-transaction workflow over HTTP. Reads configuration from a TOML file
//! (~/.config/carrier-billing/config.toml).

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use carrier_billing::{default_config_path, init_tracing, AppConfig, ServerHandle};

#[derive(Debug, Parser)]
#[command(name = "carrier-billing", version, about = "Carrier plan billing service")]
struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, env = "BILLING_CONFIG")]
    config: Option<PathBuf>,

    /// Override `server.host`
    #[arg(long)]
    host: Option<String>,

    /// Override `server.port`
    #[arg(short, long)]
    port: Option<u16>,

    /// Load accounts, phone numbers, transactions and call records from a
    /// TOML seed file (overrides `storage.seed_file`)
    #[arg(long, env = "BILLING_SEED")]
    seed: Option<PathBuf>,

    /// Override `logging.level`
    #[arg(long)]
    log_level: Option<String>,

    /// Validate the configuration and exit
    #[arg(long)]
    check: bool,
}

impl Cli {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(seed) = &self.seed {
            config.storage.seed_file = Some(seed.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let mut config = AppConfig::load(&config_path)?;
    cli.apply(&mut config);
    config.validate()?;

    if cli.check {
        println!("Configuration OK ({})", config_path.display());
        return Ok(());
    }

    init_tracing(&config);
    info!("Configuration loaded from {}", config_path.display());

    let handle = match ServerHandle::start(config).await {
        Ok(handle) => handle,
        Err(e) => {
            error!("Failed to start server: {}", e);
            return Err(e);
        }
    };
    handle.install_signal_handler();
    info!("Server started. Press Ctrl+C to shutdown gracefully.");

    handle.wait().await;
    Ok(())
}
