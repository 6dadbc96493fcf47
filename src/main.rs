//!
//! REST service for booking time on the shared workstation.
//! Reads configuration from TOML file (~/.config/macshare/config.toml).

use tracing::{error, info};

use macshare::config::AppConfig;
use macshare::default_config_path;
use macshare::server::{init_tracing, ServerHandle, ServerOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("MACSHARE_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            let cfg = AppConfig::default();
            init_tracing(&cfg);
            error!("Failed to load config: {}. Using defaults.", e);
            cfg
        }
    };

    let handle = ServerHandle::start(ServerOptions {
        config: app_cfg,
        ..Default::default()
    })
    .await?;

    // Listen for SIGTERM/SIGINT and block until the server has drained.
    handle.install_signal_handler();
    handle.wait().await;

    Ok(())
}
