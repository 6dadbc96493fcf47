//! Application configuration
//!
//! Loaded from a TOML file (default `~/.config/macshare/config.toml`).
//! Every field has a default, so a partial file or no file at all works.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub logging: LoggingConfig,
    pub seed: SeedConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address for the REST API
    pub api_host: String,
    /// Port for the REST API
    pub api_port: u16,
    /// Seconds to wait for in-flight work during shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_host: "0.0.0.0".to_string(),
            api_port: 8080,
            shutdown_timeout: 30,
        }
    }
}

/// Database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// SeaORM connection URL
    pub url: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: "sqlite://./macshare.db?mode=rwc".to_string(),
        }
    }
}

impl DatabaseSettings {
    /// Connection URL, with `DATABASE_URL` taking precedence over the file.
    pub fn connection_url(&self) -> String {
        std::env::var("DATABASE_URL").unwrap_or_else(|_| self.url.clone())
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter, overridable via `RUST_LOG`
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// First-boot seeding settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Member names inserted when the users table is empty
    pub members: Vec<String>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            members: (1..=7).map(|i| format!("Member {}", i)).collect(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

/// Default config file location: `~/.config/macshare/config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("macshare")
        .join("config.toml")
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_seed_seven_members() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.seed.members.len(), 7);
        assert_eq!(cfg.seed.members[0], "Member 1");
        assert_eq!(cfg.server.api_port, 8080);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            api_port = 9090
            "#,
        )
        .unwrap();

        assert_eq!(cfg.server.api_port, 9090);
        assert_eq!(cfg.server.api_host, "0.0.0.0");
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.seed.members.len(), 7);
    }

    #[test]
    fn full_file_overrides_everything() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            api_host = "127.0.0.1"
            api_port = 3000
            shutdown_timeout = 5

            [database]
            url = "sqlite::memory:"

            [logging]
            level = "debug"
            format = "json"

            [seed]
            members = ["Ana", "Bruno"]
            "#,
        )
        .unwrap();

        assert_eq!(cfg.server.api_host, "127.0.0.1");
        assert_eq!(cfg.server.shutdown_timeout, 5);
        assert_eq!(cfg.database.url, "sqlite::memory:");
        assert_eq!(cfg.logging.format, "json");
        assert_eq!(cfg.seed.members, vec!["Ana", "Bruno"]);
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let rendered = toml::to_string(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.server.api_port, AppConfig::default().server.api_port);
        assert_eq!(parsed.seed.members, AppConfig::default().seed.members);
    }
}
