use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;

/// Config file read from the working directory when no override is given.
pub const DEFAULT_CONFIG_FILE: &str = "nba-player-summary.toml";

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "NBA_PLAYER_SUMMARY_CONFIG";

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the stats service, with trailing slash
    pub base_url: String,

    pub user_agent: String,

    /// Request timeout in seconds; 0 waits forever
    pub timeout_secs: u64,

    /// League filter sent with every query ("00" is the NBA)
    pub league_id: String,

    /// Aggregation mode for career stats (e.g., "Totals", "PerGame")
    pub per_mode: String,

    /// Season passed to the roster query (e.g., "2024-25").
    /// Derived from today's date when unset.
    #[serde(default)]
    pub roster_season: Option<String>,

    /// Local JSON roster used instead of the remote roster query
    #[serde(default)]
    pub roster_file: Option<PathBuf>,
}

impl ProviderConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl AppConfig {
    /// Load configuration from the default file location and environment
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from(path)
    }

    /// Load configuration from a specific file (which may be missing)
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let builder = Config::builder()
            .set_default("provider.base_url", "https://stats.nba.com/stats/")?
            .set_default(
                "provider.user_agent",
                "Mozilla/5.0 (X11; Linux x86_64) nba-player-summary/0.1",
            )?
            .set_default("provider.timeout_secs", 30)?
            .set_default("provider.league_id", "00")?
            .set_default("provider.per_mode", "Totals")?
            .set_default("logging.level", "warn")?
            .set_default("logging.json", false)?
            .add_source(File::from(path.as_ref()).required(false))
            // NBA_SUMMARY_PROVIDER__TIMEOUT_SECS, NBA_SUMMARY_LOGGING__LEVEL, ...
            .add_source(
                Environment::with_prefix("NBA_SUMMARY")
                    .prefix_separator("_")
                    .separator("__"),
            );

        Ok(builder.build()?.try_deserialize()?)
    }
}
