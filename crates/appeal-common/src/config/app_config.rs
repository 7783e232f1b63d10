//! Application configuration structs
//!
//! Loads configuration from environment variables (with optional .env file).

use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub bot: BotConfig,
    pub providers: ProviderConfig,
    pub database: DatabaseConfig,
    pub limits: LimitConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Chat-platform session configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Authentication token for the chat platform
    pub token: String,
    /// Platform role name resolved to the moderator capability set
    #[serde(default = "default_moderator_role")]
    pub moderator_role: String,
}

/// Identity-provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// API key for the primary (profile) provider
    pub steam_api_key: String,
    /// Bearer credential for the secondary (linked-profile) provider
    pub faceit_api_key: String,
    /// Per-request timeout for provider calls, seconds
    #[serde(default = "default_provider_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProviderConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Request-limit and sweep policy
#[derive(Debug, Clone, Deserialize)]
pub struct LimitConfig {
    /// Maximum accepted submissions per account id between sweeps
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
    /// Counters of rows idle longer than this many days are reset
    #[serde(default = "default_sweep_window_days")]
    pub sweep_window_days: i64,
    /// Sweep cadence, hours from process start
    #[serde(default = "default_sweep_interval_hours")]
    pub sweep_interval_hours: u64,
    /// Delay before tearing down a channel after a limit notice, seconds
    #[serde(default = "default_teardown_delay_secs")]
    pub teardown_delay_secs: u64,
}

impl LimitConfig {
    #[must_use]
    pub fn sweep_window(&self) -> chrono::Duration {
        chrono::Duration::days(self.sweep_window_days)
    }

    #[must_use]
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_hours * 3600)
    }

    #[must_use]
    pub fn teardown_delay(&self) -> Duration {
        Duration::from_secs(self.teardown_delay_secs)
    }
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            sweep_window_days: default_sweep_window_days(),
            sweep_interval_hours: default_sweep_interval_hours(),
            teardown_delay_secs: default_teardown_delay_secs(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "appeal-bot".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_moderator_role() -> String {
    "admin".to_string()
}

fn default_provider_timeout_secs() -> u64 {
    10
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_max_requests() -> u32 {
    3
}

fn default_sweep_window_days() -> i64 {
    7
}

fn default_sweep_interval_hours() -> u64 {
    24
}

fn default_teardown_delay_secs() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            bot: BotConfig {
                token: env::var("BOT_TOKEN").map_err(|_| ConfigError::MissingVar("BOT_TOKEN"))?,
                moderator_role: env::var("MODERATOR_ROLE")
                    .unwrap_or_else(|_| default_moderator_role()),
            },
            providers: ProviderConfig {
                steam_api_key: env::var("STEAM_API_KEY")
                    .map_err(|_| ConfigError::MissingVar("STEAM_API_KEY"))?,
                faceit_api_key: env::var("FACEIT_API_KEY")
                    .map_err(|_| ConfigError::MissingVar("FACEIT_API_KEY"))?,
                timeout_secs: env::var("PROVIDER_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_provider_timeout_secs),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_connections),
            },
            limits: LimitConfig {
                max_requests: env::var("MAX_REQUESTS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_requests),
                sweep_window_days: env::var("SWEEP_WINDOW_DAYS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_sweep_window_days),
                sweep_interval_hours: env::var("SWEEP_INTERVAL_HOURS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_sweep_interval_hours),
                teardown_delay_secs: env::var("TEARDOWN_DELAY_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_teardown_delay_secs),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_is_production() {
        assert!(!Environment::Development.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_environment_is_development() {
        assert!(Environment::Development.is_development());
        assert!(!Environment::Staging.is_development());
        assert!(!Environment::Production.is_development());
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_app_name(), "appeal-bot");
        assert_eq!(default_moderator_role(), "admin");
        assert_eq!(default_max_requests(), 3);
        assert_eq!(default_sweep_window_days(), 7);
        assert_eq!(default_sweep_interval_hours(), 24);
        assert_eq!(default_teardown_delay_secs(), 30);
    }

    #[test]
    fn test_limit_config_durations() {
        let limits = LimitConfig::default();
        assert_eq!(limits.sweep_window(), chrono::Duration::days(7));
        assert_eq!(limits.sweep_interval(), Duration::from_secs(86_400));
        assert_eq!(limits.teardown_delay(), Duration::from_secs(30));
    }
}
