use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub type AppConfig = PixfitConfig;

const ENV_PREFIX: &str = "PIXFIT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PixfitConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub limits: LimitConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitConfig {
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_fetch_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_dimension: default_max_dimension(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_fetch_timeout_secs(),
            max_input_bytes: default_max_input_bytes(),
        }
    }
}

/// Build the configuration from defaults, then apply `PIXFIT_*` environment
/// overrides. A present-but-unparseable override is a startup error rather
/// than a silent fallback.
pub fn load_config() -> Result<PixfitConfig, ConfigError> {
    let mut config = PixfitConfig::default();

    if let Some(host) = env_string("HOST") {
        config.server.host = host;
    }
    if let Some(port) = env_parsed("PORT")? {
        config.server.port = port;
    }
    if let Some(level) = env_string("LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(max_dimension) = env_parsed("MAX_DIMENSION")? {
        config.service.limits.max_dimension = max_dimension;
    }
    if let Some(timeout) = env_parsed("FETCH_TIMEOUT_SECS")? {
        config.service.fetch.request_timeout_secs = timeout;
    }
    if let Some(max_bytes) = env_parsed("MAX_INPUT_BYTES")? {
        config.service.fetch.max_input_bytes = max_bytes;
    }

    Ok(config)
}

/// Initialize the global tracing subscriber once, at process startup.
/// `RUST_LOG` wins over the configured level when set.
pub fn setup_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}_{name}"))
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn env_parsed<T>(name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let var = format!("{ENV_PREFIX}_{name}");
    match env_string(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|err| ConfigError::InvalidValue {
                var,
                reason: err.to_string(),
            }),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_dimension() -> u32 {
    2048
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

fn default_max_input_bytes() -> usize {
    25 * 1024 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_are_deterministic() {
        let cfg = PixfitConfig::default();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.service.limits.max_dimension, 2048);
        assert_eq!(cfg.service.fetch.request_timeout_secs, 10);
        assert_eq!(cfg.service.fetch.max_input_bytes, 25 * 1024 * 1024);
    }

    #[test]
    fn missing_overrides_keep_defaults() {
        std::env::remove_var("PIXFIT_PORT");
        let cfg = load_config().expect("defaults load");
        assert_eq!(cfg.server.port, 8080);
    }
}
