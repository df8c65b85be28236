//! Configuration types.
//!
//! Everything is read from the environment with working defaults, so the
//! service starts with zero setup.

use std::net::SocketAddr;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::ConfigError;

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub bind_address: String,
    /// Port to listen on.
    pub port: u16,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// - `PROPFLOW_BIND` (default `0.0.0.0`)
    /// - `PROPFLOW_PORT` (default `8000`)
    /// - `PROPFLOW_CORS_ORIGINS`: comma-separated; unset or `*` allows any origin
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let bind_address = std::env::var("PROPFLOW_BIND").unwrap_or(defaults.bind_address);
        let port = parse_env("PROPFLOW_PORT", defaults.port)?;

        let cors_origins: Vec<String> = std::env::var("PROPFLOW_CORS_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty() && s != "*")
            .collect();

        Ok(Self {
            bind_address,
            port,
            cors_origins,
        })
    }

    /// Socket address the server listens on.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                key: "PROPFLOW_BIND".into(),
                message: e.to_string(),
            })
    }
}

/// Automation defaults handed to the engines at construction time.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    /// Apply price changes without asking the host.
    pub auto_apply_small_price_changes: bool,
    /// Send canned replies for wifi/check-in/amenities questions.
    pub auto_respond_to_common_questions: bool,
    /// Price changes at or above this amount notify the host.
    pub notification_threshold: Decimal,
    /// Weekly revenue below this is considered priced under market.
    pub competitor_revenue_threshold: Decimal,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            auto_apply_small_price_changes: true,
            auto_respond_to_common_questions: true,
            notification_threshold: dec!(50),
            competitor_revenue_threshold: dec!(2500),
        }
    }
}

impl EngineSettings {
    /// Build settings from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            auto_apply_small_price_changes: parse_env(
                "PROPFLOW_AUTO_APPLY_PRICING",
                defaults.auto_apply_small_price_changes,
            )?,
            auto_respond_to_common_questions: parse_env(
                "PROPFLOW_AUTO_RESPOND",
                defaults.auto_respond_to_common_questions,
            )?,
            notification_threshold: parse_env(
                "PROPFLOW_NOTIFICATION_THRESHOLD",
                defaults.notification_threshold,
            )?,
            competitor_revenue_threshold: parse_env(
                "PROPFLOW_COMPETITOR_THRESHOLD",
                defaults.competitor_revenue_threshold,
            )?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => {
            raw.trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("{raw:?}: {e}"),
                })
        }
        _ => Ok(default),
    }
}
