//! Outbound integrations: booking platforms and guest messaging.
//!
//! Everything that would leave the process goes through [`PlatformGateway`].
//! The bundled [`LoggingGateway`] logs each call with `tracing` and
//! succeeds immediately; a real gateway would add per-call timeouts and
//! retries and use the `update_id` to make rate pushes idempotent.

pub mod logging;
#[cfg(test)]
pub(crate) mod recording;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::GatewayError;

pub use logging::LoggingGateway;

/// A booking platform that carries a property's nightly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Airbnb,
    Vrbo,
    Direct,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Self::Airbnb, Self::Vrbo, Self::Direct];
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Airbnb => write!(f, "airbnb"),
            Self::Vrbo => write!(f, "vrbo"),
            Self::Direct => write!(f, "direct"),
        }
    }
}

/// Side effects that leave the process.
#[async_trait]
pub trait PlatformGateway: Send + Sync {
    /// Push a new nightly rate for a property. Returns the platforms updated.
    async fn push_rate(
        &self,
        property_id: &str,
        nightly_rate: Decimal,
        update_id: Uuid,
    ) -> Result<Vec<Platform>, GatewayError>;

    /// Send a reply to a guest message.
    async fn send_reply(&self, message_id: &str, text: &str) -> Result<(), GatewayError>;

    /// Alert the host about something that needs them.
    async fn notify_host(&self, subject: &str, detail: &str) -> Result<(), GatewayError>;
}
