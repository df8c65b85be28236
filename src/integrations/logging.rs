//! Gateway that only logs. Used until real platform clients exist.

use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use super::{Platform, PlatformGateway};
use crate::error::GatewayError;

/// Logs every call and reports success on all platforms. Keeps no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingGateway;

impl LoggingGateway {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PlatformGateway for LoggingGateway {
    async fn push_rate(
        &self,
        property_id: &str,
        nightly_rate: Decimal,
        update_id: Uuid,
    ) -> Result<Vec<Platform>, GatewayError> {
        info!(
            property_id = %property_id,
            nightly_rate = %nightly_rate,
            update_id = %update_id,
            "Nightly rate pushed to all platforms"
        );
        Ok(Platform::ALL.to_vec())
    }

    async fn send_reply(&self, message_id: &str, text: &str) -> Result<(), GatewayError> {
        info!(
            message_id = %message_id,
            reply = %text.chars().take(50).collect::<String>(),
            "Auto-reply sent to guest"
        );
        Ok(())
    }

    async fn notify_host(&self, subject: &str, detail: &str) -> Result<(), GatewayError> {
        warn!(subject = %subject, detail = %detail, "Host alerted");
        Ok(())
    }
}
