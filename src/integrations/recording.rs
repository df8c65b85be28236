//! Test gateway that records calls and can be told to fail.

use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::{Platform, PlatformGateway};
use crate::error::GatewayError;

/// A call seen by [`RecordingGateway`].
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    PushRate {
        property_id: String,
        nightly_rate: Decimal,
        update_id: Uuid,
    },
    Reply {
        message_id: String,
        text: String,
    },
    HostAlert {
        subject: String,
        detail: String,
    },
}

#[derive(Debug, Default)]
pub struct RecordingGateway {
    calls: Mutex<Vec<GatewayCall>>,
    failing: bool,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway whose every call fails; failed calls are not recorded.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: GatewayCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl PlatformGateway for RecordingGateway {
    async fn push_rate(
        &self,
        property_id: &str,
        nightly_rate: Decimal,
        update_id: Uuid,
    ) -> Result<Vec<Platform>, GatewayError> {
        if self.failing {
            return Err(GatewayError::RatePushFailed {
                property_id: property_id.to_string(),
                reason: "platform timeout".into(),
            });
        }
        self.record(GatewayCall::PushRate {
            property_id: property_id.to_string(),
            nightly_rate,
            update_id,
        });
        Ok(Platform::ALL.to_vec())
    }

    async fn send_reply(&self, message_id: &str, text: &str) -> Result<(), GatewayError> {
        if self.failing {
            return Err(GatewayError::DeliveryFailed {
                target: format!("guest message {message_id}"),
                reason: "messaging API down".into(),
            });
        }
        self.record(GatewayCall::Reply {
            message_id: message_id.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn notify_host(&self, subject: &str, detail: &str) -> Result<(), GatewayError> {
        if self.failing {
            return Err(GatewayError::DeliveryFailed {
                target: "host".into(),
                reason: "messaging API down".into(),
            });
        }
        self.record(GatewayCall::HostAlert {
            subject: subject.to_string(),
            detail: detail.to_string(),
        });
        Ok(())
    }
}
