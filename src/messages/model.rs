//! Message classification types.

use serde::{Deserialize, Serialize};

/// What a guest message is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageCategory {
    WifiQuestion,
    CheckinQuestion,
    AmenitiesQuestion,
    Complaint,
    Emergency,
    Unclear,
}

impl std::fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WifiQuestion => write!(f, "wifi_question"),
            Self::CheckinQuestion => write!(f, "checkin_question"),
            Self::AmenitiesQuestion => write!(f, "amenities_question"),
            Self::Complaint => write!(f, "complaint"),
            Self::Emergency => write!(f, "emergency"),
            Self::Unclear => write!(f, "unclear"),
        }
    }
}

/// How urgently an escalated message needs the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Either answer automatically or hand the message to a human.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "disposition", rename_all = "snake_case")]
pub enum Disposition {
    /// Safe to answer with a canned reply.
    AutoRespond { confidence: f64 },
    /// Route to the host.
    Escalate {
        reason: String,
        priority: Priority,
        #[serde(skip_serializing_if = "Option::is_none")]
        suggested_response: Option<String>,
    },
}

/// Result of classifying one guest message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageClassification {
    pub category: MessageCategory,
    #[serde(flatten)]
    pub disposition: Disposition,
}

impl MessageClassification {
    pub fn auto(category: MessageCategory, confidence: f64) -> Self {
        Self {
            category,
            disposition: Disposition::AutoRespond { confidence },
        }
    }

    pub fn escalate(category: MessageCategory, reason: impl Into<String>, priority: Priority) -> Self {
        Self {
            category,
            disposition: Disposition::Escalate {
                reason: reason.into(),
                priority,
                suggested_response: None,
            },
        }
    }

    /// Builder: attach a suggested reply to an escalation. No-op for auto replies.
    pub fn with_suggested_response(mut self, text: impl Into<String>) -> Self {
        if let Disposition::Escalate {
            suggested_response, ..
        } = &mut self.disposition
        {
            *suggested_response = Some(text.into());
        }
        self
    }

    pub fn is_auto_respondable(&self) -> bool {
        matches!(self.disposition, Disposition::AutoRespond { .. })
    }

    pub fn confidence(&self) -> Option<f64> {
        match self.disposition {
            Disposition::AutoRespond { confidence } => Some(confidence),
            Disposition::Escalate { .. } => None,
        }
    }

    pub fn priority(&self) -> Option<Priority> {
        match self.disposition {
            Disposition::Escalate { priority, .. } => Some(priority),
            Disposition::AutoRespond { .. } => None,
        }
    }
}
