//! Property data model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display label for a property's current operational state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyStatus {
    /// Nothing needs doing.
    Good,
    /// A guest message is waiting on the host.
    NeedsAttention,
    /// Turnover cleaning in progress.
    Cleaning,
}

impl std::fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => write!(f, "good"),
            Self::NeedsAttention => write!(f, "needs-attention"),
            Self::Cleaning => write!(f, "cleaning"),
        }
    }
}

impl std::str::FromStr for PropertyStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "good" => Ok(Self::Good),
            "needs-attention" => Ok(Self::NeedsAttention),
            "cleaning" => Ok(Self::Cleaning),
            _ => Err(format!("Unknown property status: {}", s)),
        }
    }
}

/// A managed short-term rental as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub name: String,
    /// Revenue booked for the current week.
    pub weekly_revenue: Decimal,
    /// Derived by [`resolve_status`](super::resolve_status); whatever the
    /// source says is overwritten before the property leaves the service.
    pub status: PropertyStatus,
    #[serde(default)]
    pub cleaner_name: Option<String>,
    #[serde(default)]
    pub cleaning_time: Option<String>,
    #[serde(default)]
    pub next_guest: Option<String>,
    #[serde(default)]
    pub guest_arrival_time: Option<String>,
    /// Guest messages waiting on the host. The service adds the open
    /// escalations for this property before deriving `status`.
    #[serde(default)]
    pub unhandled_messages: u32,
    #[serde(default = "default_is_clean")]
    pub is_clean: bool,
}

fn default_is_clean() -> bool {
    true
}

impl Property {
    /// Create a clean property with no pending messages.
    pub fn new(id: impl Into<String>, name: impl Into<String>, weekly_revenue: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            weekly_revenue,
            status: PropertyStatus::Good,
            cleaner_name: None,
            cleaning_time: None,
            next_guest: None,
            guest_arrival_time: None,
            unhandled_messages: 0,
            is_clean: true,
        }
    }

    /// Builder: assign a cleaner and their slot.
    pub fn with_cleaner(mut self, name: impl Into<String>, time: impl Into<String>) -> Self {
        self.cleaner_name = Some(name.into());
        self.cleaning_time = Some(time.into());
        self
    }

    /// Builder: set the next arriving guest.
    pub fn with_next_guest(mut self, guest: impl Into<String>, arrival: impl Into<String>) -> Self {
        self.next_guest = Some(guest.into());
        self.guest_arrival_time = Some(arrival.into());
        self
    }

    /// Builder: set the unhandled message count.
    pub fn with_unhandled_messages(mut self, count: u32) -> Self {
        self.unhandled_messages = count;
        self
    }

    /// Builder: set the cleanliness flag.
    pub fn with_clean(mut self, is_clean: bool) -> Self {
        self.is_clean = is_clean;
        self
    }
}

/// Property details used to fill guest auto-replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyInfo {
    pub wifi_network: String,
    pub wifi_password: String,
    pub checkin_time: String,
    pub lockbox_code: String,
    pub amenities: Vec<String>,
}

impl PropertyInfo {
    /// Placeholder details for properties the store knows nothing about.
    pub fn generic() -> Self {
        Self {
            wifi_network: "Guest_WiFi".into(),
            wifi_password: "Guest2024!".into(),
            checkin_time: "3:00 PM".into(),
            lockbox_code: "Contact host".into(),
            amenities: vec!["WiFi".into(), "Kitchen".into(), "Basic amenities".into()],
        }
    }
}
