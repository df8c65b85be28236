//! Canned replies for auto-respondable guest messages.

use super::model::MessageCategory;
use crate::properties::PropertyInfo;

/// Reply used when a category has no template of its own.
pub const FALLBACK_REPLY: &str = "Thanks for your message! I'll get back to you shortly. 😊";

/// Render the reply for `category` using the property's details.
pub fn render_reply(category: MessageCategory, info: &PropertyInfo) -> String {
    match category {
        MessageCategory::WifiQuestion => format!(
            "Hi! The WiFi password is: {}. Network name: {}. Enjoy your stay! 😊",
            info.wifi_password, info.wifi_network
        ),
        MessageCategory::CheckinQuestion => format!(
            "Welcome! Check-in is at {}. The lockbox code is: {}. Key is inside the black lockbox by the door. Let me know if you need anything! 🗝️",
            info.checkin_time, info.lockbox_code
        ),
        MessageCategory::AmenitiesQuestion => format!(
            "You have access to: {}. Everything you need should be there. Have a wonderful stay! 🏠",
            info.amenities.join(", ")
        ),
        MessageCategory::Complaint | MessageCategory::Emergency | MessageCategory::Unclear => {
            FALLBACK_REPLY.to_string()
        }
    }
}
