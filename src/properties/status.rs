//! Status resolution: unhandled messages beat cleaning, cleaning beats good.

use super::model::{Property, PropertyStatus};

/// Derive a property's display status from its fields.
pub fn resolve_status(property: &Property) -> PropertyStatus {
    if property.unhandled_messages > 0 {
        PropertyStatus::NeedsAttention
    } else if !property.is_clean {
        PropertyStatus::Cleaning
    } else {
        PropertyStatus::Good
    }
}

/// Dashboard-wide status: good unless some property needs the host.
pub fn overall_status(properties: &[Property]) -> PropertyStatus {
    if properties
        .iter()
        .any(|p| p.status == PropertyStatus::NeedsAttention)
    {
        PropertyStatus::NeedsAttention
    } else {
        PropertyStatus::Good
    }
}
