//! `PropertyRepository` trait: the single read interface the service needs.
//!
//! The engines never see where properties come from; an in-memory store,
//! a file, or a remote PMS can sit behind this trait.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::properties::{Property, PropertyInfo};

/// Backend-agnostic source of properties and guest-facing details.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// All properties managed by a host, in display order.
    async fn properties_for_host(&self, host_id: &str) -> Result<Vec<Property>, StoreError>;

    /// Look up a single property by ID, across all hosts.
    async fn find_property(&self, property_id: &str) -> Result<Option<Property>, StoreError>;

    /// Guest-facing details (wifi, check-in, amenities) for a property.
    async fn property_info(&self, property_id: &str) -> Result<Option<PropertyInfo>, StoreError>;

    /// Details for a property, or the generic placeholders when unknown.
    async fn property_info_or_generic(&self, property_id: &str) -> Result<PropertyInfo, StoreError> {
        Ok(self
            .property_info(property_id)
            .await?
            .unwrap_or_else(PropertyInfo::generic))
    }
}
