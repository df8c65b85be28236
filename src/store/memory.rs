//! In-memory property store, seeded with the demo portfolio.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal_macros::dec;

use super::traits::PropertyRepository;
use crate::error::StoreError;
use crate::properties::{Property, PropertyInfo};

/// Immutable in-memory repository.
///
/// Hosts without a portfolio of their own see the shared default portfolio,
/// so any host id works against the demo data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    portfolios: HashMap<String, Vec<Property>>,
    default_portfolio: Vec<Property>,
    info: HashMap<String, PropertyInfo>,
}

impl InMemoryStore {
    /// Empty store: every host has no properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the two demo properties for every host.
    pub fn demo() -> Self {
        let manhattan = Property::new("1", "Manhattan Loft", dec!(2847.0))
            .with_cleaner("Maria", "3:00 PM")
            .with_next_guest("Jake & Sarah", "3:00 PM")
            .with_clean(false);

        let brooklyn = Property::new("2", "Brooklyn House", dec!(1923.0))
            .with_cleaner("Carlos", "Friday 2:00 PM")
            .with_next_guest("Ready for guests", "")
            .with_unhandled_messages(1);

        Self::new()
            .with_default_portfolio(vec![manhattan, brooklyn])
            .with_info(
                "1",
                PropertyInfo {
                    wifi_network: "Manhattan_Guest".into(),
                    wifi_password: "Manhattan2024!".into(),
                    checkin_time: "3:00 PM".into(),
                    lockbox_code: "1234".into(),
                    amenities: vec![
                        "Full kitchen".into(),
                        "Washer/dryer".into(),
                        "Gym access".into(),
                        "WiFi".into(),
                        "AC".into(),
                    ],
                },
            )
            .with_info(
                "2",
                PropertyInfo {
                    wifi_network: "Brooklyn_Guest".into(),
                    wifi_password: "Brooklyn2024!".into(),
                    checkin_time: "4:00 PM".into(),
                    lockbox_code: "5678".into(),
                    amenities: vec![
                        "Full kitchen".into(),
                        "Garden".into(),
                        "Parking".into(),
                        "BBQ".into(),
                        "WiFi".into(),
                    ],
                },
            )
    }

    /// Builder: portfolio for one host.
    pub fn with_portfolio(mut self, host_id: impl Into<String>, properties: Vec<Property>) -> Self {
        self.portfolios.insert(host_id.into(), properties);
        self
    }

    /// Builder: portfolio for hosts with none of their own.
    pub fn with_default_portfolio(mut self, properties: Vec<Property>) -> Self {
        self.default_portfolio = properties;
        self
    }

    /// Builder: guest-facing details for a property.
    pub fn with_info(mut self, property_id: impl Into<String>, info: PropertyInfo) -> Self {
        self.info.insert(property_id.into(), info);
        self
    }
}

#[async_trait]
impl PropertyRepository for InMemoryStore {
    async fn properties_for_host(&self, host_id: &str) -> Result<Vec<Property>, StoreError> {
        Ok(self
            .portfolios
            .get(host_id)
            .unwrap_or(&self.default_portfolio)
            .clone())
    }

    async fn find_property(&self, property_id: &str) -> Result<Option<Property>, StoreError> {
        Ok(self
            .portfolios
            .values()
            .flatten()
            .chain(self.default_portfolio.iter())
            .find(|p| p.id == property_id)
            .cloned())
    }

    async fn property_info(&self, property_id: &str) -> Result<Option<PropertyInfo>, StoreError> {
        Ok(self.info.get(property_id).cloned())
    }
}
