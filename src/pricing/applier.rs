//! Pricing applier.
//!
//! Rates come from a fixed table keyed by a substring of the opportunity id,
//! checked in order (`event_f1`, `competitor`, `demand`, then a default).
//! This stands in for a real pricing model.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::info;
use uuid::Uuid;

use super::model::{PriceChange, PricingOutcome, RateQuote};
use crate::config::EngineSettings;
use crate::error::GatewayError;
use crate::integrations::PlatformGateway;

const RATE_TABLE: [(&str, RateQuote); 3] = [
    (
        "event_f1",
        RateQuote {
            old_price: dec!(180.0),
            new_price: dec!(400.0),
        },
    ),
    (
        "competitor",
        RateQuote {
            old_price: dec!(185.0),
            new_price: dec!(220.0),
        },
    ),
    (
        "demand",
        RateQuote {
            old_price: dec!(190.0),
            new_price: dec!(210.0),
        },
    ),
];

const DEFAULT_RATE: RateQuote = RateQuote {
    old_price: dec!(175.0),
    new_price: dec!(200.0),
};

/// Look up the rate change for an opportunity.
pub fn rate_for(opportunity_id: &str) -> RateQuote {
    RATE_TABLE
        .iter()
        .find(|(key, _)| opportunity_id.contains(key))
        .map(|(_, quote)| *quote)
        .unwrap_or(DEFAULT_RATE)
}

/// Applies an opportunity's rate change to a set of properties.
#[derive(Debug, Clone)]
pub struct PricingApplier {
    notification_threshold: Decimal,
    auto_apply: bool,
}

impl PricingApplier {
    pub fn new(settings: &EngineSettings) -> Self {
        Self {
            notification_threshold: settings.notification_threshold,
            auto_apply: settings.auto_apply_small_price_changes,
        }
    }

    /// Pure preview: the quote for each property id, in input order.
    pub fn quote(&self, opportunity_id: &str, property_ids: &[String]) -> Vec<(String, RateQuote)> {
        let quote = rate_for(opportunity_id);
        property_ids.iter().map(|id| (id.clone(), quote)).collect()
    }

    /// Push each new rate through the gateway and summarize.
    pub async fn apply(
        &self,
        opportunity_id: &str,
        property_ids: &[String],
        gateway: &dyn PlatformGateway,
        now: NaiveDateTime,
    ) -> Result<PricingOutcome, GatewayError> {
        let mut results = Vec::with_capacity(property_ids.len());

        for (property_id, quote) in self.quote(opportunity_id, property_ids) {
            let update_id = Uuid::new_v4();
            let platforms_updated = gateway
                .push_rate(&property_id, quote.new_price, update_id)
                .await?;

            let extra_revenue = quote.extra_revenue();
            let host_notified = extra_revenue >= self.notification_threshold;
            if host_notified {
                gateway
                    .notify_host(
                        "Price change applied",
                        &format!(
                            "Property {property_id}: {} -> {} per night",
                            quote.old_price, quote.new_price
                        ),
                    )
                    .await?;
            }

            results.push(PriceChange {
                property_id,
                old_price: quote.old_price,
                new_price: quote.new_price,
                extra_revenue,
                platforms_updated,
                host_notified,
                update_id,
                updated_at: now,
            });
        }

        let outcome = PricingOutcome::from_changes(results, self.auto_apply);
        info!(
            opportunity_id = %opportunity_id,
            properties_updated = outcome.properties_updated,
            extra_revenue = %outcome.estimated_extra_revenue,
            "Pricing applied"
        );
        Ok(outcome)
    }
}

impl Default for PricingApplier {
    fn default() -> Self {
        Self::new(&EngineSettings::default())
    }
}
