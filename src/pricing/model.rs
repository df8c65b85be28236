//! Pricing data model.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::integrations::Platform;

/// Old and new nightly rate for one property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateQuote {
    pub old_price: Decimal,
    pub new_price: Decimal,
}

impl RateQuote {
    pub fn extra_revenue(&self) -> Decimal {
        self.new_price - self.old_price
    }
}

/// A rate change as applied to one property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceChange {
    pub property_id: String,
    pub old_price: Decimal,
    pub new_price: Decimal,
    pub extra_revenue: Decimal,
    pub platforms_updated: Vec<Platform>,
    /// Change was large enough to alert the host.
    pub host_notified: bool,
    /// Idempotency key for the platform push.
    pub update_id: Uuid,
    pub updated_at: NaiveDateTime,
}

/// Summary of a pricing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingOutcome {
    pub success: bool,
    pub properties_updated: usize,
    pub estimated_extra_revenue: Decimal,
    pub auto_applied: bool,
    pub results: Vec<PriceChange>,
}

impl PricingOutcome {
    pub fn from_changes(results: Vec<PriceChange>, auto_applied: bool) -> Self {
        Self {
            success: true,
            properties_updated: results.len(),
            estimated_extra_revenue: results.iter().map(|r| r.extra_revenue).sum(),
            auto_applied,
            results,
        }
    }
}
