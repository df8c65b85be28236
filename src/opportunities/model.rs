//! Opportunity data model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A detected chance to earn more, with an estimate and a confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    /// Stable id; its prefix selects the pricing table on apply.
    pub id: String,
    /// Human-readable description shown on the dashboard.
    pub event: String,
    /// Estimated incremental revenue.
    pub extra_money: Decimal,
    /// Confidence in [0, 1].
    pub confidence: f64,
}

impl Opportunity {
    pub fn new(
        id: impl Into<String>,
        event: impl Into<String>,
        extra_money: Decimal,
        confidence: f64,
    ) -> Self {
        Self {
            id: id.into(),
            event: event.into(),
            extra_money,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}
