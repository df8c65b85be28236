//! Opportunity detector.
//!
//! Sources are tried in a fixed order and the first one that produces
//! anything wins:
//! - event calendar (weekend events) → Friday, Saturday, Sunday
//! - competitor pricing → any property under the revenue threshold
//! - demand forecast → Friday only
//!
//! No ranking across sources. Each source is a pure function of the
//! property list and the clock.

use chrono::{Datelike, NaiveDateTime, Weekday};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use super::model::Opportunity;
use crate::config::EngineSettings;
use crate::properties::Property;

/// Where an opportunity comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpportunitySource {
    Event,
    Competitor,
    Demand,
}

impl OpportunitySource {
    /// Priority order used by [`OpportunityDetector::best`].
    pub const PRIORITY: [OpportunitySource; 3] = [Self::Event, Self::Competitor, Self::Demand];

    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Competitor => "competitor",
            Self::Demand => "demand",
        }
    }
}

/// Weekend events drive demand from Friday through Sunday.
pub fn event_opportunities(now: NaiveDateTime) -> Vec<Opportunity> {
    match now.weekday() {
        Weekday::Fri | Weekday::Sat | Weekday::Sun => vec![Opportunity::new(
            "event_f1_2024",
            "🏎️ Formula 1 Race This Weekend!",
            dec!(2847.0),
            0.94,
        )],
        _ => Vec::new(),
    }
}

/// One opportunity per property whose weekly revenue is under `threshold`,
/// in property order.
pub fn competitor_opportunities(properties: &[Property], threshold: Decimal) -> Vec<Opportunity> {
    properties
        .iter()
        .filter(|p| p.weekly_revenue < threshold)
        .map(|p| {
            Opportunity::new(
                format!("competitor_{}", p.id),
                format!("💰 {} Priced Below Market", p.name),
                dec!(450.0),
                0.87,
            )
        })
        .collect()
}

/// Weekend demand spike, predicted on Fridays.
pub fn demand_opportunities(now: NaiveDateTime) -> Vec<Opportunity> {
    if now.weekday() == Weekday::Fri {
        vec![Opportunity::new(
            "weekend_demand",
            "📈 Weekend Demand Spike Predicted",
            dec!(320.0),
            0.82,
        )]
    } else {
        Vec::new()
    }
}

/// Picks the single best revenue opportunity for a portfolio.
#[derive(Debug, Clone)]
pub struct OpportunityDetector {
    competitor_revenue_threshold: Decimal,
}

impl OpportunityDetector {
    pub fn new(settings: &EngineSettings) -> Self {
        Self {
            competitor_revenue_threshold: settings.competitor_revenue_threshold,
        }
    }

    /// Run a single source.
    pub fn detect(
        &self,
        source: OpportunitySource,
        properties: &[Property],
        now: NaiveDateTime,
    ) -> Vec<Opportunity> {
        match source {
            OpportunitySource::Event => event_opportunities(now),
            OpportunitySource::Competitor => {
                competitor_opportunities(properties, self.competitor_revenue_threshold)
            }
            OpportunitySource::Demand => demand_opportunities(now),
        }
    }

    /// First opportunity of the first source that yields any.
    pub fn best(&self, properties: &[Property], now: NaiveDateTime) -> Option<Opportunity> {
        for source in OpportunitySource::PRIORITY {
            if let Some(opp) = self.detect(source, properties, now).into_iter().next() {
                debug!(source = source.label(), opportunity_id = %opp.id, "Opportunity detected");
                return Some(opp);
            }
        }
        None
    }

    /// Every opportunity touching one property, across all sources.
    ///
    /// Event and demand opportunities are market-wide and apply to every
    /// property; competitor ones only to the under-priced property itself.
    pub fn for_property(&self, property: &Property, now: NaiveDateTime) -> Vec<Opportunity> {
        OpportunitySource::PRIORITY
            .iter()
            .flat_map(|source| self.detect(*source, std::slice::from_ref(property), now))
            .collect()
    }
}

impl Default for OpportunityDetector {
    fn default() -> Self {
        Self::new(&EngineSettings::default())
    }
}
