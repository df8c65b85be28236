//! One-click pricing: nightly rate changes driven by an opportunity.

pub mod applier;
pub mod model;

pub use applier::{PricingApplier, rate_for};
pub use model::{PriceChange, PricingOutcome, RateQuote};
