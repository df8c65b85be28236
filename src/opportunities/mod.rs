//! Revenue opportunity detection.

pub mod detector;
pub mod model;

pub use detector::{OpportunityDetector, OpportunitySource};
pub use model::Opportunity;
