//! HTTP surface for the dashboard frontend.

mod error;
mod routes;

pub use error::ApiError;
pub use routes::{ApiState, api_routes};
