//! Managed properties: data model and status resolution.

pub mod model;
pub mod status;

pub use model::{Property, PropertyInfo, PropertyStatus};
pub use status::{overall_status, resolve_status};
