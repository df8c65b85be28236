//! PropFlow: short-term-rental dashboard backend.

pub mod api;
pub mod config;
pub mod error;
pub mod escalations;
pub mod integrations;
pub mod messages;
pub mod opportunities;
pub mod pricing;
pub mod properties;
pub mod service;
pub mod stats;
pub mod store;
