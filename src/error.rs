//! Error types for PropFlow.

/// Top-level error type for the service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Platform error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Property repository errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Repository unavailable: {0}")]
    Unavailable(String),
}

/// Booking-platform and guest-messaging errors.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Rate push for property {property_id} failed: {reason}")]
    RatePushFailed { property_id: String, reason: String },

    #[error("Delivery to {target} failed: {reason}")]
    DeliveryFailed { target: String, reason: String },
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;
