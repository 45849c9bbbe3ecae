//! Application state.

use crate::config::ServiceConfig;

/// Application state shared across handlers.
///
/// The service is stateless across requests; the state only carries the
/// startup configuration. Each verification request computes its own HMAC
/// from request-local data, so concurrent requests never interact.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        if config.razorpay_key_secret.is_none() {
            tracing::warn!(
                "Razorpay key secret not configured - payment verification will be rejected"
            );
        }
        if config.razorpay_key_id.is_none() {
            tracing::warn!(
                "Razorpay key id not configured - checkout config endpoint will be unavailable"
            );
        }

        Self { config }
    }
}
