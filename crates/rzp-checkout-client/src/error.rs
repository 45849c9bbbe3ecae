//! Client error types.

use rzp_checkout_core::IdError;

/// Errors raised by the hosted checkout widget seam.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WidgetError {
    /// The checkout script could not be loaded.
    #[error("failed to load checkout script: {0}")]
    ScriptLoad(String),

    /// The widget was opened but the payment attempt failed or was closed
    /// before completion.
    #[error("checkout widget failed: {0}")]
    Failed(String),
}

/// Errors that can occur when driving the checkout flow.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// Error message from the response body.
        message: String,
        /// HTTP status code.
        status: u16,
    },

    /// The checkout widget failed to load or to complete.
    #[error(transparent)]
    Widget(#[from] WidgetError),

    /// The widget callback carried an invalid identifier.
    #[error("invalid widget callback: {0}")]
    InvalidCallback(#[from] IdError),

    /// Another payment attempt is already in flight.
    #[error("a checkout attempt is already in progress")]
    Busy,

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}
