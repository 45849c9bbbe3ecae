//! Publishable checkout configuration handler.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Publishable checkout configuration.
///
/// Carries only the key id, which Razorpay designates as safe to embed in
/// checkout pages. The key secret never appears in any response.
#[derive(Debug, Serialize)]
pub struct CheckoutConfigResponse {
    /// Razorpay publishable key id for widget initialization.
    pub key_id: String,
}

/// Return the publishable configuration a checkout page needs to open the
/// hosted widget.
pub async fn checkout_config(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CheckoutConfigResponse>, ApiError> {
    let key_id = state
        .config
        .razorpay_key_id
        .clone()
        .ok_or_else(|| ApiError::Internal("Razorpay key id not configured".into()))?;

    Ok(Json(CheckoutConfigResponse { key_id }))
}
