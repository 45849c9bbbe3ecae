//! Payment signature verification handler.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};

use rzp_checkout_core::{signature, OrderId, PaymentConfirmation, PaymentId};

use crate::error::ApiError;
use crate::state::AppState;

/// Verification request payload, using the gateway's callback field names.
///
/// Fields default to the empty string so that a missing field is handled as
/// a normal validation failure rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct VerifyPaymentRequest {
    /// Order id from the gateway callback.
    #[serde(default)]
    pub razorpay_order_id: String,
    /// Payment id from the gateway callback.
    #[serde(default)]
    pub razorpay_payment_id: String,
    /// Hex-encoded signature from the gateway callback.
    #[serde(default)]
    pub razorpay_signature: String,
}

/// Verification success response.
#[derive(Debug, Serialize)]
pub struct VerifyPaymentResponse {
    /// Confirmation message.
    pub message: &'static str,
}

/// Verify a payment confirmation signature.
///
/// Recomputes `HMAC-SHA256(key_secret, "{order_id}|{payment_id}")` and
/// compares it against the supplied signature in constant time. No side
/// effects beyond the response: marking the order paid is the order
/// backend's responsibility.
pub async fn verify_payment(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Json<VerifyPaymentResponse>, ApiError> {
    let secret = state
        .config
        .razorpay_key_secret
        .as_deref()
        .ok_or_else(|| ApiError::Internal("Razorpay key secret not configured".into()))?;

    // Parse the payload
    let request: VerifyPaymentRequest =
        serde_json::from_str(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let confirmation = parse_confirmation(&request)?;

    if signature::verify(secret, &confirmation) {
        tracing::info!(
            order_id = %confirmation.order_id,
            payment_id = %confirmation.payment_id,
            "Payment signature verified"
        );

        Ok(Json(VerifyPaymentResponse {
            message: "Payment verified successfully",
        }))
    } else {
        tracing::warn!(
            order_id = %confirmation.order_id,
            payment_id = %confirmation.payment_id,
            "Payment signature mismatch"
        );

        Err(ApiError::InvalidSignature)
    }
}

/// Explicit 405 for non-POST requests to the verification route.
///
/// The checkout contract specifies a plain-text body here, unlike the JSON
/// error envelope used elsewhere.
pub async fn method_not_allowed(method: Method) -> (StatusCode, String) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        format!("Method {method} Not Allowed"),
    )
}

/// Validate the request fields into a confirmation record.
fn parse_confirmation(request: &VerifyPaymentRequest) -> Result<PaymentConfirmation, ApiError> {
    let order_id = OrderId::new(request.razorpay_order_id.clone())
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let payment_id = PaymentId::new(request.razorpay_payment_id.clone())
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    Ok(PaymentConfirmation::new(
        order_id,
        payment_id,
        request.razorpay_signature.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty_strings() {
        let request: VerifyPaymentRequest = serde_json::from_str("{}").unwrap();
        assert!(request.razorpay_order_id.is_empty());
        assert!(request.razorpay_payment_id.is_empty());
        assert!(request.razorpay_signature.is_empty());
    }

    #[test]
    fn empty_order_id_is_rejected() {
        let request = VerifyPaymentRequest {
            razorpay_order_id: String::new(),
            razorpay_payment_id: "pay_xyz".into(),
            razorpay_signature: "deadbeef".into(),
        };
        assert!(parse_confirmation(&request).is_err());
    }

    #[test]
    fn complete_request_parses() {
        let request = VerifyPaymentRequest {
            razorpay_order_id: "order_abc".into(),
            razorpay_payment_id: "pay_xyz".into(),
            razorpay_signature: "deadbeef".into(),
        };
        let confirmation = parse_confirmation(&request).unwrap();
        assert_eq!(confirmation.order_id.as_str(), "order_abc");
        assert_eq!(confirmation.payment_id.as_str(), "pay_xyz");
        assert_eq!(confirmation.signature, "deadbeef");
    }
}
