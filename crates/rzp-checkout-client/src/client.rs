//! HTTP client for the order backend and the verification endpoint.

use reqwest::{Client, StatusCode};
use std::time::Duration;

use rzp_checkout_core::PaymentConfirmation;

use crate::error::ClientError;
use crate::types::{
    CreateOrderRequest, OrderCreated, VerifyErrorResponse, VerifyOutcome, VerifyPaymentRequest,
    VerifySuccessResponse,
};

/// Checkout API client.
///
/// Talks to the order-creation backend and the signature verification
/// endpoint. Requests carry the caller's bearer token, matching what the
/// backend expects from authenticated shoppers.
#[derive(Debug, Clone)]
pub struct CheckoutApi {
    client: Client,
    base_url: String,
    bearer_token: String,
}

impl CheckoutApi {
    /// Create a new checkout API client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the backend (e.g. `"http://localhost:8080"`)
    /// * `bearer_token` - The shopper's authorization credential
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        bearer_token: impl Into<String>,
    ) -> Result<Self, ClientError> {
        Self::with_options(base_url, bearer_token, ClientOptions::default())
    }

    /// Create a new checkout API client with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_options(
        base_url: impl Into<String>,
        bearer_token: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()
            .map_err(|e| ClientError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer_token: bearer_token.into(),
        })
    }

    /// Create a gateway order for the given shipping address.
    ///
    /// Calls `POST {base}/payment/createRazorpayOrder` on the external order
    /// backend, which creates the order with the gateway and returns its id
    /// and amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend returns an
    /// error status.
    pub async fn create_order(&self, shipping_address: &str) -> Result<OrderCreated, ClientError> {
        let url = format!("{}/payment/createRazorpayOrder", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.bearer_token)
            .json(&CreateOrderRequest { shipping_address })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_from_response(response).await);
        }

        let order: OrderCreated = response.json().await?;
        tracing::debug!(order_id = %order.order_id, amount = %order.amount, "Order created");

        Ok(order)
    }

    /// Submit a payment confirmation to the verification endpoint.
    ///
    /// Calls `POST {base}/payment/verifyPayment`. A `200` maps to
    /// [`VerifyOutcome::Verified`]; a `400` with the contract's error body
    /// maps to [`VerifyOutcome::Rejected`]. Any other status is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an
    /// unexpected status.
    pub async fn verify_payment(
        &self,
        confirmation: &PaymentConfirmation,
    ) -> Result<VerifyOutcome, ClientError> {
        let url = format!("{}/payment/verifyPayment", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.bearer_token)
            .json(&VerifyPaymentRequest {
                razorpay_order_id: confirmation.order_id.as_str(),
                razorpay_payment_id: confirmation.payment_id.as_str(),
                razorpay_signature: &confirmation.signature,
            })
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            let body: VerifySuccessResponse = response.json().await?;
            return Ok(VerifyOutcome::Verified {
                message: body.message,
            });
        }

        // A 400 is the contract's normal rejection path, not a transport
        // failure.
        if status == StatusCode::BAD_REQUEST {
            let body: VerifyErrorResponse = response.json().await?;
            return Ok(VerifyOutcome::Rejected { reason: body.error });
        }

        Err(error_from_response(response).await)
    }
}

/// Convert a non-success response into a typed API error.
async fn error_from_response(response: reqwest::Response) -> ClientError {
    let status = response.status().as_u16();

    let message = match response.json::<VerifyErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {status}"),
    };

    ClientError::Api { message, status }
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
        }
    }
}
