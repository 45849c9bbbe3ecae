//! Wire types for the checkout flow.

use serde::{Deserialize, Serialize};

use rzp_checkout_core::{IdError, OrderId, PaymentConfirmation, PaymentId};

/// Request body for order creation.
#[derive(Debug, Serialize)]
pub(crate) struct CreateOrderRequest<'a> {
    /// Shipping address collected from the user.
    #[serde(rename = "shippingAddress")]
    pub shipping_address: &'a str,
}

/// A gateway order created by the order backend.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderCreated {
    /// The gateway order id to open the widget with.
    #[serde(rename = "razorpayOrderId")]
    pub order_id: OrderId,
    /// Order amount in major currency units (rupees).
    pub amount: u64,
}

/// Verification request body, using the gateway's callback field names.
#[derive(Debug, Serialize)]
pub(crate) struct VerifyPaymentRequest<'a> {
    pub razorpay_order_id: &'a str,
    pub razorpay_payment_id: &'a str,
    pub razorpay_signature: &'a str,
}

/// Error body returned by the verification endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct VerifyErrorResponse {
    pub error: String,
}

/// Success body returned by the verification endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct VerifySuccessResponse {
    pub message: String,
}

/// Result of submitting a confirmation to the verification endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The server recomputed the digest and it matched.
    Verified {
        /// Confirmation message from the server.
        message: String,
    },
    /// The server rejected the signature.
    Rejected {
        /// Rejection reason from the server.
        reason: String,
    },
}

/// Options passed to the hosted checkout widget.
///
/// Mirrors the options object the Razorpay script accepts: the publishable
/// key, the order to pay, and the amount in minor units (paise).
#[derive(Debug, Clone)]
pub struct CheckoutOptions {
    /// Publishable key id.
    pub key_id: String,
    /// The order being paid.
    pub order_id: OrderId,
    /// Amount in minor currency units (the backend's amount times 100).
    pub amount_minor: u64,
    /// ISO currency code.
    pub currency: String,
    /// Merchant display name.
    pub name: String,
    /// Payment description shown in the widget.
    pub description: String,
}

/// The completion callback payload supplied by the checkout widget.
#[derive(Debug, Clone, Deserialize)]
pub struct WidgetCallback {
    /// Order id echoed back by the gateway.
    pub razorpay_order_id: String,
    /// Payment id assigned by the gateway.
    pub razorpay_payment_id: String,
    /// Hex-encoded signature binding the two ids.
    pub razorpay_signature: String,
}

impl WidgetCallback {
    /// Convert the raw callback into a typed confirmation record.
    ///
    /// # Errors
    ///
    /// Returns an error if the gateway supplied an empty order or payment id.
    pub fn into_confirmation(self) -> Result<PaymentConfirmation, IdError> {
        let order_id = OrderId::new(self.razorpay_order_id)?;
        let payment_id = PaymentId::new(self.razorpay_payment_id)?;
        Ok(PaymentConfirmation::new(
            order_id,
            payment_id,
            self.razorpay_signature,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_created_parses_backend_field_names() {
        let order: OrderCreated =
            serde_json::from_str(r#"{"razorpayOrderId": "order_abc", "amount": 499}"#).unwrap();
        assert_eq!(order.order_id.as_str(), "order_abc");
        assert_eq!(order.amount, 499);
    }

    #[test]
    fn callback_with_empty_payment_id_does_not_convert() {
        let callback = WidgetCallback {
            razorpay_order_id: "order_abc".into(),
            razorpay_payment_id: String::new(),
            razorpay_signature: "deadbeef".into(),
        };
        assert!(callback.into_confirmation().is_err());
    }
}
