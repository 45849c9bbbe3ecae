//! The payment confirmation record.

use serde::{Deserialize, Serialize};

use crate::ids::{OrderId, PaymentId};

/// A payment confirmation as returned by the gateway's completion callback.
///
/// This record is transient: it exists only for the duration of one
/// verification request and is never persisted. The `signature` field is an
/// untrusted value supplied by the client; it must never be trusted without
/// recomputing the digest from `order_id` and `payment_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    /// The order id the payment was made against.
    pub order_id: OrderId,
    /// The payment id assigned by the gateway.
    pub payment_id: PaymentId,
    /// Hex-encoded HMAC-SHA256 digest claimed by the gateway.
    pub signature: String,
}

impl PaymentConfirmation {
    /// Create a confirmation record from the gateway callback fields.
    #[must_use]
    pub fn new(order_id: OrderId, payment_id: PaymentId, signature: impl Into<String>) -> Self {
        Self {
            order_id,
            payment_id,
            signature: signature.into(),
        }
    }
}
