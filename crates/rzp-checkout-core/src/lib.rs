//! Core types and signature verification for rzp-checkout.
//!
//! This crate provides the foundational pieces shared by the checkout
//! service and client:
//!
//! - **Identifiers**: `OrderId`, `PaymentId`
//! - **Confirmation**: `PaymentConfirmation`, the transient record returned
//!   by the gateway after a payment attempt
//! - **Signature**: HMAC-SHA256 computation and constant-time verification
//!
//! # Verification scheme
//!
//! Razorpay signs each completed payment with
//! `HMAC-SHA256(key_secret, "{order_id}|{payment_id}")`, hex-encoded. The
//! server recomputes the digest from the ids in the callback payload and
//! compares it against the signature the client forwarded. The signature is
//! untrusted input; only the recomputed digest is authoritative.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod confirmation;
pub mod ids;
pub mod signature;

pub use confirmation::PaymentConfirmation;
pub use ids::{IdError, OrderId, PaymentId};
pub use signature::{constant_time_eq, hmac_sha256_hex, signature_payload, verify};
