//! Rzp-Checkout HTTP API Service.
//!
//! This crate provides the server side of the checkout flow:
//!
//! - Payment signature verification (`POST /payment/verifyPayment`)
//! - Publishable checkout configuration for widget initialization
//! - Health check
//!
//! # Verification contract
//!
//! The gateway signs each completed payment with
//! `HMAC-SHA256(key_secret, "{order_id}|{payment_id}")`. The verification
//! endpoint recomputes the digest from the callback payload and accepts or
//! rejects the supplied signature. The key secret is held server-side only
//! and injected through [`AppState`]; it is never sent to clients.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers need async for consistency

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
