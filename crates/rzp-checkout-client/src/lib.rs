//! Rzp-Checkout Client SDK.
//!
//! This crate implements the checkout-initiator side of the flow: it asks
//! the order backend to create a gateway order, opens the hosted checkout
//! widget, and forwards the widget's completion callback to the
//! verification endpoint.
//!
//! The hosted widget itself lives in a browser; it is modeled here as the
//! [`CheckoutWidget`] trait so the orchestration is testable without one.
//! The widget's completion callback is a single async continuation invoked
//! at most once per payment attempt.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use rzp_checkout_client::{CheckoutApi, CheckoutFlow, CheckoutWidget};
//!
//! # async fn example(widget: Arc<dyn CheckoutWidget>) -> Result<(), rzp_checkout_client::ClientError> {
//! let api = CheckoutApi::new("http://localhost:8080", "user-bearer-token")?;
//! let flow = CheckoutFlow::new(api, widget, "rzp_test_abc123");
//!
//! match flow.pay("221B Baker Street").await? {
//!     rzp_checkout_client::CheckoutOutcome::Verified { payment_id, .. } => {
//!         println!("Payment {payment_id} verified");
//!     }
//!     rzp_checkout_client::CheckoutOutcome::Rejected { reason } => {
//!         println!("Payment rejected: {reason}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;
mod flow;
mod types;
mod widget;

pub use client::{CheckoutApi, ClientOptions};
pub use error::{ClientError, WidgetError};
pub use flow::{CheckoutFlow, CheckoutOutcome};
pub use types::{CheckoutOptions, OrderCreated, VerifyOutcome, WidgetCallback};
pub use widget::CheckoutWidget;
