//! Checkout flow orchestration.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::client::CheckoutApi;
use crate::error::ClientError;
use crate::types::{CheckoutOptions, VerifyOutcome};
use crate::widget::CheckoutWidget;

use rzp_checkout_core::{OrderId, PaymentId};

/// Default merchant display name shown in the widget.
const DEFAULT_STORE_NAME: &str = "My Store";

/// Default payment description shown in the widget.
const DEFAULT_DESCRIPTION: &str = "Secure Payment";

/// Currency the order backend prices in.
const CURRENCY: &str = "INR";

/// Final result of one checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The payment completed and the server verified its signature.
    Verified {
        /// The order that was paid.
        order_id: OrderId,
        /// The gateway payment id.
        payment_id: PaymentId,
        /// Confirmation message from the server.
        message: String,
    },
    /// The payment completed but the server rejected the signature.
    Rejected {
        /// Rejection reason from the server.
        reason: String,
    },
}

/// Orchestrates one checkout attempt end to end.
///
/// The sequence is strictly sequential: ensure the widget script is loaded,
/// create an order with the backend, open the widget, then forward the
/// completion callback to the verification endpoint. Each step must finish
/// (or fail) before the next begins; there is no internal parallelism and
/// no retry policy - failures surface immediately to the caller.
pub struct CheckoutFlow {
    api: CheckoutApi,
    widget: Arc<dyn CheckoutWidget>,
    key_id: String,
    store_name: String,
    description: String,
    in_flight: AtomicBool,
}

impl CheckoutFlow {
    /// Create a new checkout flow.
    ///
    /// # Arguments
    ///
    /// * `api` - Client for the order backend and verifier
    /// * `widget` - The hosted checkout widget seam
    /// * `key_id` - Publishable key for widget initialization
    pub fn new(api: CheckoutApi, widget: Arc<dyn CheckoutWidget>, key_id: impl Into<String>) -> Self {
        Self {
            api,
            widget,
            key_id: key_id.into(),
            store_name: DEFAULT_STORE_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Set the merchant display name shown in the widget.
    #[must_use]
    pub fn with_store_name(mut self, name: impl Into<String>) -> Self {
        self.store_name = name.into();
        self
    }

    /// Whether a payment attempt is currently in flight.
    ///
    /// This is the "button disabled" state: it must be `false` again after
    /// every attempt, successful or not, so the user can retry.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Run one checkout attempt for the given shipping address.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Busy`] if an attempt is already in flight,
    /// and propagates widget and network failures. A signature rejection is
    /// not an error; it is [`CheckoutOutcome::Rejected`].
    pub async fn pay(&self, shipping_address: &str) -> Result<CheckoutOutcome, ClientError> {
        // One logical flow per user action. The guard clears the flag on
        // every exit path, including early returns and widget failures.
        let _guard = BusyGuard::acquire(&self.in_flight)?;

        self.widget.ensure_loaded().await.map_err(|e| {
            tracing::warn!(error = %e, "Checkout script failed to load");
            e
        })?;

        let order = self.api.create_order(shipping_address).await?;

        let options = CheckoutOptions {
            key_id: self.key_id.clone(),
            order_id: order.order_id.clone(),
            // The backend prices in major units; the widget takes paise.
            amount_minor: order.amount * 100,
            currency: CURRENCY.to_string(),
            name: self.store_name.clone(),
            description: self.description.clone(),
        };

        let callback = self.widget.collect_payment(&options).await?;
        let confirmation = callback.into_confirmation()?;

        let outcome = self.api.verify_payment(&confirmation).await?;

        match outcome {
            VerifyOutcome::Verified { message } => {
                tracing::info!(
                    order_id = %confirmation.order_id,
                    payment_id = %confirmation.payment_id,
                    "Payment verified"
                );
                Ok(CheckoutOutcome::Verified {
                    order_id: confirmation.order_id,
                    payment_id: confirmation.payment_id,
                    message,
                })
            }
            VerifyOutcome::Rejected { reason } => {
                tracing::warn!(
                    order_id = %confirmation.order_id,
                    payment_id = %confirmation.payment_id,
                    reason = %reason,
                    "Payment verification rejected"
                );
                Ok(CheckoutOutcome::Rejected { reason })
            }
        }
    }
}

/// RAII guard for the in-flight flag.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, ClientError> {
        if flag
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ClientError::Busy);
        }
        Ok(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
