//! The hosted checkout widget seam.

use async_trait::async_trait;

use crate::error::WidgetError;
use crate::types::{CheckoutOptions, WidgetCallback};

/// The hosted checkout widget.
///
/// In production this is the third-party checkout script running in a
/// browser; the trait keeps the flow testable without one. Implementations
/// must resolve `collect_payment` exactly once per attempt, either with the
/// gateway's completion callback or with an error.
#[async_trait]
pub trait CheckoutWidget: Send + Sync {
    /// Ensure the checkout script is loaded and ready to open.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::ScriptLoad`] if the script cannot be loaded.
    async fn ensure_loaded(&self) -> Result<(), WidgetError>;

    /// Open the widget for the given order and wait for the completion
    /// callback.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Failed`] if the payment attempt fails or the
    /// widget is dismissed before completion.
    async fn collect_payment(
        &self,
        options: &CheckoutOptions,
    ) -> Result<WidgetCallback, WidgetError>;
}
