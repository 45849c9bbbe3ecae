//! Rzp-Checkout Service - HTTP API for payment signature verification.
//!
//! This is the main entry point for the rzp-checkout service.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rzp_checkout_service::{create_router, AppState, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,rzp_checkout=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Rzp-Checkout Service");

    // Load configuration from environment
    let config = ServiceConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        key_id_configured = %config.razorpay_key_id.is_some(),
        key_secret_configured = %config.razorpay_key_secret.is_some(),
        "Service configuration loaded"
    );

    // Build app state and router
    let state = AppState::new(config.clone());
    let app = create_router(state);
    tracing::info!("Router configured with all API endpoints");

    // Start HTTP server
    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
