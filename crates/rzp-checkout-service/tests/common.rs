//! Common test utilities for rzp-checkout integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use axum::Router;
use axum_test::TestServer;

use rzp_checkout_service::{create_router, AppState, ServiceConfig};

/// Secret used by the test harness; signatures in tests are computed with it.
pub const TEST_KEY_SECRET: &str = "s3cret";

/// Publishable key id used by the test harness.
pub const TEST_KEY_ID: &str = "rzp_test_abc123";

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
}

impl TestHarness {
    /// Create a new test harness with the standard test credentials.
    pub fn new() -> Self {
        Self::with_secret(Some(TEST_KEY_SECRET.to_string()))
    }

    /// Create a harness with an explicit (possibly absent) key secret.
    pub fn with_secret(razorpay_key_secret: Option<String>) -> Self {
        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            razorpay_key_id: Some(TEST_KEY_ID.to_string()),
            razorpay_key_secret,
            cors_origins: vec!["*".into()],
            max_body_bytes: 64 * 1024,
            request_timeout_seconds: 30,
        };

        let state = AppState::new(config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
