//! Test logging setup.

use std::sync::Once;

static INIT: Once = Once::new();

/// Route the crate's tracing output to the test writer (once per test binary).
/// Set `RUST_LOG=marketplace_catalog=debug` to see it.
pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .with(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}
