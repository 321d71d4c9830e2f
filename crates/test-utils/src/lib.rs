//! Shared helpers for the `confdag` integration tests.

pub mod builders;

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING: Once = Once::new();

/// Route `confdag` logs into the test harness's captured output.
///
/// `RUST_LOG` overrides the default `confdag=debug`; output only shows for
/// failing tests or with `--nocapture`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("confdag=debug"));

        // Another harness may have installed a subscriber already.
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init();
    });
}
