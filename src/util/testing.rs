//! Shared tracing setup for tests.
//!
//! Output goes through the test writer, so it only shows for failing tests
//! or with `--nocapture`. `RUST_LOG` overrides the crate-wide trace filter.

use std::sync::Once;

use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

static INIT: Once = Once::new();

pub fn init_test_setup() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("akinator=trace"));
        let layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            // builder spans report their timing on close
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(filter);

        // Another harness may already own the global subscriber.
        if tracing_subscriber::registry().with(layer).try_init().is_ok() {
            tracing::debug!("test tracing initialized");
        }
    });
}
