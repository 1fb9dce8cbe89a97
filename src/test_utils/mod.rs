//! Test utilities for armgraph
//!
//! - [`init_test_logging`] turns on tracing output inside tests
//! - [`fixtures`] provides deployment templates and run logs to feed the pipeline
//!
//! # Example
//!
//! ```rust,no_run
//! use armgraph::test_utils::{TemplateFixture, init_test_logging};
//!
//! init_test_logging(None);
//! let manifest = TemplateFixture::web_app().manifest();
//! assert_eq!(manifest.resources.len(), 3);
//! ```

pub mod fixtures;

pub use fixtures::{RunLogFixture, TemplateFixture};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=armgraph=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer() // Important: uses test-compatible writer
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}
