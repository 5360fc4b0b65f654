//! Common test utilities and logging infrastructure
//!
//! The library logs through the `log` facade. Tests install a `tracing`
//! subscriber (which also captures `log` records) so that permissive
//! fallbacks and resolved layouts show up when a test fails.
//!
//! # Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::init_test_logging;
//!
//! #[test]
//! fn my_test() {
//!     init_test_logging();
//!     // test code...
//! }
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG=asciitable=trace` - Show resolved column widths and row expansion
//! - `TEST_LOG_JSON=1` - Output JSON format for CI parsing

#![allow(dead_code)]

pub mod assertions;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use asciitable::prelude::*;

static INIT: Once = Once::new();

/// Initialize test logging infrastructure.
///
/// Idempotent; every test may call it.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let use_json = std::env::var("TEST_LOG_JSON").is_ok();

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("asciitable=debug,test=info"));

        if use_json {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_test_writer())
                .try_init()
                .ok();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_test_writer()
                        .with_ansi(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_thread_ids(true)
                        .with_target(true)
                        .compact(),
                )
                .try_init()
                .ok();
        }
    });
}

/// A test span guard that logs entry and exit.
pub fn test_phase(name: &str) -> tracing::span::EnteredSpan {
    let span = tracing::info_span!("test_phase", phase = name);
    tracing::info!(phase = name, "entering test phase");
    span.entered()
}

/// Log test context information.
pub fn log_test_context(test_name: &str, description: &str) {
    tracing::info!(
        test_name = test_name,
        description = description,
        "test context"
    );
}

/// The "Dummy title" table used across the fixtures.
pub fn dummy_table() -> Table {
    let mut table = Table::new("Dummy title");
    table
        .set_heading(["Title", "Count", "Rate (%)"])
        .add_row(row!["Dummy 1", 10, 2.3])
        .add_row(row!["Dummy 2", 5, 3.1])
        .add_row(row!["Dummy 3", 100, 3.14])
        .add_row(row!["Dummy 4", 0, 1]);
    table
}

/// Names of all bundled styles.
pub fn builtin_style_names() -> Vec<String> {
    StyleCatalog::builtin()
        .names()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_phase_logging() {
        init_test_logging();
        let _phase = test_phase("setup");
        log_test_context("test_phase_logging", "phase guard does not panic");
    }
}
