//! Tracing initialization for the workspace binaries.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV_VAR: &str = "PICKER_LOG";

static INIT: Once = Once::new();

/// Install the global subscriber.
///
/// Reads `PICKER_LOG` (e.g. `PICKER_LOG=picker_core=debug`), falling back to
/// `info`. Output goes to stderr so table output on stdout stays clean.
/// Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
