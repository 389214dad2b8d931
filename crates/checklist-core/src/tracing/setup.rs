//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "CHECKLIST_LOG";

/// Filter used when `CHECKLIST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "checklist_core=info,checklist_rules=info,checklist_action=info";

/// Initialize the checklist tracing/logging system.
///
/// Reads `CHECKLIST_LOG` for per-crate log levels, e.g.
/// `CHECKLIST_LOG=checklist_rules=debug,checklist_action=info`.
///
/// Log lines go to stderr so stdout stays reserved for the rendered report.
/// Calling this more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_ansi(false),
            )
            .with(filter)
            .init();
    });
}
