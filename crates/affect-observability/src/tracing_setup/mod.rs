//! Tracing setup: structured logging with event definitions.

pub mod events;

use std::sync::Once;

use affect_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the filter directive.
pub const LOG_ENV_VAR: &str = "AFFECT_LOG";

/// Initialize the tracing subscriber with human-readable output.
///
/// Reads `AFFECT_LOG` for per-module levels, e.g.
/// `AFFECT_LOG=affect_analytics=debug`. Falls back to `info`.
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    init_tracing_with_config(&ObservabilityConfig::default());
}

/// Initialize tracing from config. `AFFECT_LOG` still wins when set.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| default_filter(&config.log_level));

        if config.json {
            let _ = tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init();
        } else {
            let _ = tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init();
        }
    });
}

fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}
