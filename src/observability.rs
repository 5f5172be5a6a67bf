//! Observability utilities.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Initialize tracing subscriber once for the process.
///
/// Filter defaults to `info` if `RUST_LOG` is unset. Log format defaults
/// to plain text and can be switched to JSON via `VIRTWATCH_LOG_FORMAT=json`.
pub fn init_tracing() {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let registry = tracing_subscriber::registry().with(filter);

        let json = std::env::var("VIRTWATCH_LOG_FORMAT")
            .is_ok_and(|v| v.eq_ignore_ascii_case("json"));
        let result = if json {
            registry.with(fmt::layer().json()).try_init()
        } else {
            registry.with(fmt::layer().compact()).try_init()
        };

        if let Err(err) = result {
            eprintln!("tracing init skipped: {err}");
        }
    });
}
