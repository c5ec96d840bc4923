//! Tracing setup for debugging the checker.
//!
//! ```bash
//! IDLCHECK_LOG=debug idlcheck check api.json
//! IDLCHECK_LOG="idlcheck_compiler=trace" idlcheck check schemas/
//! ```
//!
//! The subscriber is only installed when `IDLCHECK_LOG` (or `RUST_LOG`) is set.

use tracing_subscriber::EnvFilter;

/// Build an `EnvFilter` from `IDLCHECK_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    match std::env::var("IDLCHECK_LOG") {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Install the global tracing subscriber, writing to stderr.
///
/// Does nothing when neither `IDLCHECK_LOG` nor `RUST_LOG` is set.
pub fn init_tracing() {
    let has_idlcheck_log = std::env::var("IDLCHECK_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_idlcheck_log && !has_rust_log {
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .init();
}
