//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the logging subsystem for binaries and tests that want one
//! - Configure log level at runtime via RUST_LOG
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - The library itself never installs a subscriber; callers opt in

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install an EnvFilter-based fmt subscriber.
///
/// Defaults to debug-level events from this crate when RUST_LOG is unset.
/// A global subscriber may only be set once; later calls are no-ops, so
/// tests can call this freely.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ledger_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
