//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Log level configurable through the environment (RUST_LOG)
//! - Key material never appears in any event

pub mod logging;
