//! Configuration management.
//!
//! # Data Flow
//! ```text
//! caller-supplied struct (or deserialized from a config file)
//!     → schema.rs (shape & defaults)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → passed explicitly to LedgerClient / FaucetClient
//! ```
//!
//! # Design Decisions
//! - Configuration is an explicit struct handed to constructors; there is
//!   no ambient or global state.
//! - All fields except the node URL have defaults to allow minimal configs.
//! - Validation separates syntactic (serde) from semantic checks.

pub mod schema;
pub mod validation;

pub use schema::ClientConfig;
