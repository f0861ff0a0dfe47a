//! Client-side protocol driver for a remote ledger service.
//!
//! # Architecture Overview
//!
//! ```text
//!   LocalAccount (keys, address)        ClientConfig (node/faucet URLs)
//!        │                                    │
//!        ▼                                    ▼
//!   LedgerClient ─▶ builder ─▶ signer ─▶ submitter ─▶ ledger service
//!                   (seq no)  (sign msg)  (202 + poll)    (HTTP)
//!
//!   FaucetClient (test funding, second service)
//! ```
//!
//! The crate drives one transaction at a time through
//! build → sign → submit → confirm against the service's REST API. It
//! keeps no ledger state, performs no retries, and leaves per-sender
//! serialization to the caller.

pub mod account;
pub mod client;
pub mod config;
pub mod faucet;
pub mod observability;
pub mod transaction;
pub mod transport;
pub mod types;

pub use account::LocalAccount;
pub use client::LedgerClient;
pub use config::ClientConfig;
pub use faucet::FaucetClient;
pub use transaction::{ModuleBytecode, TransactionPayload, TransactionRequest};
pub use types::{ClientError, ClientResult};
