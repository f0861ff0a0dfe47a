//! Shared types and error definitions.

use thiserror::Error;

/// Errors that can occur while driving the transaction protocol.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service answered with a status the operation did not expect.
    #[error("remote service returned status {status}: {body}")]
    RemoteService { status: u16, body: String },

    /// The account does not exist on the ledger.
    #[error("account {address} not found on the ledger")]
    AccountNotFound { address: String },

    /// The service answered 2xx but the body was not what the protocol
    /// requires (missing field, non-numeric sequence number, bad hex).
    #[error("malformed service response: {0}")]
    MalformedResponse(String),

    /// The transaction did not leave the pending state within the polling
    /// budget. The transaction may still settle later; this is recoverable
    /// and distinct from a rejection.
    #[error("transaction {hash} still pending after {attempts} polls")]
    ConfirmationTimeout { hash: String, attempts: u32 },

    /// A supplied keypair seed had the wrong length for the scheme.
    #[error("invalid seed length: expected {expected} bytes, got {actual}")]
    InvalidSeed { expected: usize, actual: usize },

    /// Transport-level failure (connect, DNS, timeout, body decode).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration rejected during validation.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for all client operations.
pub type ClientResult<T> = Result<T, ClientError>;
