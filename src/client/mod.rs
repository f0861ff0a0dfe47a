//! High-level ledger client.
//!
//! # Data Flow
//! ```text
//! ClientConfig
//!     → LedgerClient::new (validate, build transport)
//!     → execute_with_payload: builder → signer → submitter
//!     → wait_for_transaction: poll until settled or timeout
//! ```
//!
//! # Concurrency
//! Build→Sign→Submit is a single logical flow with no internal
//! parallelism. Transactions for different senders are independent and may
//! run concurrently; two concurrent builds for the *same* sender can
//! observe the same sequence number and conflict, so per-sender
//! serialization is the caller's responsibility.

use serde_json::Value;
use std::time::Duration;

use crate::account::LocalAccount;
use crate::config::{validation, ClientConfig};
use crate::transaction::{builder, signer, submitter, AccountInfo, TransactionPayload};
use crate::transport::RestTransport;
use crate::types::{ClientError, ClientResult};

/// Client for a single ledger REST service endpoint.
#[derive(Debug, Clone)]
pub struct LedgerClient {
    transport: RestTransport,
    config: ClientConfig,
}

impl LedgerClient {
    /// Build a client from a configuration, validating it first.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        validation::validate(&config)
            .map_err(|errors| ClientError::Config(errors.join("; ")))?;
        let transport = RestTransport::new(&config)?;
        tracing::info!(node_url = %config.node_url, "Ledger client initialized");
        Ok(Self { transport, config })
    }

    /// The transport this client issues requests through.
    pub fn transport(&self) -> &RestTransport {
        &self.transport
    }

    // ---- read side -------------------------------------------------------

    /// Current ledger information (`GET /`).
    pub async fn ledger_info(&self) -> ClientResult<Value> {
        self.transport.get_json("/").await
    }

    /// Recent transactions (`GET /transactions`).
    pub async fn transactions(&self) -> ClientResult<Value> {
        self.transport.get_json("/transactions").await
    }

    /// Account state: sequence number and authentication key.
    pub async fn account(&self, address: &str) -> ClientResult<AccountInfo> {
        builder::account_info(&self.transport, address).await
    }

    /// A single account resource, or `None` if the account does not hold
    /// one of that type. A 404 here is a normal outcome, not an error.
    pub async fn account_resource(
        &self,
        address: &str,
        resource_type: &str,
    ) -> ClientResult<Option<Value>> {
        self.transport
            .get_json_optional(&format!("/accounts/{}/resource/{}", address, resource_type))
            .await
    }

    /// All resources held by an account.
    pub async fn account_resources(&self, address: &str) -> ClientResult<Value> {
        self.transport
            .get_json(&format!("/accounts/{}/resources", address))
            .await
    }

    /// All modules published under an account.
    pub async fn account_modules(&self, address: &str) -> ClientResult<Value> {
        self.transport
            .get_json(&format!("/accounts/{}/modules", address))
            .await
    }

    // ---- write side ------------------------------------------------------

    /// Build, sign, and submit a transaction in one step, returning the
    /// transaction hash immediately.
    ///
    /// Confirmation is an explicit separate call
    /// ([`Self::wait_for_transaction`]) so a caller can submit several
    /// transactions before blocking on any one of them. Callers must
    /// serialize submissions per sender; see the module docs.
    pub async fn execute_with_payload(
        &self,
        account: &LocalAccount,
        payload: TransactionPayload,
    ) -> ClientResult<String> {
        let unsigned =
            builder::build_transaction(&self.transport, &account.address(), payload).await?;
        let signed = signer::sign_transaction(&self.transport, account, unsigned).await?;
        submitter::submit_transaction(&self.transport, &signed).await
    }

    /// Single non-blocking poll: is the transaction still pending?
    pub async fn transaction_pending(&self, hash: &str) -> ClientResult<bool> {
        submitter::transaction_pending(&self.transport, hash).await
    }

    /// Poll until the transaction settles, using the configured interval
    /// and attempt budget.
    pub async fn wait_for_transaction(&self, hash: &str) -> ClientResult<()> {
        submitter::wait_for_transaction(
            &self.transport,
            hash,
            self.config.poll_interval(),
            self.config.max_poll_attempts,
        )
        .await
    }

    /// Poll with an explicit interval and budget, overriding the config.
    pub async fn wait_for_transaction_with(
        &self,
        hash: &str,
        poll_interval: Duration,
        max_attempts: u32,
    ) -> ClientResult<()> {
        submitter::wait_for_transaction(&self.transport, hash, poll_interval, max_attempts).await
    }
}
