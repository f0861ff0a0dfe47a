//! Transaction submission and confirmation polling.
//!
//! # Responsibilities
//! - Post the signed transaction and extract its hash
//! - Poll transaction status until it leaves the pending state
//!
//! # State Machine
//! ```text
//! Submitted → Pending ⇄ (poll) → Settled | TimedOut
//! ```
//! Settled covers both success and on-chain failure; this layer does not
//! distinguish them. There is no transition back out of Settled/TimedOut.
//!
//! # Design Decisions
//! - Fixed delay between polls and a hard attempt ceiling; no backoff and
//!   no cancellation token. Callers wanting cancellation compose their own
//!   loop from `transaction_pending`.

use reqwest::StatusCode;
use std::time::Duration;

use crate::transaction::TransactionRequest;
use crate::transport::RestTransport;
use crate::types::{ClientError, ClientResult};

/// Status tag the service reports while a transaction sits in the mempool.
const PENDING_TYPE: &str = "pending_transaction";

/// Submit a signed transaction, returning its hash.
///
/// The service acknowledges with 202 Accepted; any other status is a
/// RemoteService error.
pub async fn submit_transaction(
    transport: &RestTransport,
    signed: &TransactionRequest,
) -> ClientResult<String> {
    let response = transport
        .post_json("/transactions", signed, StatusCode::ACCEPTED)
        .await?;

    let hash = response
        .get("hash")
        .and_then(|h| h.as_str())
        .ok_or_else(|| {
            ClientError::MalformedResponse("submit response missing 'hash'".into())
        })?
        .to_string();

    tracing::info!(hash = %hash, sender = %signed.sender, "Transaction submitted");
    Ok(hash)
}

/// Single non-blocking status poll: is the transaction still pending?
///
/// 404 means the confirmation record has not been indexed yet, which is
/// reported as pending rather than an error.
pub async fn transaction_pending(
    transport: &RestTransport,
    hash: &str,
) -> ClientResult<bool> {
    match transport
        .get_json_optional(&format!("/transactions/{}", hash))
        .await?
    {
        None => Ok(true),
        Some(body) => Ok(body.get("type").and_then(|t| t.as_str()) == Some(PENDING_TYPE)),
    }
}

/// Block the calling task until the transaction settles or the polling
/// budget runs out.
///
/// Settling covers both success and on-chain failure. A timeout is
/// recoverable: the transaction may still settle later, so it must not be
/// treated as a rejection.
pub async fn wait_for_transaction(
    transport: &RestTransport,
    hash: &str,
    poll_interval: Duration,
    max_attempts: u32,
) -> ClientResult<()> {
    for attempt in 1..=max_attempts {
        if !transaction_pending(transport, hash).await? {
            tracing::info!(hash = %hash, attempt, "Transaction settled");
            return Ok(());
        }
        tracing::debug!(hash = %hash, attempt, "Transaction pending");
        if attempt < max_attempts {
            tokio::time::sleep(poll_interval).await;
        }
    }

    Err(ClientError::ConfirmationTimeout {
        hash: hash.to_string(),
        attempts: max_attempts,
    })
}
