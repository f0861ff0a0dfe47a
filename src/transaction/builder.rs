//! Unsigned transaction assembly.
//!
//! # Responsibilities
//! - Fetch the sender's current sequence number from the service
//! - Stamp expiration and flat gas policy onto the request
//!
//! # Design Decisions
//! - The sequence number is fetched immediately before signing, which
//!   minimizes (but cannot eliminate) the race window against a concurrent
//!   transaction from the same sender.
//! - Flat fee policy; no dynamic fee estimation.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::transaction::{AccountInfo, TransactionPayload, TransactionRequest};
use crate::transport::RestTransport;
use crate::types::{ClientError, ClientResult};

/// Flat gas ceiling for every transaction.
pub const MAX_GAS_AMOUNT: u64 = 2000;

/// Flat price per gas unit.
pub const GAS_UNIT_PRICE: u64 = 1;

/// How long the service should still consider the transaction valid.
/// Bounds the damage of a stale transaction executing after a long delay.
pub const EXPIRATION_HORIZON_SECS: u64 = 600;

/// Fetch the sender's account state.
///
/// 404 means the account does not exist on the ledger yet; other
/// unexpected statuses propagate as RemoteService errors.
pub async fn account_info(
    transport: &RestTransport,
    address: &str,
) -> ClientResult<AccountInfo> {
    let value = transport
        .get_json(&format!("/accounts/{}", address))
        .await
        .map_err(|e| match e {
            ClientError::RemoteService { status: 404, .. } => ClientError::AccountNotFound {
                address: address.to_string(),
            },
            other => other,
        })?;
    serde_json::from_value(value)
        .map_err(|e| ClientError::MalformedResponse(format!("account info: {}", e)))
}

/// Assemble an unsigned transaction request for `sender_address`.
pub async fn build_transaction(
    transport: &RestTransport,
    sender_address: &str,
    payload: TransactionPayload,
) -> ClientResult<TransactionRequest> {
    let info = account_info(transport, sender_address).await?;

    let sequence_number: u64 = info.sequence_number.parse().map_err(|_| {
        ClientError::MalformedResponse(format!(
            "non-numeric sequence number '{}'",
            info.sequence_number
        ))
    })?;

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| ClientError::MalformedResponse(format!("system clock: {}", e)))?
        .as_secs();

    tracing::debug!(
        sender = %sender_address,
        sequence_number,
        "Building unsigned transaction"
    );

    Ok(TransactionRequest {
        sender: format!("0x{}", sender_address),
        sequence_number: sequence_number.to_string(),
        max_gas_amount: MAX_GAS_AMOUNT.to_string(),
        gas_unit_price: GAS_UNIT_PRICE.to_string(),
        expiration_timestamp_secs: (now + EXPIRATION_HORIZON_SECS).to_string(),
        payload,
        signature: None,
    })
}
