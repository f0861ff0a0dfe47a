//! Transaction signing.
//!
//! # Responsibilities
//! - Obtain the canonical signing message for an unsigned request
//! - Produce the ed25519 signature and attach the envelope
//!
//! # Design Decisions
//! - The service computes the canonical byte encoding; the client signs
//!   exactly what the service will validate rather than re-deriving the
//!   encoding locally. A future offline-signing mode needs the local
//!   encoding; see DESIGN.md.

use reqwest::StatusCode;

use crate::account::LocalAccount;
use crate::transaction::{SignatureEnvelope, TransactionRequest};
use crate::transport::RestTransport;
use crate::types::{ClientError, ClientResult};

/// Wire tag for the single-key ed25519 signature scheme.
const ED25519_SIGNATURE: &str = "ed25519_signature";

/// Sign an unsigned transaction request, returning it with the signature
/// envelope attached.
pub async fn sign_transaction(
    transport: &RestTransport,
    account: &LocalAccount,
    mut request: TransactionRequest,
) -> ClientResult<TransactionRequest> {
    let response = transport
        .post_json("/transactions/signing_message", &request, StatusCode::OK)
        .await?;

    let message = response
        .get("message")
        .and_then(|m| m.as_str())
        .ok_or_else(|| {
            ClientError::MalformedResponse("signing message response missing 'message'".into())
        })?;

    // The service hex-encodes the message behind a 2-character marker.
    let message_bytes = hex::decode(message.trim_start_matches("0x")).map_err(|e| {
        ClientError::MalformedResponse(format!("signing message is not valid hex: {}", e))
    })?;

    let signature = account.sign(&message_bytes);

    tracing::debug!(
        sender = %request.sender,
        message_len = message_bytes.len(),
        "Transaction signed"
    );

    request.signature = Some(SignatureEnvelope {
        signature_type: ED25519_SIGNATURE.to_string(),
        public_key: format!("0x{}", account.public_key_hex()),
        signature: format!("0x{}", hex::encode(signature)),
    });
    Ok(request)
}
