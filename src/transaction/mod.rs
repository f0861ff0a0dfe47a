//! Transaction construction, signing, and confirmation.
//!
//! # Data Flow
//! ```text
//! LocalAccount (sender address)
//!     → builder.rs (fetch sequence number, assemble unsigned request)
//!     → signer.rs (fetch signing message, ed25519 sign, attach envelope)
//!     → submitter.rs (POST, then poll until settled or timeout)
//! ```
//!
//! # Protocol Constraints
//! - The sequence number must equal the value the service reports at build
//!   time; a stale value is rejected service-side.
//! - All numeric fields travel as decimal strings on the wire.
//! - The attached signature is exactly 64 bytes, hex-encoded.

pub mod builder;
pub mod signer;
pub mod submitter;

use serde::{Deserialize, Serialize};

/// What a transaction does. The variants mirror the service's wire shapes;
/// the rest of the core never looks inside.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum TransactionPayload {
    /// Publish one or more compiled modules.
    #[serde(rename = "module_bundle_payload")]
    ModuleBundle { modules: Vec<ModuleBytecode> },

    /// Invoke a published function.
    #[serde(rename = "script_function_payload")]
    ScriptFunction {
        /// Fully qualified name, e.g. "0x{addr}::Message::set_message".
        function: String,
        type_arguments: Vec<String>,
        arguments: Vec<serde_json::Value>,
    },
}

/// A single compiled module, "0x"-prefixed hex.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleBytecode {
    pub bytecode: String,
}

/// Signature envelope attached to a transaction request once signed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignatureEnvelope {
    #[serde(rename = "type")]
    pub signature_type: String,
    /// "0x"-prefixed hex of the 32-byte public key.
    pub public_key: String,
    /// "0x"-prefixed hex of the 64-byte signature.
    pub signature: String,
}

/// A transaction request as submitted to the service.
///
/// Built unsigned by [`builder`], mutated in place by [`signer`] (the
/// envelope is attached), and read-only from then on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRequest {
    /// "0x"-prefixed sender address.
    pub sender: String,
    /// Decimal string; must match the account's current value.
    pub sequence_number: String,
    pub max_gas_amount: String,
    pub gas_unit_price: String,
    pub expiration_timestamp_secs: String,
    pub payload: TransactionPayload,
    /// Absent until the signer has run; the unsigned form must serialize
    /// without this field because it is the input to the signing message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<SignatureEnvelope>,
}

/// Account state as reported by `GET /accounts/{address}`.
///
/// Fetched fresh for every build and never cached: the sequence number
/// moves with every confirmed transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountInfo {
    pub sequence_number: String,
    pub authentication_key: String,
}
