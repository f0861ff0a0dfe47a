//! Account identity and key management.
//!
//! # Responsibilities
//! - Hold an ed25519 keypair for the lifetime of the process
//! - Derive the on-ledger address (authentication key) from the public key
//! - Produce detached signatures for the transaction signer
//!
//! # Security
//! - The private key is never serialized, logged, or exposed by Debug
//! - Key material lives only in memory; persistence is the caller's problem

use ed25519_dalek::{Signer, SigningKey, SECRET_KEY_LENGTH};
use rand::rngs::OsRng;
use sha3::{Digest, Sha3_256};

use crate::types::{ClientError, ClientResult};

/// Scheme discriminator appended to the public key before hashing.
/// Zero marks the single-key ed25519 scheme; other values are reserved
/// for multi-key and rotated-key schemes. Must stay bit-exact for address
/// compatibility with the ledger.
const SINGLE_KEY_SCHEME: u8 = 0x00;

/// A local account: an ed25519 keypair plus its derived ledger address.
pub struct LocalAccount {
    signing_key: SigningKey,
}

impl LocalAccount {
    /// Generate an account with a cryptographically random keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        let account = Self { signing_key };
        tracing::info!(address = %account.address(), "Account generated");
        account
    }

    /// Derive an account deterministically from a 32-byte seed.
    ///
    /// Same seed always yields the same keypair and address, which makes
    /// test fixtures reproducible.
    pub fn from_seed(seed: &[u8]) -> ClientResult<Self> {
        if seed.len() != SECRET_KEY_LENGTH {
            return Err(ClientError::InvalidSeed {
                expected: SECRET_KEY_LENGTH,
                actual: seed.len(),
            });
        }
        let mut bytes = [0u8; SECRET_KEY_LENGTH];
        bytes.copy_from_slice(seed);
        Ok(Self {
            signing_key: SigningKey::from_bytes(&bytes),
        })
    }

    /// The account's ledger address. Identical to [`Self::auth_key`].
    pub fn address(&self) -> String {
        self.auth_key()
    }

    /// Authentication key: lowercase hex of
    /// SHA3-256(public key bytes ‖ scheme byte).
    pub fn auth_key(&self) -> String {
        let mut hasher = Sha3_256::new();
        hasher.update(self.signing_key.verifying_key().as_bytes());
        hasher.update([SINGLE_KEY_SCHEME]);
        hex::encode(hasher.finalize())
    }

    /// Lowercase hex of the 32 raw public key bytes.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.signing_key.verifying_key().as_bytes())
    }

    /// Sign a message, returning the 64-byte detached signature.
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.signing_key.sign(message).to_bytes()
    }
}

impl std::fmt::Debug for LocalAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalAccount")
            .field("address", &self.address())
            .field("signing_key", &"<redacted>")
            .finish()
    }
}
