//! Faucet client for funding test accounts.
//!
//! # Responsibilities
//! - Ask the faucet service to mint coins to an address
//! - Optionally wait for the resulting mint transactions to settle
//!
//! The faucet is a second HTTP service next to the node; minting produces
//! ordinary transactions whose hashes are confirmed against the node.

use reqwest::StatusCode;

use crate::config::{validation, ClientConfig};
use crate::transaction::submitter;
use crate::transport::RestTransport;
use crate::types::{ClientError, ClientResult};

/// Client for the faucet service.
#[derive(Debug, Clone)]
pub struct FaucetClient {
    faucet: RestTransport,
    node: RestTransport,
    config: ClientConfig,
}

impl FaucetClient {
    /// Build a faucet client. The configuration must carry a `faucet_url`.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        validation::validate(&config)
            .map_err(|errors| ClientError::Config(errors.join("; ")))?;
        let faucet_url = config
            .faucet_url
            .clone()
            .ok_or_else(|| ClientError::Config("faucet_url is not configured".into()))?;
        Ok(Self {
            faucet: RestTransport::with_base_url(&config, &faucet_url)?,
            node: RestTransport::new(&config)?,
            config,
        })
    }

    /// Mint `amount` coins to `address`, returning the hashes of the mint
    /// transactions without waiting for them.
    pub async fn fund_account(&self, address: &str, amount: u64) -> ClientResult<Vec<String>> {
        let path = format!("/mint?amount={}&auth_key={}", amount, address);
        let response = self.faucet.post_json(&path, &(), StatusCode::OK).await?;

        let hashes: Vec<String> = serde_json::from_value(response).map_err(|e| {
            ClientError::MalformedResponse(format!("faucet mint response: {}", e))
        })?;

        tracing::info!(address = %address, amount, count = hashes.len(), "Faucet mint submitted");
        Ok(hashes)
    }

    /// Mint and block until every mint transaction has settled.
    pub async fn fund_and_wait(&self, address: &str, amount: u64) -> ClientResult<Vec<String>> {
        let hashes = self.fund_account(address, amount).await?;
        for hash in &hashes {
            submitter::wait_for_transaction(
                &self.node,
                hash,
                self.config.poll_interval(),
                self.config.max_poll_attempts,
            )
            .await?;
        }
        Ok(hashes)
    }
}
