//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check URLs actually parse before any request is issued
//! - Validate value ranges (timeouts and poll budgets > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ClientConfig → Result<(), Vec<String>>

use crate::config::schema::ClientConfig;
use url::Url;

/// Validate a configuration, collecting every problem found.
pub fn validate(config: &ClientConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.node_url.is_empty() {
        errors.push("node_url must not be empty".to_string());
    } else if let Err(e) = config.node_url.parse::<Url>() {
        errors.push(format!("node_url '{}' is not a valid URL: {}", config.node_url, e));
    }

    if let Some(faucet_url) = &config.faucet_url {
        if let Err(e) = faucet_url.parse::<Url>() {
            errors.push(format!("faucet_url '{}' is not a valid URL: {}", faucet_url, e));
        }
    }

    if config.request_timeout_secs == 0 {
        errors.push("request_timeout_secs must be greater than zero".to_string());
    }
    if config.poll_interval_secs == 0 {
        errors.push("poll_interval_secs must be greater than zero".to_string());
    }
    if config.max_poll_attempts == 0 {
        errors.push("max_poll_attempts must be greater than zero".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
