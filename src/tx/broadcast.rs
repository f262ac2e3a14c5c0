//! Transaction broadcast with bounded retry.
//!
//! # Responsibilities
//! - Submit signed records to the ledger endpoint
//! - Apply a per-attempt timeout to every request
//! - Retry failed attempts with a fixed delay, up to the configured bound
//!
//! # Design Decisions
//! - Retries are blind: fixed delay, no backoff, no jitter
//! - The delay after the final failed attempt is skipped
//! - No idempotency token is sent; see the note on [`Broadcaster::broadcast`]

use std::time::Duration;
use tokio::time::sleep;
use url::Url;
use uuid::Uuid;

use crate::config::SdkConfig;
use crate::error::{SdkError, SdkResult};
use crate::tx::builder::TransactionRecord;

/// Opaque acknowledgment returned by the ledger on a successful broadcast.
pub type Receipt = serde_json::Map<String, serde_json::Value>;

/// Broadcast pipeline bound to one ledger endpoint.
#[derive(Debug, Clone)]
pub struct Broadcaster {
    http: reqwest::Client,
    broadcast_url: Url,
    max_attempts: u32,
    retry_delay: Duration,
}

impl Broadcaster {
    /// Create a broadcaster from a validated configuration.
    pub fn new(config: &SdkConfig) -> SdkResult<Self> {
        let base = config.effective_endpoint().trim_end_matches('/');
        let broadcast_url: Url = format!("{base}/broadcast")
            .parse()
            .map_err(|e| SdkError::Config(format!("invalid endpoint URL '{base}': {e}")))?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| SdkError::Config(format!("HTTP client construction failed: {e}")))?;

        Ok(Self {
            http,
            broadcast_url,
            max_attempts: config.max_attempts,
            retry_delay: config.retry_delay(),
        })
    }

    /// Submit a signed record, retrying failed attempts.
    ///
    /// Returns the receipt from the first successful attempt. After
    /// `max_attempts` failures the last observed cause is surfaced as
    /// [`SdkError::BroadcastExhausted`]. The record must carry a signature;
    /// an unsigned record is rejected before any network activity.
    ///
    /// # Known limitation
    /// A retry issued because an acknowledgment was lost may resubmit a
    /// transaction the ledger already accepted. Callers that need exactly-
    /// once submission must deduplicate server-side.
    pub async fn broadcast(&self, signed: &TransactionRecord) -> SdkResult<Receipt> {
        if !signed.is_signed() {
            return Err(SdkError::InvalidArgument(
                "record must be signed before broadcast".to_string(),
            ));
        }

        let broadcast_id = Uuid::new_v4();
        let mut last_error = String::new();

        for attempt in 1..=self.max_attempts {
            match self.attempt(signed).await {
                Ok(receipt) => {
                    tracing::info!(%broadcast_id, attempt, "transaction broadcast accepted");
                    return Ok(receipt);
                }
                Err(reason) => {
                    tracing::warn!(
                        %broadcast_id,
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %reason,
                        "broadcast attempt failed"
                    );
                    last_error = reason;
                }
            }

            if attempt < self.max_attempts {
                sleep(self.retry_delay).await;
            }
        }

        tracing::error!(
            %broadcast_id,
            attempts = self.max_attempts,
            error = %last_error,
            "all broadcast attempts failed"
        );
        Err(SdkError::BroadcastExhausted {
            attempts: self.max_attempts,
            last_error,
        })
    }

    /// Issue a single broadcast request. Any transport error, non-2xx
    /// status, or malformed body counts as one failed attempt.
    async fn attempt(&self, signed: &TransactionRecord) -> Result<Receipt, String> {
        let response = self
            .http
            .post(self.broadcast_url.clone())
            .json(signed)
            .send()
            .await
            .map_err(|e| format!("request failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("endpoint returned status {status}"));
        }

        match response.json::<serde_json::Value>().await {
            Ok(serde_json::Value::Object(receipt)) => Ok(receipt),
            Ok(other) => Err(format!("malformed receipt: expected a JSON object, got {other}")),
            Err(e) => Err(format!("malformed receipt: {e}")),
        }
    }
}
