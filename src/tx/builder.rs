//! Unsigned transaction construction.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{SdkError, SdkResult};
use crate::wallet::Address;

/// Fee applied when the caller does not specify one.
pub const DEFAULT_FEE: f64 = 0.001;

/// A value-transfer transaction record.
///
/// Built unsigned, signed exactly once, then treated as immutable. The JSON
/// serialization of a signed record is exactly the broadcast request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub from: Address,
    pub to: Address,
    pub amount: f64,
    pub fee: f64,
    /// Seconds since the Unix epoch at build time.
    pub timestamp: u64,
    /// Hex-encoded signature; `None` until signed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl TransactionRecord {
    /// Whether a signature has been attached.
    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }

    /// Canonical byte payload covered by the signature: the JSON
    /// serialization of the record without its signature field.
    pub fn signing_payload(&self) -> SdkResult<Vec<u8>> {
        let unsigned = TransactionRecord {
            signature: None,
            ..self.clone()
        };
        serde_json::to_vec(&unsigned)
            .map_err(|e| SdkError::Signing(format!("payload serialization failed: {e}")))
    }
}

/// Builds unsigned transaction records on behalf of one wallet address.
#[derive(Debug)]
pub struct TxBuilder {
    from: Address,
}

impl TxBuilder {
    pub fn new(from: Address) -> Self {
        Self { from }
    }

    /// Build an unsigned record with the default fee.
    pub fn build(&self, to: &str, amount: f64) -> SdkResult<TransactionRecord> {
        self.build_with_fee(to, amount, DEFAULT_FEE)
    }

    /// Build an unsigned record.
    ///
    /// `amount` and `fee` must be finite and non-negative; `to` must be
    /// non-empty. No side effects on failure.
    pub fn build_with_fee(&self, to: &str, amount: f64, fee: f64) -> SdkResult<TransactionRecord> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(SdkError::InvalidArgument(format!(
                "amount must be a non-negative finite number, got {amount}"
            )));
        }
        if !fee.is_finite() || fee < 0.0 {
            return Err(SdkError::InvalidArgument(format!(
                "fee must be a non-negative finite number, got {fee}"
            )));
        }
        let to = Address::new(to)?;

        let record = TransactionRecord {
            from: self.from.clone(),
            to,
            amount,
            fee,
            timestamp: unix_now(),
            signature: None,
        };

        tracing::debug!(from = %record.from, to = %record.to, amount, fee, "transaction built");
        Ok(record)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
