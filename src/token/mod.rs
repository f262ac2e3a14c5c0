//! Token issuance and transfer records.
//!
//! Local bookkeeping only: records are constructed and handed back to the
//! caller with no network interaction and no cumulative supply tracking.
//! Each call is independent.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{SdkError, SdkResult};
use crate::wallet::Address;

/// A token issuance record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub issuer: Address,
    pub token_name: String,
    pub total_supply: u64,
    /// Seconds since the Unix epoch at issuance.
    pub timestamp: u64,
}

/// A token transfer record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenTransferRecord {
    pub token: TokenRecord,
    pub from: Address,
    pub to: Address,
    pub amount: u64,
    /// Seconds since the Unix epoch at transfer.
    pub timestamp: u64,
}

/// Issues and transfers tokens on behalf of one wallet address.
#[derive(Debug)]
pub struct TokenLedger {
    issuer: Address,
}

impl TokenLedger {
    pub fn new(issuer: Address) -> Self {
        Self { issuer }
    }

    /// Issue a new token.
    ///
    /// `name` must be non-empty and `total_supply` positive.
    pub fn issue(&self, name: &str, total_supply: u64) -> SdkResult<TokenRecord> {
        if name.trim().is_empty() {
            return Err(SdkError::InvalidArgument("token name must not be empty".to_string()));
        }
        if total_supply == 0 {
            return Err(SdkError::InvalidArgument("total supply must be positive".to_string()));
        }

        let record = TokenRecord {
            issuer: self.issuer.clone(),
            token_name: name.to_string(),
            total_supply,
            timestamp: unix_now(),
        };

        tracing::debug!(token = %record.token_name, total_supply, "token issued");
        Ok(record)
    }

    /// Record a transfer of `amount` units of `token` to `to`.
    ///
    /// `amount` must be positive and no greater than the token's total
    /// supply. No running balance is kept.
    pub fn transfer(
        &self,
        token: &TokenRecord,
        to: &str,
        amount: u64,
    ) -> SdkResult<TokenTransferRecord> {
        let to = Address::new(to)?;
        if amount == 0 {
            return Err(SdkError::InvalidArgument("transfer amount must be positive".to_string()));
        }
        if amount > token.total_supply {
            return Err(SdkError::InvalidArgument(format!(
                "transfer amount {amount} exceeds total supply {}",
                token.total_supply
            )));
        }

        let record = TokenTransferRecord {
            token: token.clone(),
            from: self.issuer.clone(),
            to,
            amount,
            timestamp: unix_now(),
        };

        tracing::debug!(
            token = %record.token.token_name,
            to = %record.to,
            amount,
            "token transfer recorded"
        );
        Ok(record)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
