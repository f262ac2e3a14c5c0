//! Signature attachment.
//!
//! The signing collaborator sits behind [`TransactionSigner`] so it can be
//! swapped out (remote signing service, hardware key, test stub). A signing
//! failure is fatal to the calling operation and is never retried.

use crate::error::{SdkError, SdkResult};
use crate::tx::builder::TransactionRecord;
use crate::wallet::Wallet;

/// Signs opaque payload bytes on behalf of a wallet key.
pub trait TransactionSigner {
    fn sign_payload(&self, payload: &[u8]) -> SdkResult<Vec<u8>>;
}

impl TransactionSigner for Wallet {
    fn sign_payload(&self, payload: &[u8]) -> SdkResult<Vec<u8>> {
        Ok(self.sign(payload))
    }
}

/// Attach a signature to `record`, returning a new record with every other
/// field unchanged.
pub fn sign_transaction(
    record: &TransactionRecord,
    signer: &impl TransactionSigner,
) -> SdkResult<TransactionRecord> {
    let payload = record.signing_payload()?;
    let signature = signer.sign_payload(&payload)?;

    let mut signed = record.clone();
    signed.signature = Some(hex::encode(signature));

    tracing::debug!(from = %signed.from, to = %signed.to, "transaction signed");
    Ok(signed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Network;
    use crate::tx::builder::TxBuilder;

    struct FailingSigner;

    impl TransactionSigner for FailingSigner {
        fn sign_payload(&self, _payload: &[u8]) -> SdkResult<Vec<u8>> {
            Err(SdkError::Signing("key unavailable".to_string()))
        }
    }

    fn unsigned_record(wallet: &Wallet) -> TransactionRecord {
        TxBuilder::new(wallet.address().clone())
            .build("GCrecipient", 0.5)
            .unwrap()
    }

    #[test]
    fn test_sign_attaches_signature_and_preserves_fields() {
        let wallet = Wallet::generate(Network::Mainnet);
        let record = unsigned_record(&wallet);
        let signed = sign_transaction(&record, &wallet).unwrap();

        assert!(signed.is_signed());
        assert_eq!(signed.from, record.from);
        assert_eq!(signed.to, record.to);
        assert_eq!(signed.amount, record.amount);
        assert_eq!(signed.fee, record.fee);
        assert_eq!(signed.timestamp, record.timestamp);
    }

    #[test]
    fn test_signature_is_hex_encoded_ed25519() {
        let wallet = Wallet::generate(Network::Mainnet);
        let signed = sign_transaction(&unsigned_record(&wallet), &wallet).unwrap();

        let bytes = hex::decode(signed.signature.unwrap()).unwrap();
        assert_eq!(bytes.len(), 64);
    }

    #[test]
    fn test_signer_failure_propagates() {
        let wallet = Wallet::generate(Network::Mainnet);
        let record = unsigned_record(&wallet);

        let err = sign_transaction(&record, &FailingSigner).unwrap_err();
        assert!(matches!(err, SdkError::Signing(_)));
        // The input record is untouched.
        assert!(!record.is_signed());
    }
}
