//! Wallet management and payload signing.
//!
//! # Security
//! - Private keys are loaded from an explicit hex string or an environment
//!   variable, never from config files
//! - Keys are never logged or serialized
//! - The signing key is immutable after construction and shared read-only

use ed25519_dalek::{Signer, SigningKey, VerifyingKey, SECRET_KEY_LENGTH};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::Network;
use crate::error::{SdkError, SdkResult};

/// Environment variable name for the private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "GAMECHAIN_PRIVATE_KEY";

/// A ledger address.
///
/// Guaranteed non-empty; otherwise opaque to the SDK.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Wrap an address string. Fails on an empty string.
    pub fn new(address: impl Into<String>) -> SdkResult<Self> {
        let address = address.into();
        if address.is_empty() {
            return Err(SdkError::InvalidArgument("address must not be empty".to_string()));
        }
        Ok(Self(address))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key pair plus derived address identifying the transaction sender.
pub struct Wallet {
    signing_key: SigningKey,
    address: Address,
    network: Network,
}

impl Wallet {
    /// Generate a fresh wallet with a random key pair.
    pub fn generate(network: Network) -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        let address = derive_address(&signing_key.verifying_key(), network);

        tracing::info!(address = %address, %network, "wallet initialized");

        Self {
            signing_key,
            address,
            network,
        }
    }

    /// Create a wallet from a hex-encoded private key (with or without 0x prefix).
    pub fn from_private_key(private_key_hex: &str, network: Network) -> SdkResult<Self> {
        let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);

        let bytes = hex::decode(key_hex)
            .map_err(|e| SdkError::InvalidArgument(format!("invalid private key hex: {e}")))?;
        let bytes: [u8; SECRET_KEY_LENGTH] = bytes.try_into().map_err(|_| {
            SdkError::InvalidArgument(format!("private key must be {SECRET_KEY_LENGTH} bytes"))
        })?;

        let signing_key = SigningKey::from_bytes(&bytes);
        let address = derive_address(&signing_key.verifying_key(), network);

        tracing::info!(address = %address, %network, "wallet initialized");

        Ok(Self {
            signing_key,
            address,
            network,
        })
    }

    /// Load the wallet key from `GAMECHAIN_PRIVATE_KEY`.
    pub fn from_env(network: Network) -> SdkResult<Self> {
        let private_key = std::env::var(PRIVATE_KEY_ENV_VAR).map_err(|_| {
            SdkError::Config(format!("environment variable {PRIVATE_KEY_ENV_VAR} not set"))
        })?;

        Self::from_private_key(&private_key, network)
    }

    /// The wallet's ledger address.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// The network this wallet derives addresses for.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Sign arbitrary payload bytes with the wallet key.
    pub fn sign(&self, payload: &[u8]) -> Vec<u8> {
        self.signing_key.sign(payload).to_bytes().to_vec()
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address)
            .field("network", &self.network)
            .finish_non_exhaustive()
    }
}

/// Derive the ledger address for a verifying key: the network prefix plus a
/// truncated hex digest of the key bytes.
fn derive_address(key: &VerifyingKey, network: Network) -> Address {
    let digest = Sha256::digest(key.as_bytes());
    let digest_hex = hex::encode(digest);
    Address(format!("{}{}", network.address_prefix(), &digest_hex[..40]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_PRIVATE_KEY: &str =
        "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";

    #[test]
    fn test_wallet_from_private_key() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, Network::Mainnet).unwrap();
        assert!(wallet.address().as_str().starts_with("GC"));
        assert_eq!(wallet.address().as_str().len(), 42);
    }

    #[test]
    fn test_wallet_with_0x_prefix() {
        let plain = Wallet::from_private_key(TEST_PRIVATE_KEY, Network::Mainnet).unwrap();
        let prefixed =
            Wallet::from_private_key(&format!("0x{}", TEST_PRIVATE_KEY), Network::Mainnet).unwrap();
        assert_eq!(plain.address(), prefixed.address());
    }

    #[test]
    fn test_address_derivation_is_deterministic() {
        let a = Wallet::from_private_key(TEST_PRIVATE_KEY, Network::Mainnet).unwrap();
        let b = Wallet::from_private_key(TEST_PRIVATE_KEY, Network::Mainnet).unwrap();
        assert_eq!(a.address(), b.address());
    }

    #[test]
    fn test_testnet_prefix() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, Network::Testnet).unwrap();
        assert!(wallet.address().as_str().starts_with("gc"));
    }

    #[test]
    fn test_generated_wallets_are_distinct() {
        let a = Wallet::generate(Network::Mainnet);
        let b = Wallet::generate(Network::Mainnet);
        assert_ne!(a.address(), b.address());
    }

    #[test]
    fn test_invalid_private_key() {
        let result = Wallet::from_private_key("not-hex", Network::Mainnet);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("invalid private key"));

        let result = Wallet::from_private_key("abcd", Network::Mainnet);
        assert!(result.unwrap_err().to_string().contains("32 bytes"));
    }

    #[test]
    fn test_sign_produces_ed25519_signature() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, Network::Mainnet).unwrap();
        let signature = wallet.sign(b"payload");
        assert_eq!(signature.len(), 64);
        // Same payload, same key, same signature (ed25519 is deterministic).
        assert_eq!(signature, wallet.sign(b"payload"));
    }

    #[test]
    fn test_empty_address_rejected() {
        assert!(Address::new("").is_err());
        assert!(Address::new("GCabc").is_ok());
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, Network::Mainnet).unwrap();
        let debug = format!("{:?}", wallet);
        assert!(!debug.contains(TEST_PRIVATE_KEY));
        assert!(debug.contains(wallet.address().as_str()));
    }
}
