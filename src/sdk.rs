//! SDK facade composing wallet, transactions, tokens, and events.

use std::sync::Arc;

use crate::config::{validate_config, SdkConfig};
use crate::error::{SdkError, SdkResult};
use crate::events::{EventHandler, EventListener, HttpEventSource};
use crate::token::{TokenLedger, TokenRecord, TokenTransferRecord};
use crate::tx::{sign_transaction, Broadcaster, Receipt, TxBuilder, DEFAULT_FEE};
use crate::wallet::{Address, Wallet};

/// Client SDK for the gamechain ledger network.
///
/// One instance owns one wallet and one event listener. All operations can
/// be called from concurrent tasks; nothing serializes concurrent payments,
/// so broadcasts racing each other may reach the ledger out of submission
/// order.
#[derive(Debug)]
pub struct GamechainSdk {
    config: SdkConfig,
    wallet: Wallet,
    tx_builder: TxBuilder,
    broadcaster: Broadcaster,
    tokens: TokenLedger,
    listener: EventListener<HttpEventSource>,
}

impl GamechainSdk {
    /// Create an SDK instance with a freshly generated wallet.
    pub fn new(config: SdkConfig) -> SdkResult<Self> {
        validate(&config)?;
        Self::with_wallet(config, |network| Ok(Wallet::generate(network)))
    }

    /// Create an SDK instance from a hex-encoded private key.
    pub fn with_private_key(config: SdkConfig, private_key_hex: &str) -> SdkResult<Self> {
        validate(&config)?;
        Self::with_wallet(config, |network| Wallet::from_private_key(private_key_hex, network))
    }

    /// Create an SDK instance with the key from `GAMECHAIN_PRIVATE_KEY`.
    pub fn from_env(config: SdkConfig) -> SdkResult<Self> {
        validate(&config)?;
        Self::with_wallet(config, Wallet::from_env)
    }

    fn with_wallet(
        config: SdkConfig,
        make_wallet: impl FnOnce(crate::config::Network) -> SdkResult<Wallet>,
    ) -> SdkResult<Self> {
        let wallet = make_wallet(config.network)?;
        let broadcaster = Broadcaster::new(&config)?;
        let listener =
            EventListener::new(HttpEventSource::new(&config)?, config.event_poll_interval());
        let tx_builder = TxBuilder::new(wallet.address().clone());
        let tokens = TokenLedger::new(wallet.address().clone());

        tracing::info!(
            address = %wallet.address(),
            network = %config.network,
            endpoint = config.effective_endpoint(),
            "sdk initialized"
        );

        Ok(Self {
            config,
            wallet,
            tx_builder,
            broadcaster,
            tokens,
            listener,
        })
    }

    /// The wallet address payments are sent from.
    pub fn wallet_address(&self) -> &Address {
        self.wallet.address()
    }

    /// The active configuration.
    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Build, sign, and broadcast a payment with the default fee.
    ///
    /// Returns the ledger receipt, or the first fatal failure: an argument
    /// violation, a signing failure, or broadcast exhaustion after all
    /// retry attempts.
    pub async fn send_payment(&self, to: &str, amount: f64) -> SdkResult<Receipt> {
        self.send_payment_with_fee(to, amount, DEFAULT_FEE).await
    }

    /// Build, sign, and broadcast a payment with an explicit fee.
    pub async fn send_payment_with_fee(
        &self,
        to: &str,
        amount: f64,
        fee: f64,
    ) -> SdkResult<Receipt> {
        let record = self.tx_builder.build_with_fee(to, amount, fee)?;
        let signed = sign_transaction(&record, &self.wallet)?;
        self.broadcaster.broadcast(&signed).await
    }

    /// Issue a new token under this wallet. Local bookkeeping only.
    pub fn issue_token(&self, name: &str, total_supply: u64) -> SdkResult<TokenRecord> {
        self.tokens.issue(name, total_supply)
    }

    /// Record a token transfer from this wallet. Local bookkeeping only.
    pub fn transfer_token(
        &self,
        token: &TokenRecord,
        to: &str,
        amount: u64,
    ) -> SdkResult<TokenTransferRecord> {
        self.tokens.transfer(token, to, amount)
    }

    /// Start the event listener with a handler that logs each event in
    /// arrival order. No-op if already running.
    pub fn start_event_listener(&self) {
        let handler: EventHandler = Arc::new(|event: crate::events::Event| {
            tracing::info!(event = %serde_json::Value::Object(event), "ledger event received");
            Ok(())
        });
        self.start_event_listener_with(handler);
    }

    /// Start the event listener with a caller-supplied handler. No-op if
    /// already running.
    pub fn start_event_listener_with(&self, handler: EventHandler) {
        self.listener.start(handler);
    }

    /// Stop the event listener. Idempotent.
    pub async fn stop_event_listener(&self) {
        self.listener.stop().await;
    }

    /// Whether the event listener is currently running.
    pub fn event_listener_running(&self) -> bool {
        self.listener.is_running()
    }
}

fn validate(config: &SdkConfig) -> SdkResult<()> {
    validate_config(config).map_err(|errors| {
        SdkError::Config(
            errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        )
    })
}
