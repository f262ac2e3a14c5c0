//! Gamechain Ledger SDK
//!
//! A client SDK for integrating gamechain ledger functionality into games
//! and applications: wallet-backed payments, application-defined tokens,
//! and asynchronous ledger event polling.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────────┐
//!                    │                 GamechainSdk                   │
//!                    │                                                │
//!   send_payment ────┼─▶ tx::builder ──▶ tx::signer ──▶ tx::broadcast ┼──▶ POST /broadcast
//!                    │      (build)       (sign)        (bounded      │      (ledger)
//!                    │                                    retry)      │
//!                    │                                                │
//!   issue_token ─────┼─▶ token (local records, no network)            │
//!                    │                                                │
//!   start_event_ ────┼─▶ events::listener ◀── events::fetch ◀─────────┼──── GET /events
//!   listener         │      (polling task, ordered delivery)          │      (ledger)
//!                    │                                                │
//!                    │  ┌──────────────────────────────────────────┐  │
//!                    │  │        Cross-Cutting Concerns            │  │
//!                    │  │   config (TOML + validation)             │  │
//!                    │  │   wallet (keys, addresses, signing)      │  │
//!                    │  │   error (single taxonomy)                │  │
//!                    │  └──────────────────────────────────────────┘  │
//!                    └────────────────────────────────────────────────┘
//! ```
//!
//! The library never installs a global tracing subscriber; binaries and
//! tests choose their own.

// Core subsystems
pub mod events;
pub mod token;
pub mod tx;
pub mod wallet;

// Cross-cutting concerns
pub mod config;
pub mod error;

// Facade
pub mod sdk;

pub use config::{Network, SdkConfig};
pub use error::{SdkError, SdkResult};
pub use events::{Event, EventHandler};
pub use sdk::GamechainSdk;
pub use token::{TokenRecord, TokenTransferRecord};
pub use tx::{Receipt, TransactionRecord};
pub use wallet::{Address, Wallet};
