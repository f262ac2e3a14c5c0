//! Transaction lifecycle subsystem.
//!
//! # Data Flow
//! ```text
//! wallet address + recipient + amount
//!     → builder.rs (unsigned TransactionRecord)
//!     → signer.rs (attach signature via TransactionSigner)
//!     → broadcast.rs (POST to the ledger with bounded retry)
//! ```
//!
//! # Design Decisions
//! - Records are immutable once signed
//! - Signing failures are fatal and never retried
//! - Retry applies to broadcast only: fixed delay, attempt-bounded

pub mod broadcast;
pub mod builder;
pub mod signer;

pub use broadcast::{Broadcaster, Receipt};
pub use builder::{TransactionRecord, TxBuilder, DEFAULT_FEE};
pub use signer::{sign_transaction, TransactionSigner};
