//! Crate-wide error taxonomy.
//!
//! # Propagation Policy
//! - `InvalidArgument` and `Signing` surface synchronously to the caller
//! - `BroadcastExhausted` surfaces only after every attempt is spent
//! - `Fetch` and `Handler` never escape the event listener loop; they are
//!   logged and the loop continues

use thiserror::Error;

/// Errors surfaced by the SDK.
#[derive(Debug, Error)]
pub enum SdkError {
    /// A caller-supplied argument violated a constraint. Fails fast, never retried.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The signing collaborator failed. Fatal to the calling operation.
    #[error("signing failed: {0}")]
    Signing(String),

    /// Every broadcast attempt failed; carries the last observed cause.
    #[error("broadcast failed after {attempts} attempt(s): {last_error}")]
    BroadcastExhausted { attempts: u32, last_error: String },

    /// An event poll cycle failed. Recoverable; the listener treats it as an
    /// empty batch.
    #[error("event fetch failed: {0}")]
    Fetch(String),

    /// A registered event handler failed. Recoverable; later events in the
    /// batch are still delivered.
    #[error("event handler failed: {0}")]
    Handler(String),

    /// Configuration could not be loaded, parsed, or validated.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;
