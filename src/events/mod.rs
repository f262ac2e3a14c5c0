//! Ledger event subsystem.
//!
//! # Data Flow
//! ```text
//! remote endpoint (GET /events)
//!     → fetch.rs (EventSource: one batch per poll cycle)
//!     → listener.rs (ordered delivery to the registered handler)
//! ```
//!
//! # Design Decisions
//! - Fetch and handler failures are logged and never escape the loop
//! - One polling loop per listener, enforced across concurrent starts
//! - stop() interrupts the inter-poll suspension, not an in-flight fetch

pub mod fetch;
pub mod listener;

pub use fetch::{Event, EventSource, HttpEventSource};
pub use listener::{EventHandler, EventListener};
