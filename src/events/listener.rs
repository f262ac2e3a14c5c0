//! Polling event listener.
//!
//! # States
//! ```text
//! Stopped → start() → Running → stop() → Stopped → start() → Running ...
//! ```
//!
//! # Design Decisions
//! - `start` is idempotent: a second start while running spawns nothing
//! - The loop is an independently scheduled task; `start` returns on spawn
//! - Batches are processed strictly sequentially, events in fetch order

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::error::SdkResult;
use crate::events::fetch::{Event, EventSource};

/// Callback invoked for every delivered event, in arrival order.
///
/// A handler error is logged and does not affect later events or cycles.
pub type EventHandler = Arc<dyn Fn(Event) -> SdkResult<()> + Send + Sync>;

/// Long-lived polling task delivering ledger events to a handler.
#[derive(Debug)]
pub struct EventListener<S: EventSource> {
    source: Arc<S>,
    poll_interval: Duration,
    running: Arc<AtomicBool>,
    shutdown: broadcast::Sender<()>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl<S: EventSource> EventListener<S> {
    pub fn new(source: S, poll_interval: Duration) -> Self {
        let (shutdown, _) = broadcast::channel(1);
        Self {
            source: Arc::new(source),
            poll_interval,
            running: Arc::new(AtomicBool::new(false)),
            shutdown,
            task: Mutex::new(None),
        }
    }

    /// Whether the polling loop is currently scheduled.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Start the polling loop on the current Tokio runtime.
    ///
    /// Returns as soon as the loop task is scheduled. Calling `start` while
    /// the listener is running is a no-op: exactly one loop exists at a
    /// time. Fetch and handler failures are logged and never escape the
    /// loop. Must be called from within a Tokio runtime.
    pub fn start(&self, handler: EventHandler) {
        if self.running.swap(true, Ordering::SeqCst) {
            tracing::debug!("event listener already running; start ignored");
            return;
        }

        let source = Arc::clone(&self.source);
        let running = Arc::clone(&self.running);
        let poll_interval = self.poll_interval;
        let mut shutdown = self.shutdown.subscribe();

        let task = tokio::spawn(async move {
            tracing::info!("event listener started");

            while running.load(Ordering::SeqCst) {
                match source.fetch_events().await {
                    Ok(events) => {
                        for event in events {
                            if let Err(e) = handler(event) {
                                tracing::error!(
                                    error = %e,
                                    "event handler failed; continuing with next event"
                                );
                            }
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "event fetch failed; treating as empty cycle");
                    }
                }

                tokio::select! {
                    _ = sleep(poll_interval) => {}
                    _ = shutdown.recv() => break,
                }
            }

            tracing::info!("event listener stopped");
        });

        let mut slot = self.task.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(task);
    }

    /// Stop the polling loop and wait for it to wind down.
    ///
    /// An in-flight fetch completes first; the inter-poll suspension is
    /// interrupted immediately, so no further fetch is issued. Idempotent.
    pub async fn stop(&self) {
        if !self.running.swap(false, Ordering::SeqCst) {
            return;
        }

        let _ = self.shutdown.send(());

        let task = {
            let mut slot = self.task.lock().unwrap_or_else(|e| e.into_inner());
            slot.take()
        };
        if let Some(task) = task {
            if let Err(e) = task.await {
                tracing::warn!(error = %e, "event listener task ended abnormally");
            }
        }
    }
}
