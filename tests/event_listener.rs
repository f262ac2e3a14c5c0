//! End-to-end event listener tests against a mock ledger endpoint.

mod common;

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use gamechain_sdk::{Event, EventHandler, GamechainSdk, SdkConfig};

fn listener_config(addr: SocketAddr) -> SdkConfig {
    SdkConfig {
        endpoint_url: format!("http://{addr}"),
        event_poll_interval_secs: 0.05,
        request_timeout_secs: 2,
        ..SdkConfig::default()
    }
}

fn collecting_handler() -> (EventHandler, Arc<Mutex<Vec<String>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let handler: EventHandler = Arc::new(move |event: Event| {
        sink.lock()
            .unwrap()
            .push(event["id"].as_str().unwrap_or_default().to_string());
        Ok(())
    });
    (handler, seen)
}

#[tokio::test]
async fn test_events_flow_from_endpoint_to_handler_in_order() {
    let calls = Arc::new(AtomicU32::new(0));
    let cc = calls.clone();
    let addr = common::start_mock_ledger(move || {
        let cc = cc.clone();
        async move {
            let body = match cc.fetch_add(1, Ordering::SeqCst) {
                0 => r#"[{"id":"e1"},{"id":"e2"}]"#,
                1 => "[]",
                2 => r#"[{"id":"e3"}]"#,
                _ => "[]",
            };
            (200, body.to_string())
        }
    })
    .await;

    let sdk = GamechainSdk::new(listener_config(addr)).unwrap();
    let (handler, seen) = collecting_handler();

    sdk.start_event_listener_with(handler);
    assert!(sdk.event_listener_running());

    tokio::time::sleep(Duration::from_millis(400)).await;
    sdk.stop_event_listener().await;
    assert!(!sdk.event_listener_running());

    assert_eq!(*seen.lock().unwrap(), vec!["e1", "e2", "e3"]);
}

#[tokio::test]
async fn test_listener_survives_fetch_failures() {
    let calls = Arc::new(AtomicU32::new(0));
    let cc = calls.clone();
    let addr = common::start_mock_ledger(move || {
        let cc = cc.clone();
        async move {
            match cc.fetch_add(1, Ordering::SeqCst) {
                0 => (200, r#"[{"id":"e1"}]"#.to_string()),
                1 => (500, r#"{"error":"boom"}"#.to_string()),
                2 => (200, r#"[{"id":"e3"}]"#.to_string()),
                _ => (200, "[]".to_string()),
            }
        }
    })
    .await;

    let sdk = GamechainSdk::new(listener_config(addr)).unwrap();
    let (handler, seen) = collecting_handler();

    sdk.start_event_listener_with(handler);
    tokio::time::sleep(Duration::from_millis(400)).await;

    assert!(sdk.event_listener_running(), "a failed cycle must not stop the loop");
    sdk.stop_event_listener().await;

    assert_eq!(*seen.lock().unwrap(), vec!["e1", "e3"]);
}

#[tokio::test]
async fn test_double_start_keeps_a_single_polling_loop() {
    let calls = Arc::new(AtomicU32::new(0));
    let cc = calls.clone();
    let addr = common::start_mock_ledger(move || {
        let cc = cc.clone();
        async move {
            cc.fetch_add(1, Ordering::SeqCst);
            (200, "[]".to_string())
        }
    })
    .await;

    let mut config = listener_config(addr);
    config.event_poll_interval_secs = 0.1;
    let sdk = GamechainSdk::new(config).unwrap();
    let (handler, _) = collecting_handler();

    sdk.start_event_listener_with(Arc::clone(&handler));
    sdk.start_event_listener_with(handler);

    tokio::time::sleep(Duration::from_millis(350)).await;
    sdk.stop_event_listener().await;

    // A single loop polls ~4 times in 350ms at a 100ms interval; a second
    // loop would roughly double that.
    let fetches = calls.load(Ordering::SeqCst);
    assert!((2..=6).contains(&fetches), "got {fetches} fetches");
}

#[tokio::test]
async fn test_default_handler_listener_starts_and_stops() {
    let addr = common::start_mock_ledger(|| async { (200, r#"[{"kind":"tick"}]"#.to_string()) }).await;

    let sdk = GamechainSdk::new(listener_config(addr)).unwrap();

    sdk.start_event_listener();
    assert!(sdk.event_listener_running());
    tokio::time::sleep(Duration::from_millis(100)).await;

    sdk.stop_event_listener().await;
    assert!(!sdk.event_listener_running());

    // Stopping again is a no-op.
    sdk.stop_event_listener().await;
}
