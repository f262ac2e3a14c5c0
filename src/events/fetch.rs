//! Event fetching.

use futures_util::future::BoxFuture;
use url::Url;

use crate::config::SdkConfig;
use crate::error::{SdkError, SdkResult};

/// A discrete ledger-originated record. Opaque to the SDK.
pub type Event = serde_json::Map<String, serde_json::Value>;

/// Source of ledger events, one batch per poll cycle.
///
/// An empty batch is a normal outcome, not an error. Implementations must
/// bound each fetch (e.g. with a request timeout) so a single cycle cannot
/// stall the polling loop indefinitely.
pub trait EventSource: Send + Sync + 'static {
    fn fetch_events(&self) -> BoxFuture<'_, SdkResult<Vec<Event>>>;
}

/// Fetches events over HTTP from `{endpoint}/events`.
#[derive(Debug)]
pub struct HttpEventSource {
    http: reqwest::Client,
    events_url: Url,
}

impl HttpEventSource {
    /// Create an event source from a validated configuration.
    pub fn new(config: &SdkConfig) -> SdkResult<Self> {
        let base = config.effective_endpoint().trim_end_matches('/');
        let events_url: Url = format!("{base}/events")
            .parse()
            .map_err(|e| SdkError::Config(format!("invalid endpoint URL '{base}': {e}")))?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| SdkError::Config(format!("HTTP client construction failed: {e}")))?;

        Ok(Self { http, events_url })
    }

    async fn fetch(&self) -> SdkResult<Vec<Event>> {
        let response = self
            .http
            .get(self.events_url.clone())
            .send()
            .await
            .map_err(|e| SdkError::Fetch(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SdkError::Fetch(format!("endpoint returned status {status}")));
        }

        response
            .json::<Vec<Event>>()
            .await
            .map_err(|e| SdkError::Fetch(format!("malformed event batch: {e}")))
    }
}

impl EventSource for HttpEventSource {
    fn fetch_events(&self) -> BoxFuture<'_, SdkResult<Vec<Event>>> {
        Box::pin(self.fetch())
    }
}
