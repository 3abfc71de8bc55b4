//! Main EventDeskClient

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::model::Attendee;
use crate::model::AttendeeDraft;
use crate::model::Event;
use crate::model::EventDraft;

/// The events API operations the front end depends on.
#[async_trait]
pub trait EventApi: Send + Sync {
    /// Fetches every event.
    async fn list_events(&self) -> Result<Vec<Event>, ApiError>;

    /// Creates an event from a validated draft.
    async fn create_event(&self, draft: &EventDraft) -> Result<Event, ApiError>;

    /// Fetches the attendees of one event.
    async fn list_attendees(&self, event_id: i64) -> Result<Vec<Attendee>, ApiError>;

    /// Registers an attendee for an event.
    async fn register_attendee(
        &self,
        event_id: i64,
        draft: &AttendeeDraft,
    ) -> Result<Attendee, ApiError>;
}

/// How a non-2xx response is turned into a message.
#[derive(Debug, Clone, Copy)]
enum OnFailure {
    /// Always use this message.
    Fixed(&'static str),
    /// Use the body's `detail` string, else this message.
    Detail(&'static str),
}

/// HTTP client for the events REST API.
///
/// This client is cheap to clone (uses `Arc` internally).
///
/// # Example
///
/// ```ignore
/// use eventdesk_lib::EventDeskClient;
///
/// let client = EventDeskClient::builder()
///     .url("http://localhost:8000")
///     .timeout(Duration::from_secs(10))
///     .build()?;
///
/// let events = client.list_events().await?;
/// ```
#[derive(Clone)]
pub struct EventDeskClient {
    inner: Arc<EventDeskClientInner>,
}

struct EventDeskClientInner {
    base_url: Url,
    http_client: Client,
    timeout: Option<Duration>,
}

impl EventDeskClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> EventDeskClientBuilder<Missing> {
        EventDeskClientBuilder::new()
    }

    /// Builds a client from loaded configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut builder = Self::builder().url(config.api_url.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    /// Returns the base URL of the API.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.inner
            .base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(format!("{path}: {e}")))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        mut request: RequestBuilder,
        on_failure: OnFailure,
    ) -> Result<T, ApiError> {
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| self.classify(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;
        debug!("HTTP {} ({} bytes)", status.as_u16(), body.len());

        if !status.is_success() {
            return Err(ApiError::http(
                status.as_u16(),
                failure_message(&body, on_failure),
            ));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::parse_with_body(e.to_string(), body))
    }

    fn classify(&self, error: reqwest::Error) -> ApiError {
        match self.inner.timeout {
            Some(timeout) if error.is_timeout() => ApiError::Timeout(timeout),
            _ => ApiError::Network(error),
        }
    }
}

#[async_trait]
impl EventApi for EventDeskClient {
    async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        let url = self.endpoint("events")?;
        debug!("GET {url}");
        let request = self.inner.http_client.get(url);
        self.send(request, OnFailure::Fixed("Failed to fetch events"))
            .await
    }

    async fn create_event(&self, draft: &EventDraft) -> Result<Event, ApiError> {
        let url = self.endpoint("events")?;
        debug!("POST {url}");
        let request = self.inner.http_client.post(url).json(draft);
        self.send(request, OnFailure::Detail("Failed to create event"))
            .await
    }

    async fn list_attendees(&self, event_id: i64) -> Result<Vec<Attendee>, ApiError> {
        let url = self.endpoint(&format!("events/{event_id}/attendees"))?;
        debug!("GET {url}");
        let request = self.inner.http_client.get(url);
        self.send(request, OnFailure::Fixed("Failed to fetch attendees"))
            .await
    }

    async fn register_attendee(
        &self,
        event_id: i64,
        draft: &AttendeeDraft,
    ) -> Result<Attendee, ApiError> {
        let url = self.endpoint(&format!("events/{event_id}/register"))?;
        debug!("POST {url}");
        let request = self.inner.http_client.post(url).json(draft);
        self.send(request, OnFailure::Detail("Failed to register attendee"))
            .await
    }
}

fn failure_message(body: &str, on_failure: OnFailure) -> String {
    match on_failure {
        OnFailure::Fixed(message) => message.to_string(),
        OnFailure::Detail(fallback) => serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("detail")
                    .and_then(|d| d.as_str())
                    .filter(|d| !d.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| fallback.to_string()),
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing an [`EventDeskClient`].
///
/// The base URL is required and enforced at compile time.
pub struct EventDeskClientBuilder<U> {
    url: U,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl EventDeskClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the API base URL.
    pub fn url(self, url: impl Into<String>) -> EventDeskClientBuilder<Set<String>> {
        EventDeskClientBuilder {
            url: Set(url.into()),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl Default for EventDeskClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> EventDeskClientBuilder<U> {
    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// Ignored when a custom HTTP client is supplied.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl EventDeskClientBuilder<Set<String>> {
    /// Builds the [`EventDeskClient`].
    pub fn build(self) -> Result<EventDeskClient, ApiError> {
        let base_url = normalize_base(&self.url.0)?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(EventDeskClient {
            inner: Arc::new(EventDeskClientInner {
                base_url,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}

// Relative joins replace the last path segment unless the base ends in '/'.
fn normalize_base(raw: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidUrl(raw.to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> EventDeskClient {
        EventDeskClient::builder().url(base).build().unwrap()
    }

    #[test]
    fn test_endpoints() {
        let c = client("http://localhost:8000");
        assert_eq!(
            c.endpoint("events").unwrap().as_str(),
            "http://localhost:8000/events"
        );
        assert_eq!(
            c.endpoint("events/7/register").unwrap().as_str(),
            "http://localhost:8000/events/7/register"
        );
    }

    #[test]
    fn test_endpoints_keep_base_path() {
        let c = client("https://example.com/api");
        assert_eq!(c.base_url().as_str(), "https://example.com/api/");
        assert_eq!(
            c.endpoint("events/3/attendees").unwrap().as_str(),
            "https://example.com/api/events/3/attendees"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = EventDeskClient::builder().url("localhost:8000 nope").build();
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_detail_message_surfaces() {
        let body = r#"{"detail": "Event is at full capacity"}"#;
        assert_eq!(
            failure_message(body, OnFailure::Detail("Failed to register attendee")),
            "Event is at full capacity"
        );
    }

    #[test]
    fn test_detail_fallbacks() {
        let fallback = OnFailure::Detail("Failed to create event");
        assert_eq!(failure_message("", fallback), "Failed to create event");
        assert_eq!(failure_message("<html>", fallback), "Failed to create event");
        // Request validation errors carry a list, not a string.
        let body = r#"{"detail": [{"loc": ["body", "name"], "msg": "field required"}]}"#;
        assert_eq!(failure_message(body, fallback), "Failed to create event");
    }

    #[test]
    fn test_fixed_message_ignores_body() {
        let body = r#"{"detail": "Event not found"}"#;
        assert_eq!(
            failure_message(body, OnFailure::Fixed("Failed to fetch attendees")),
            "Failed to fetch attendees"
        );
    }
}
