use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::error::{is_retryable_status, Error, Result};
use crate::queryset::Page;
use crate::resource::ResourceKind;
use crate::types::JsonValue;

// ============================================================================
// Constants
// ============================================================================

/// Base URL of the public catalog service.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_millis(100);
const DEFAULT_MAX_BACKOFF: Duration = Duration::from_secs(10);

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL that relative resource paths are joined onto.
    pub base_url: String,
    /// Timeout applied to each request.
    pub timeout: Duration,
    /// Maximum number of retries for transient failures.
    pub max_retries: u32,
    /// Initial backoff delay between retries.
    pub initial_backoff: Duration,
    /// Upper bound on the backoff delay.
    pub max_backoff: Duration,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            initial_backoff: DEFAULT_INITIAL_BACKOFF,
            max_backoff: DEFAULT_MAX_BACKOFF,
            user_agent: format!("holocron/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ApiClientConfig {
    /// Creates a builder for custom configuration.
    pub fn builder() -> ApiClientConfigBuilder {
        ApiClientConfigBuilder::default()
    }
}

/// Builder for [`ApiClientConfig`].
#[derive(Debug, Default)]
pub struct ApiClientConfigBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    max_retries: Option<u32>,
    initial_backoff: Option<Duration>,
    max_backoff: Option<Duration>,
    user_agent: Option<String>,
}

impl ApiClientConfigBuilder {
    /// Sets the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the maximum number of retries.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Sets the initial and maximum backoff delays.
    pub fn backoff(mut self, initial: Duration, max: Duration) -> Self {
        self.initial_backoff = Some(initial);
        self.max_backoff = Some(max);
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds the configuration, filling unset fields with defaults.
    pub fn build(self) -> ApiClientConfig {
        let defaults = ApiClientConfig::default();
        ApiClientConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            timeout: self.timeout.unwrap_or(defaults.timeout),
            max_retries: self.max_retries.unwrap_or(defaults.max_retries),
            initial_backoff: self.initial_backoff.unwrap_or(defaults.initial_backoff),
            max_backoff: self.max_backoff.unwrap_or(defaults.max_backoff),
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
        }
    }
}

// ============================================================================
// Response
// ============================================================================

/// Raw outcome of a single GET, status preserved for the caller to judge.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    /// Returns `true` if the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// ============================================================================
// Client
// ============================================================================

/// HTTP client for the catalog service.
///
/// Wraps a connection-pooled [`reqwest::Client`] and retries transient
/// failures (connect errors, timeouts, and retryable status codes) with
/// exponential backoff. Cloning is cheap and shares the pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    config: ApiClientConfig,
}

impl ApiClient {
    /// Creates a client with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ApiClientConfig::default())
    }

    /// Creates a client with a custom configuration.
    pub fn with_config(config: ApiClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    /// Fetches and decodes the first list page for a resource kind.
    pub async fn get_page(&self, kind: ResourceKind) -> Result<Page> {
        let url = self.build_url(&format!("{}/", kind.endpoint()));
        let page: Page = self.get_json(&url).await?;
        debug!(
            kind = %kind,
            count = page.count,
            buffered = page.results.len(),
            "fetched first page"
        );
        Ok(page)
    }

    /// Fetches a single resource by its numeric id.
    pub async fn get_by_id(&self, kind: ResourceKind, id: u64) -> Result<JsonValue> {
        let url = self.build_url(&format!("{}/{}/", kind.endpoint(), id));
        self.get_json(&url).await
    }

    /// Performs a GET against an absolute URL and returns the raw response.
    ///
    /// Non-success statuses are returned, not turned into errors; callers
    /// chasing pagination links decide what a given status means. Only
    /// transport failures that survive the retry budget become errors.
    pub async fn get_url(&self, url: &str) -> Result<HttpResponse> {
        let parsed = Url::parse(url)?;
        self.execute(parsed).await
    }

    /// Joins a path onto the configured base URL.
    ///
    /// Absolute URLs pass through untouched so pagination links from the
    /// service can be followed directly.
    pub fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.config.base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        }
    }

    /// GET a URL, require a success status, and decode the body as JSON.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let parsed = Url::parse(url)?;
        let response = self.execute(parsed).await?;
        if !response.is_success() {
            return Err(Error::http_status(response.status, response.body));
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Sends a GET with retry on transient failures, returning the final
    /// status and body.
    async fn execute(&self, url: Url) -> Result<HttpResponse> {
        let mut attempt = 0;
        loop {
            match self.client.get(url.clone()).send().await {
                Ok(response) => {
                    let status = response.status().as_u16();
                    if is_retryable_status(status) && attempt < self.config.max_retries {
                        let delay = self.backoff_delay(attempt);
                        warn!(
                            %url,
                            status,
                            attempt = attempt + 1,
                            delay_ms = delay.as_millis() as u64,
                            "retryable status, backing off"
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    let body = response.text().await?;
                    debug!(%url, status, "GET completed");
                    return Ok(HttpResponse { status, body });
                }
                Err(err) => {
                    let transient = err.is_connect() || err.is_timeout();
                    if transient && attempt < self.config.max_retries {
                        let delay = self.backoff_delay(attempt);
                        warn!(
                            %url,
                            error = %err,
                            attempt = attempt + 1,
                            delay_ms = delay.as_millis() as u64,
                            "transient error, backing off"
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(Error::Http(err));
                }
            }
        }
    }

    /// Exponential backoff capped at the configured maximum.
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let exp = self.config.initial_backoff.saturating_mul(2u32.saturating_pow(attempt));
        exp.min(self.config.max_backoff)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
