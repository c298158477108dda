//! # Store Client
//!
//! Talks to the hosted database through its REST interface (`/rest/v1/<table>`).
//! Only what the registration form needs is implemented: inserting rows.
//!
//! ## Key Features
//! - **Builder Pattern**: URL, API key and timeout validated once, up front.
//! - **Verbatim errors**: rejected inserts surface the store's own `message`.
//! - **Seam for tests**: callers depend on [`TableStore`], not on HTTP.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cp3_store::{Store, StoreError, TableStore};
//! use serde_json::json;
//!
//! # async fn run() -> Result<(), StoreError> {
//! let store = Store::builder()
//!     .url("https://project.supabase.co")
//!     .api_key("public-anon-key")
//!     .init()?;
//!
//! store.insert("cp3pro", &[json!({ "nombre": "Ana" })]).await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod rest;

pub use crate::error::{StoreError, StoreErrorExt};

use cp3_domain::config::StoreConfig;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Url};
use serde::Serialize;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

const REST_PATH: &str = "rest/v1/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Row sink the registration flow writes to.
///
/// [`Store`] is the production implementation; tests plug in recording fakes.
pub trait TableStore: Send + Sync {
    /// Inserts `rows` into `table` in a single request.
    fn insert<T>(
        &self,
        table: &str,
        rows: &[T],
    ) -> impl Future<Output = Result<(), StoreError>> + Send
    where
        T: Serialize + Sync;
}

struct StoreInner {
    client: Client,
    rest_url: Url,
}

impl fmt::Debug for StoreInner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The client carries the API key in its default headers; keep it out of logs.
        f.debug_struct("StoreInner").field("rest_url", &self.rest_url.as_str()).finish_non_exhaustive()
    }
}

/// REST client handle. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl Store {
    /// Creates a new [`StoreBuilder`].
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    /// Base URL of the REST interface (`<project>/rest/v1/`).
    #[must_use]
    pub fn rest_url(&self) -> &Url {
        &self.inner.rest_url
    }

    fn table_url(&self, table: &str) -> Result<Url, StoreError> {
        if table.is_empty() || table.contains(['/', '?', '#']) {
            return Err(StoreError::Validation {
                message: format!("Invalid table name '{table}'").into(),
                context: None,
            });
        }

        self.inner.rest_url.join(table).map_err(|e| StoreError::Validation {
            message: e.to_string().into(),
            context: Some(format!("Building URL for table '{table}'").into()),
        })
    }
}

impl TableStore for Store {
    #[instrument(skip(self, rows), fields(table = table, rows = rows.len()))]
    async fn insert<T>(&self, table: &str, rows: &[T]) -> Result<(), StoreError>
    where
        T: Serialize + Sync,
    {
        let endpoint = self.table_url(table)?;
        let body = serde_json::to_vec(rows).context("Encoding rows")?;

        let response = self
            .inner
            .client
            .post(endpoint)
            .header(rest::PREFER, rest::RETURN_MINIMAL)
            .body(body)
            .send()
            .await
            .context("Sending insert")?;

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "Insert accepted");
            return Ok(());
        }

        let payload = response.bytes().await.context("Reading error response")?;
        let err = rest::rejection(status, &payload);
        warn!(status = status.as_u16(), error = %err, "Insert rejected");
        Err(err)
    }
}

/// A fluent builder for the [`Store`] client.
#[must_use = "builders do nothing unless you call .init()"]
#[derive(Default)]
pub struct StoreBuilder {
    url: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl fmt::Debug for StoreBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreBuilder")
            .field("url", &self.url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl StoreBuilder {
    /// Creates a new [`StoreBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies URL, key and timeout from the `[store]` config section.
    pub fn config(self, config: &StoreConfig) -> Self {
        self.url(&config.url)
            .api_key(&config.api_key)
            .timeout(Duration::from_secs(config.timeout_seconds))
    }

    /// Project URL, without the `/rest/v1` suffix.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Public API key of the project.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Per-request timeout. Defaults to 30 seconds; zero keeps the default.
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validates the parameters and builds the HTTP client.
    ///
    /// # Errors
    /// * [`StoreError::Validation`] if the URL or key is missing, the URL is not
    ///   `http(s)`, or the key cannot be sent as a header.
    /// * [`StoreError::Transport`] if the HTTP client cannot be constructed.
    pub fn init(self) -> Result<Store, StoreError> {
        let url = self.url.filter(|u| !u.trim().is_empty()).ok_or(StoreError::Validation {
            message: "URL is required".into(),
            context: None,
        })?;
        let api_key =
            self.api_key.filter(|k| !k.trim().is_empty()).ok_or(StoreError::Validation {
                message: "API key is required".into(),
                context: None,
            })?;

        let rest_url = rest_base(&url)?;
        let headers = default_headers(&api_key)?;
        let timeout = self.timeout.filter(|t| !t.is_zero()).unwrap_or(DEFAULT_TIMEOUT);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .context("Building HTTP client")?;

        debug!(rest_url = %rest_url, ?timeout, "Store client ready");

        Ok(Store { inner: Arc::new(StoreInner { client, rest_url }) })
    }
}

fn rest_base(url: &str) -> Result<Url, StoreError> {
    let mut base = Url::parse(url).map_err(|e| StoreError::Validation {
        message: e.to_string().into(),
        context: Some(format!("Parsing store URL '{url}'").into()),
    })?;

    if !matches!(base.scheme(), "http" | "https") {
        return Err(StoreError::Validation {
            message: format!("Unsupported scheme '{}'", base.scheme()).into(),
            context: Some("Store URL must be http or https".into()),
        });
    }

    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(REST_PATH).map_err(|e| StoreError::Validation {
        message: e.to_string().into(),
        context: Some("Appending REST path".into()),
    })
}

fn default_headers(api_key: &str) -> Result<HeaderMap, StoreError> {
    let invalid = |_| StoreError::Validation {
        message: "API key contains characters not allowed in headers".into(),
        context: None,
    };

    let mut key = HeaderValue::from_str(api_key).map_err(invalid)?;
    key.set_sensitive(true);
    let mut bearer = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(invalid)?;
    bearer.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static(rest::API_KEY), key);
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_base_appends_rest_path() -> Result<(), StoreError> {
        assert_eq!(rest_base("https://demo.supabase.co")?.as_str(), "https://demo.supabase.co/rest/v1/");
        assert_eq!(
            rest_base("http://localhost:54321/proxy")?.as_str(),
            "http://localhost:54321/proxy/rest/v1/"
        );
        Ok(())
    }

    #[test]
    fn rest_base_rejects_other_schemes() {
        let err = rest_base("ftp://demo.example").expect_err("ftp");
        assert!(matches!(err, StoreError::Validation { .. }));
    }

    #[test]
    fn builder_requires_url_and_key() {
        let err = Store::builder().api_key("k").init().expect_err("no url");
        assert!(matches!(err, StoreError::Validation { .. }));

        let err = Store::builder().url("https://demo.supabase.co").api_key("  ").init().expect_err("blank key");
        assert!(matches!(err, StoreError::Validation { .. }));
    }

    #[test]
    fn builder_debug_redacts_key() {
        let builder = Store::builder().api_key("super-secret");
        let rendered = format!("{builder:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn table_url_rejects_path_injection() -> Result<(), StoreError> {
        let store = Store::builder().url("https://demo.supabase.co").api_key("k").init()?;
        assert_eq!(store.table_url("cp3pro")?.as_str(), "https://demo.supabase.co/rest/v1/cp3pro");
        assert!(store.table_url("../auth").is_err());
        assert!(store.table_url("").is_err());
        Ok(())
    }
}
