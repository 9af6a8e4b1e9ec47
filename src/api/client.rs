//! HTTP client for the JSON REST store.
//!
//! # Responsibilities
//! - Hold one shared connection pool configured with base URL and timeouts
//! - Perform a single request per call with a JSON content type
//! - Tag each request with an `x-request-id` for log correlation
//! - Map non-2xx statuses and undecodable bodies to `ApiError`

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::Instrument;
use url::Url;
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::config::{ApiConfig, ClientConfig};
use crate::observability::metrics;

/// Header carrying the per-request correlation id.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Client for the booking data store.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    metrics_enabled: bool,
}

impl ApiClient {
    /// Build a client from the `[api]` configuration section.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/'))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        tracing::debug!(base_url = %base_url, "Store client initialized");

        Ok(Self {
            client,
            base_url,
            metrics_enabled: true,
        })
    }

    /// Build a client from the full configuration.
    pub fn from_config(config: &ClientConfig) -> ApiResult<Self> {
        let mut client = Self::new(&config.api)?;
        client.metrics_enabled = config.observability.metrics_enabled;
        Ok(client)
    }

    /// Base URL every path is joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a store path such as `/rooms/3` against the base URL.
    ///
    /// The path is appended rather than `Url::join`ed so a base URL with its
    /// own prefix (`http://host/api`) keeps that prefix.
    pub fn url(&self, path: &str) -> ApiResult<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    /// GET a path and decode the body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = self.client.get(self.url(path)?);
        let body = self.dispatch(Method::GET, path, request).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// GET a collection filtered by equality query parameters.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ApiResult<T> {
        let request = self.client.get(self.url(path)?).query(query);
        let body = self.dispatch(Method::GET, path, request).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// POST a JSON body and decode the created record.
    pub async fn post<B, T>(&self, path: &str, payload: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.post(self.url(path)?).json(payload);
        let body = self.dispatch(Method::POST, path, request).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// PUT a JSON body and decode the replaced record.
    pub async fn put<B, T>(&self, path: &str, payload: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.put(self.url(path)?).json(payload);
        let body = self.dispatch(Method::PUT, path, request).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// DELETE a path. The response body is ignored.
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let request = self.client.delete(self.url(path)?);
        self.dispatch(Method::DELETE, path, request).await?;
        Ok(())
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> ApiResult<String> {
        let request_id = Uuid::new_v4();
        let resource = resource_label(path);
        let span = tracing::debug_span!("store_request", %request_id, %method, path);

        async move {
            let start_time = Instant::now();
            let response = match request
                .header(X_REQUEST_ID, request_id.to_string())
                .send()
                .await
            {
                Ok(response) => response,
                Err(e) => {
                    self.record(&method, resource, "error", start_time);
                    return Err(ApiError::Transport(e));
                }
            };

            let status = response.status();
            let text = response.text().await?;
            self.record(&method, resource, status.as_str(), start_time);

            tracing::debug!(status = %status, elapsed = ?start_time.elapsed(), "Store responded");

            if !status.is_success() {
                return Err(ApiError::Status {
                    status: status.as_u16(),
                    body: text,
                });
            }
            Ok(text)
        }
        .instrument(span)
        .await
    }

    fn record(&self, method: &Method, resource: &str, status: &str, start_time: Instant) {
        if self.metrics_enabled {
            metrics::record_request(method.as_str(), resource, status, start_time);
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("metrics_enabled", &self.metrics_enabled)
            .finish()
    }
}

/// First path segment, used as the metrics label (`/rooms/3` → `rooms`).
fn resource_label(path: &str) -> &str {
    path.trim_start_matches('/')
        .split(['/', '?'])
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("root")
}
