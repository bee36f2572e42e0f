//! HTTP client harness for the Bank API
//!
//! A thin wrapper over `reqwest` used by integration tests: every request is
//! resolved against one base address, asks for JSON, and hands back the raw
//! response so callers can assert on the status code themselves.

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Default address of a locally running service
pub const DEFAULT_BASE_URL: &str = "https://localhost:5001/api/Accounts/";

/// HTTP client bound to one API base address
#[derive(Clone)]
pub struct ServiceClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ServiceClient {
    /// Create a client from the environment
    ///
    /// Optional env vars:
    /// - BANK_API_URL: Base URL of the resource (e.g., http://localhost:8080/api/Accounts/)
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("BANK_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self::new(&base_url)
    }

    /// Create a new client with explicit configuration
    pub fn new(base_url: &str) -> Result<Self> {
        // Without a trailing slash `Url::join` would replace the last segment
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalized).with_context(|| format!("Invalid base URL: {}", base_url))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a path relative to the base address
    pub fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .with_context(|| format!("Invalid request path: {}", path))
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = self.url(path)?;
        tracing::debug!(%url, "GET");

        self.client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to GET {}", path))
    }

    pub async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Response> {
        let url = self.url(path)?;
        tracing::debug!(%url, "POST");

        self.client
            .post(url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to POST {}", path))
    }

    pub async fn put<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Response> {
        let url = self.url(path)?;
        tracing::debug!(%url, "PUT");

        self.client
            .put(url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to PUT {}", path))
    }

    pub async fn delete(&self, path: &str) -> Result<Response> {
        let url = self.url(path)?;
        tracing::debug!(%url, "DELETE");

        self.client
            .delete(url)
            .send()
            .await
            .with_context(|| format!("Failed to DELETE {}", path))
    }
}

/// Deserialize a JSON response body into a DTO or a sequence of DTOs
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    if status == StatusCode::NO_CONTENT || body.is_empty() {
        anyhow::bail!("Response ({}) has no body", status);
    }

    serde_json::from_str(&body)
        .with_context(|| format!("Failed to parse response ({}): {}", status, body))
}
