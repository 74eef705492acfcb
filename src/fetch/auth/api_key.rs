use crate::fetch::client::HttpClient;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderName, HeaderValue};

/// Header carrying the MTA API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// An [`HttpClient`] wrapper that injects an API key as an HTTP header.
///
/// The key is written into the header byte-for-byte; no scheme prefix or
/// encoding is applied. Header name and value are validated once at
/// construction, so `execute` itself cannot fail on a malformed key.
pub struct ApiKey<C> {
    inner: C,
    header_name: HeaderName,
    key: HeaderValue,
}

impl<C> ApiKey<C> {
    /// Convenience constructor for the `x-api-key` header used by the MTA
    /// real-time feeds.
    pub fn x_api_key(inner: C, key: &str) -> Result<Self> {
        Self::new(inner, API_KEY_HEADER, key)
    }

    /// Sends `key` in the header named `header_name` on every request.
    pub fn new(inner: C, header_name: &str, key: &str) -> Result<Self> {
        Ok(Self {
            inner,
            header_name: HeaderName::from_bytes(header_name.as_bytes())
                .with_context(|| format!("invalid header name '{header_name}'"))?,
            key: HeaderValue::from_str(key)
                .context("API key contains bytes that cannot appear in a header value")?,
        })
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for ApiKey<C> {
    async fn execute(&self, mut req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        req.headers_mut()
            .insert(self.header_name.clone(), self.key.clone());
        self.inner.execute(req).await
    }
}
