use super::client::HttpClient;
use async_trait::async_trait;

/// The unauthenticated transport: a plain `reqwest::Client`.
pub struct BasicClient(reqwest::Client);

impl BasicClient {
    pub fn new() -> Self {
        Self(reqwest::Client::new())
    }

    /// Wraps an already-configured client, for callers that want their own
    /// timeouts or TLS settings.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self(client)
    }
}

impl Default for BasicClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for BasicClient {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        self.0.execute(req).await
    }
}
