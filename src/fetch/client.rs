use async_trait::async_trait;
use reqwest::{Request, Response};

/// Seam between the fetch loop and the transport.
///
/// The caller constructs whichever client it wants (a plain
/// [`BasicClient`](super::BasicClient), an [`ApiKey`](super::auth::ApiKey)
/// wrapper, or a test double) and passes it by reference; there is no
/// process-wide client.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
