use async_trait::async_trait;
use reqwest::{Request, Response};

/// Seam between the roster loader and the HTTP stack, so auth decorators
/// can wrap the request before it goes out.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
