mod client;
mod basic;
pub mod auth;

pub use client::HttpClient;
pub use basic::BasicClient;
pub use auth::{ApiKey, UrlParam};

use anyhow::Result;

/// Issues a GET for `url` through `client` and returns the response body.
///
/// Non-success HTTP statuses are errors, so callers see a failed retrieval
/// rather than an error page parsed as data.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let req = reqwest::Request::new(
        reqwest::Method::GET,
        url.parse()?,
    );

    let resp = client.execute(req).await?.error_for_status()?;
    Ok(resp.bytes().await?.to_vec())
}
