//! Auth decorators for roster endpoints that are not publicly readable.
//!
//! Both wrap another [`HttpClient`](super::HttpClient) and inject the key
//! configured via `ROSTER_API_KEY` (see the binary's environment handling).

mod api_key;
mod url_param;

pub use api_key::ApiKey;
pub use url_param::UrlParam;
