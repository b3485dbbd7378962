//! Blocking client for the Ragios REST API.
//!
//! Each public method maps to one server endpoint. Monitor operations live in
//! `monitors.rs`, event queries in `events.rs`, and session handling in
//! `session.rs`; this module owns the shared request pipeline.

mod events;
mod monitors;
mod session;
#[cfg(test)]
mod test_support;

pub use events::EventQuery;
pub use session::AUTH_COOKIE;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::shared::config::ClientConfig;
use crate::shared::error::{ApiError, RagiosError, Result};

const USER_AGENT: &str = concat!("ragios-client/", env!("CARGO_PKG_VERSION"));

/// Client for a single Ragios server.
///
/// Address, port and credentials are read from the configuration on every
/// call, so changes made through [`RagiosClient::config_mut`] apply to the
/// next request. The transport timeout is fixed when the client is built.
pub struct RagiosClient {
    http: Client,
    config: ClientConfig,
}

impl RagiosClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(Self::default_headers())
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http, config })
    }

    /// Build a client from `RAGIOS_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ClientConfig {
        &mut self.config
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/json"),
        );
        headers
    }

    /// URL for `segments` under the configured base. Segments are
    /// percent-encoded; an empty final segment yields a trailing slash.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let base = self.config.base_url();
        let mut url = Url::parse(&base)?;
        url.path_segments_mut()
            .map_err(|_| RagiosError::Config(format!("{} cannot be used as a base URL", base)))?
            .clear()
            .extend(segments);
        Ok(url)
    }

    fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let request = self.authorized(Method::GET, url)?;
        self.send(request)
    }

    fn delete_at<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let request = self.authorized(Method::DELETE, url)?;
        self.send(request)
    }

    /// Encode `payload` before touching the network so that a bad local value
    /// surfaces as [`RagiosError::Encode`] rather than as a server rejection.
    fn send_json<B, T>(&self, method: Method, url: Url, payload: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_vec(payload).map_err(RagiosError::Encode)?;
        let request = self
            .authorized(method, url)?
            .header(header::CONTENT_TYPE, "application/json")
            .body(body);
        self.send(request)
    }

    fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send()?;
        let status = response.status();
        let url = response.url().clone();
        let body = response.text()?;

        if !status.is_success() {
            warn!(%url, %status, "Ragios rejected request");
            return Err(ApiError::new(status, body).into());
        }

        debug!(%url, %status, bytes = body.len(), "Ragios response received");
        serde_json::from_str(&body).map_err(RagiosError::Decode)
    }
}

/// Append `pairs` to `url` as a form-encoded query string.
fn with_query<I, K, V>(mut url: Url, pairs: I) -> Url
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut pairs = pairs.into_iter().peekable();
    if pairs.peek().is_some() {
        url.query_pairs_mut().extend_pairs(pairs);
    }
    url
}
