use reqwest::blocking::RequestBuilder;
use reqwest::header::COOKIE;
use reqwest::Method;
use serde_json::{Map, Value};
use tracing::{debug, info, trace};
use url::Url;

use super::RagiosClient;
use crate::shared::error::{RagiosError, Result};

/// Cookie carrying the session token; also the token field of the
/// `POST /session` reply.
pub const AUTH_COOKIE: &str = "RagiosAuthSession";

impl RagiosClient {
    /// Authenticate with `username`/`password` and keep them for later calls.
    ///
    /// The stored credentials are only replaced when the server accepts them;
    /// a rejection surfaces as an [`ApiErrorKind::Unauthorized`] error.
    ///
    /// [`ApiErrorKind::Unauthorized`]: crate::ApiErrorKind::Unauthorized
    pub fn login(&mut self, username: &str, password: &str) -> Result<String> {
        let token = self.request_session(username, password)?;
        self.config.username = Some(username.to_string());
        self.config.password = Some(password.to_string());
        info!(username, "Logged in to Ragios");
        Ok(token)
    }

    /// Obtain a fresh session token for the configured credentials.
    ///
    /// Tokens are never cached: every protected call asks for a new one. With
    /// no credentials configured the token is empty and the server is not
    /// contacted.
    pub fn session_token(&self) -> Result<String> {
        match self.config.credentials() {
            Some((username, password)) => self.request_session(username, password),
            None => {
                trace!("No credentials configured, using empty session token");
                Ok(String::new())
            }
        }
    }

    fn request_session(&self, username: &str, password: &str) -> Result<String> {
        let url = self.endpoint(&["session"])?;
        debug!(%url, username, "Requesting Ragios session");

        let request = self
            .http
            .post(url)
            .form(&[("username", username), ("password", password)]);
        let reply: Map<String, Value> = self.send(request)?;

        match reply.get(AUTH_COOKIE) {
            Some(Value::String(token)) => Ok(token.clone()),
            _ => Err(RagiosError::UnexpectedResponse(format!(
                "session reply has no {} token",
                AUTH_COOKIE
            ))),
        }
    }

    /// Request builder for a protected endpoint, carrying the session cookie.
    pub(super) fn authorized(&self, method: Method, url: Url) -> Result<RequestBuilder> {
        let token = self.session_token()?;
        debug!(%method, %url, "Sending Ragios request");
        Ok(self
            .http
            .request(method, url)
            .header(COOKIE, format!("{}={}", AUTH_COOKIE, token)))
    }
}
