use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RagiosError {
    /// The server answered with a non-2xx status.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Transport failure: connection refused, DNS, timeout.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// A caller-supplied payload could not be encoded as JSON.
    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// A successful response body was not the expected JSON.
    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl RagiosError {
    /// The server rejection carried by this error, if any.
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            RagiosError::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Classification of a server rejection; `None` for local and transport errors.
    pub fn kind(&self) -> Option<ApiErrorKind> {
        self.api().map(ApiError::kind)
    }
}

pub type Result<T> = std::result::Result<T, RagiosError>;

/// Domain outcome reported by the server alongside a non-2xx status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    MissingPlugin,
    MissingNotifier,
    MonitorNotFound,
    NotFound,
    Unauthorized,
    Other,
}

impl ApiErrorKind {
    fn classify(status: StatusCode, body: &str) -> Self {
        if body.contains("No Plugin Found") {
            ApiErrorKind::MissingPlugin
        } else if body.contains("No Notifier Found") {
            ApiErrorKind::MissingNotifier
        } else if body.contains("No monitor found") {
            ApiErrorKind::MonitorNotFound
        } else if body.contains("not authorized") || status == StatusCode::UNAUTHORIZED {
            ApiErrorKind::Unauthorized
        } else if status == StatusCode::NOT_FOUND {
            ApiErrorKind::NotFound
        } else {
            ApiErrorKind::Other
        }
    }
}

/// A request the server rejected.
///
/// Displays as the raw response body, typically `{"error":"..."}`, so callers
/// can match on the server's wording as well as on [`ApiErrorKind`].
#[derive(Error, Debug, Clone)]
#[error("{body}")]
pub struct ApiError {
    status: StatusCode,
    kind: ApiErrorKind,
    body: String,
}

impl ApiError {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        let body = body.into();
        let kind = ApiErrorKind::classify(status, &body);
        Self { status, kind, body }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    /// Raw response body as sent by the server.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The `error` field of a JSON body, falling back to the raw body.
    pub fn error_message(&self) -> String {
        match serde_json::from_str::<Value>(&self.body) {
            Ok(Value::Object(map)) => match map.get("error") {
                Some(Value::String(msg)) => msg.clone(),
                Some(other) => other.to_string(),
                None => self.body.clone(),
            },
            _ => self.body.clone(),
        }
    }
}
