//! Client for the Ragios monitor-management service.
//!
//! Every operation is a single blocking HTTP round trip against the Ragios
//! REST API. Protected endpoints are authorized with a session cookie that is
//! obtained from `POST /session` using the configured credentials.
//!
//! ```no_run
//! use ragios_client::{ClientConfig, Monitor, RagiosClient};
//!
//! # fn main() -> ragios_client::Result<()> {
//! let config = ClientConfig::new().with_credentials("admin", "ragios");
//! let client = RagiosClient::new(config)?;
//!
//! let monitor = Monitor::new()
//!     .with("monitor", "Google")
//!     .with("url", "http://google.com")
//!     .with("every", "5m")
//!     .with("contact", "admin@mail.com")
//!     .with("via", serde_json::json!(["gmail_notifier"]))
//!     .with("plugin", "url_monitor");
//!
//! let created = client.create(&monitor)?;
//! let id = created.id().unwrap_or_default().to_string();
//! client.stop(&id)?;
//! client.delete(&id)?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod shared;

pub use client::{EventQuery, RagiosClient, AUTH_COOKIE};
pub use shared::config::ClientConfig;
pub use shared::error::{ApiError, ApiErrorKind, RagiosError, Result};
pub use shared::models::{Ack, Document, Event, Monitor};
