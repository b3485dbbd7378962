pub mod config;
pub mod error;
pub mod logging;
pub mod models;

pub use config::ClientConfig;
pub use error::{ApiError, ApiErrorKind, RagiosError, Result};
pub use models::{Ack, Document, Event, Monitor};
