use reqwest::Method;
use serde::Serialize;
use serde_json::json;
use tracing::info;

use super::{with_query, RagiosClient};
use crate::shared::error::Result;
use crate::shared::models::{Ack, Document, Monitor};

const STATUS_ACTIVE: &str = "active";
const STATUS_STOPPED: &str = "stopped";

impl RagiosClient {
    /// Create a monitor. The reply is the stored monitor, including the
    /// server-assigned `_id`.
    ///
    /// The payload is sent verbatim; the server rejects monitors without a
    /// plugin or notifier.
    #[doc(alias = "add")]
    pub fn create<T: Serialize + ?Sized>(&self, monitor: &T) -> Result<Monitor> {
        let url = self.endpoint(&["monitors", ""])?;
        let created: Monitor = self.send_json(Method::POST, url, monitor)?;
        info!(monitor_id = created.id().unwrap_or_default(), "Created monitor");
        Ok(created)
    }

    pub fn find(&self, monitor_id: &str) -> Result<Monitor> {
        let url = self.endpoint(&["monitors", monitor_id, ""])?;
        self.get(url)
    }

    /// All monitors, optionally capped at `limit`.
    pub fn all(&self, limit: Option<u32>) -> Result<Vec<Monitor>> {
        let url = self.endpoint(&["monitors"])?;
        let limit = limit.map(|n| n.to_string());
        self.get(with_query(url, limit.iter().map(|n| ("limit", n))))
    }

    /// Monitors whose attributes equal every key/value pair in `filters`.
    /// No match is an empty list, not an error.
    #[doc(alias = "where")]
    pub fn find_by<I, K, V>(&self, filters: I) -> Result<Vec<Monitor>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let url = self.endpoint(&["monitors", "attributes"])?;
        self.get(with_query(url, filters))
    }

    /// Apply `changes` to a monitor; merge semantics are up to the server.
    pub fn update<T: Serialize + ?Sized>(&self, monitor_id: &str, changes: &T) -> Result<Monitor> {
        let url = self.endpoint(&["monitors", monitor_id])?;
        self.send_json(Method::PUT, url, changes)
    }

    /// Stop scheduling a monitor. Stopping a stopped monitor succeeds.
    pub fn stop(&self, monitor_id: &str) -> Result<Ack> {
        self.set_status(monitor_id, STATUS_STOPPED)
    }

    /// Resume a stopped monitor. Starting an active monitor succeeds.
    #[doc(alias = "restart")]
    pub fn start(&self, monitor_id: &str) -> Result<Ack> {
        self.set_status(monitor_id, STATUS_ACTIVE)
    }

    pub fn delete(&self, monitor_id: &str) -> Result<Ack> {
        let url = self.endpoint(&["monitors", monitor_id])?;
        let ack = self.delete_at(url)?;
        info!(monitor_id, "Deleted monitor");
        Ok(ack)
    }

    /// Run a monitor's check immediately.
    pub fn test(&self, monitor_id: &str) -> Result<Ack> {
        let url = self.endpoint(&["tests"])?;
        self.send_json(Method::POST, url, &json!({ "id": monitor_id }))
    }

    /// Run an ad-hoc check of `url` with the given plugin source, without
    /// creating a monitor. The reply is the server's check result.
    pub fn maestro_test(&self, url: &str, source: &str) -> Result<Document> {
        let endpoint = self.endpoint(&["maestro", "test"])?;
        self.send_json(
            Method::POST,
            endpoint,
            &json!({ "url": url, "source": source }),
        )
    }

    fn set_status(&self, monitor_id: &str, status: &str) -> Result<Ack> {
        let url = self.endpoint(&["monitors", monitor_id])?;
        let ack = self.send_json(Method::PUT, url, &json!({ "status": status }))?;
        info!(monitor_id, status, "Changed monitor status");
        Ok(ack)
    }
}
