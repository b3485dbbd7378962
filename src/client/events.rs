use tracing::info;

use super::{with_query, RagiosClient};
use crate::shared::error::Result;
use crate::shared::models::{Ack, Event};

/// Date range and size limit for event listings.
///
/// Dates are passed through in whatever format the server accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub limit: Option<u32>,
}

impl EventQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn between(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self::new()
            .with_start_date(start_date)
            .with_end_date(end_date)
    }

    pub fn with_start_date(mut self, start_date: impl Into<String>) -> Self {
        self.start_date = Some(start_date.into());
        self
    }

    pub fn with_end_date(mut self, end_date: impl Into<String>) -> Self {
        self.end_date = Some(end_date.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(start) = &self.start_date {
            pairs.push(("start_date", start.clone()));
        }
        if let Some(end) = &self.end_date {
            pairs.push(("end_date", end.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

impl RagiosClient {
    pub fn find_event(&self, event_id: &str) -> Result<Event> {
        let url = self.endpoint(&["events", event_id, ""])?;
        self.get(url)
    }

    /// Events across all monitors.
    pub fn all_events(&self, query: &EventQuery) -> Result<Vec<Event>> {
        let url = self.endpoint(&["events"])?;
        self.get(with_query(url, query.pairs()))
    }

    /// Events recorded for one monitor.
    pub fn events(&self, monitor_id: &str, query: &EventQuery) -> Result<Vec<Event>> {
        let url = self.endpoint(&["monitors", monitor_id, "events"])?;
        self.get(with_query(url, query.pairs()))
    }

    /// Events of one type (e.g. `monitor.test`) recorded for a monitor.
    pub fn events_by_type(
        &self,
        monitor_id: &str,
        event_type: &str,
        query: &EventQuery,
    ) -> Result<Vec<Event>> {
        let url = self.endpoint(&["monitors", monitor_id, "events_by_type", event_type])?;
        self.get(with_query(url, query.pairs()))
    }

    /// Events a monitor recorded while in `state` (e.g. `failed`).
    pub fn events_by_state(
        &self,
        monitor_id: &str,
        state: &str,
        query: &EventQuery,
    ) -> Result<Vec<Event>> {
        let url = self.endpoint(&["monitors", monitor_id, "events_by_state", state])?;
        self.get(with_query(url, query.pairs()))
    }

    pub fn delete_event(&self, event_id: &str) -> Result<Ack> {
        let url = self.endpoint(&["events", event_id])?;
        let ack = self.delete_at(url)?;
        info!(event_id, "Deleted event");
        Ok(ack)
    }
}
