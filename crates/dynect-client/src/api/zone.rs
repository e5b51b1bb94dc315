//! Zone report endpoints.

use crate::api::Session;
use dynect_core::{Result, ZoneNote, ZoneNoteQuery};
use reqwest::Method;
use tracing::debug;

/// Builder for `ZoneNoteReport` requests
pub struct ZoneNoteRequestBuilder<'a> {
    session: &'a Session,
    zone: String,
    limit: Option<u32>,
}

impl<'a> ZoneNoteRequestBuilder<'a> {
    pub(crate) fn new(session: &'a Session, zone: String) -> Self {
        Self {
            session,
            zone,
            limit: None,
        }
    }

    /// Return at most `limit` notes, newest first
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set or clear the limit; `None` leaves `limit` out of the request
    #[must_use]
    pub fn maybe_limit(mut self, limit: Option<u32>) -> Self {
        self.limit = limit;
        self
    }

    /// Execute the request
    pub async fn send(self) -> Result<Vec<ZoneNote>> {
        let query = ZoneNoteQuery {
            zone: self.zone,
            limit: self.limit,
        };

        let notes: Vec<ZoneNote> = self
            .session
            .execute(Method::POST, "ZoneNoteReport/", Some(&query))
            .await?
            .into_data()?;

        debug!(zone = %query.zone, count = notes.len(), "zone notes received");
        Ok(notes)
    }
}
