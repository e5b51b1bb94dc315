use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{epoch_seconds, null_as_empty};

/// One entry of a zone's change-note history, as returned by `ZoneNoteReport`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneNote {
    /// Zone the note belongs to
    #[serde(default)]
    pub zone: Option<String>,

    /// User who authored the change
    #[serde(default, deserialize_with = "null_as_empty")]
    pub user_name: String,

    /// Kind of change (`publish`, `rollback`, ...)
    #[serde(default, rename = "type", deserialize_with = "null_as_empty")]
    pub note_type: String,

    /// Free-form note text as stored by the API
    #[serde(default, deserialize_with = "null_as_empty")]
    pub note: String,

    /// When the note was recorded, in epoch seconds
    #[serde(deserialize_with = "epoch_seconds")]
    pub timestamp: i64,
}

impl ZoneNote {
    /// Note text with trailing whitespace removed
    #[must_use]
    pub fn trimmed_note(&self) -> &str {
        self.note.trim_end()
    }

    /// Timestamp as a UTC datetime, if it is within chrono's range
    #[must_use]
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

/// Request body for `ZoneNoteReport`
///
/// `limit` is left out of the JSON entirely when unset; the API treats an
/// absent limit as "all notes".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneNoteQuery {
    /// Zone to report on
    pub zone: String,

    /// Maximum number of notes, newest first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
