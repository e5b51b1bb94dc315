use thiserror::Error;

use crate::types::ApiMessage;

/// Result type alias for DynECT operations
pub type Result<T> = std::result::Result<T, DynError>;

/// Errors that can occur when using the DynECT API
#[derive(Error, Debug)]
pub enum DynError {
    /// The API reported a terminal (non-success, non-incomplete) status
    #[error("API request failed with status `{status}` ({} message(s))", .messages.len())]
    Api {
        /// Status string returned by the API
        status: String,
        /// Message list returned alongside the failure
        messages: Vec<ApiMessage>,
    },

    /// A job was still incomplete when the poll ceiling was reached
    #[error("job {job_id} still incomplete after {attempts} poll(s)")]
    JobTimeout {
        /// Job identifier being polled
        job_id: String,
        /// Number of polls performed
        attempts: u32,
    },

    /// The API reported an incomplete job without telling us which one
    #[error("API returned status `incomplete` without a job_id")]
    MissingJobId,

    /// Login succeeded but the response carried no session token
    #[error("login response did not contain a session token")]
    MissingToken,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl DynError {
    /// Messages attached to the error by the API, if any
    #[must_use]
    pub fn messages(&self) -> &[ApiMessage] {
        match self {
            Self::Api { messages, .. } => messages,
            _ => &[],
        }
    }

    /// Returns true if the failure was reported by the API itself rather than
    /// by the transport
    #[must_use]
    pub const fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::JobTimeout { .. } | Self::MissingJobId)
    }
}
