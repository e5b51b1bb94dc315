use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::common::opt_string_or_number;
use crate::{DynError, Result};

/// Status field of every API response envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApiStatus {
    /// The request completed
    Success,
    /// The request was queued as a job that must be polled
    Incomplete,
    /// Anything else: the request failed
    Failure(String),
}

impl ApiStatus {
    /// Returns true for `success`
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns true for `incomplete`
    #[must_use]
    pub const fn is_incomplete(&self) -> bool {
        matches!(self, Self::Incomplete)
    }

    /// Wire representation of the status
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Incomplete => "incomplete",
            Self::Failure(s) => s,
        }
    }
}

impl From<String> for ApiStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "success" => Self::Success,
            "incomplete" => Self::Incomplete,
            _ => Self::Failure(s),
        }
    }
}

impl From<ApiStatus> for String {
    fn from(status: ApiStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the `msgs` list attached to every response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    /// Human-readable message
    #[serde(default, rename = "INFO")]
    pub info: Option<String>,

    /// Severity (`INFO`, `WARN`, `ERROR`, ...)
    #[serde(default, rename = "LVL")]
    pub level: Option<String>,

    /// Machine-readable error code, when the message is an error
    #[serde(default, rename = "ERR_CD")]
    pub error_code: Option<String>,

    /// Subsystem that produced the message
    #[serde(default, rename = "SOURCE")]
    pub source: Option<String>,
}

/// Response envelope shared by every endpoint
///
/// `data` is kept as raw JSON until the job poller has resolved the response
/// to `success`; only then is it converted to the endpoint's type with
/// [`ApiResponse::into_data`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Outcome of the request
    pub status: ApiStatus,

    /// Payload, shape depends on the endpoint
    #[serde(default)]
    pub data: serde_json::Value,

    /// Informational and error messages
    #[serde(default)]
    pub msgs: Vec<ApiMessage>,

    /// Job to poll when `status` is `incomplete`
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub job_id: Option<String>,
}

impl ApiResponse {
    /// Convert the payload into the endpoint's data type
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T> {
        serde_json::from_value(self.data).map_err(DynError::Json)
    }

    /// Turn a terminal response into the matching error
    #[must_use]
    pub fn into_error(self) -> DynError {
        DynError::Api {
            status: self.status.to_string(),
            messages: self.msgs,
        }
    }
}
