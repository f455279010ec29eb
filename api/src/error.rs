use thiserror::Error;

/// Why a load cycle could not produce a live report.
///
/// Every variant is caught by the loader and turned into a banner message
/// plus the fallback snapshot; none of them is fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("server unreachable at {url}: {reason}")]
    Unreachable { url: String, reason: String },

    #[error("analysis trigger failed with HTTP {status}: {body}")]
    TriggerFailed { status: u16, body: String },

    #[error("report request returned HTTP {status}: {body}")]
    FetchFailed { status: u16, body: String },

    #[error("report is not valid JSON ({error}); raw body: {raw}")]
    MalformedResponse { error: String, raw: String },

    #[error("request timed out after {after_ms} ms")]
    Timeout { after_ms: u64 },

    #[error("network error during {step}: {reason}")]
    Network { step: &'static str, reason: String },
}

impl LoadError {
    pub fn malformed(error: serde_json::Error, raw: impl Into<String>) -> Self {
        Self::MalformedResponse {
            error: error.to_string(),
            raw: raw.into(),
        }
    }

    /// Short stable tag used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Unreachable { .. } => "unreachable",
            LoadError::TriggerFailed { .. } => "trigger_failed",
            LoadError::FetchFailed { .. } => "fetch_failed",
            LoadError::MalformedResponse { .. } => "malformed_response",
            LoadError::Timeout { .. } => "timeout",
            LoadError::Network { .. } => "network",
        }
    }
}

pub type LoadResult<T> = Result<T, LoadError>;

/// A request that never produced an HTTP response (DNS, refused connection,
/// CORS rejection, aborted body read).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self(err.to_string())
    }
}
