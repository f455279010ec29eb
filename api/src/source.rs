use async_trait::async_trait;

use crate::error::TransportError;

/// Status and body of an answered request. Bodies are kept as raw text so
/// error paths can quote them verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The three remote steps of a load cycle.
///
/// Futures are not required to be `Send`: on the web target they wrap the
/// browser's `fetch`, which lives on the single UI thread.
#[async_trait(?Send)]
pub trait ReportSource {
    /// Where the API lives, for log lines and error messages.
    fn base_url(&self) -> String;

    /// `GET /`. Any answer counts as alive, so only the status is returned.
    async fn probe(&self) -> Result<u16, TransportError>;

    /// `POST` to the batch-analysis endpoint, no request body.
    async fn trigger_analysis(&self) -> Result<HttpReply, TransportError>;

    /// `GET` of the aggregated report.
    async fn fetch_report(&self) -> Result<HttpReply, TransportError>;
}
