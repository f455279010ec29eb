//! Client-side access to the dropout analysis API.
//!
//! The dashboard talks to three endpoints, always in the same order:
//! a liveness probe on the API root, the batch trigger that re-runs the
//! analysis over every registered student, and the aggregated report.
//! [`ReportSource`] is the seam the UI crate drives; [`HttpReportSource`] is
//! the `reqwest` implementation used by the web and desktop launchers.

mod batch;
mod config;
mod error;
mod http;
mod source;

pub use batch::AnalysisBatch;
pub use config::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, REPORT_PATH, TRIGGER_PATH};
pub use error::{LoadError, LoadResult, TransportError};
pub use http::HttpReportSource;
pub use source::{HttpReply, ReportSource};
