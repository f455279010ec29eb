//! One load cycle: liveness probe, batch trigger, report fetch, parse.
//!
//! [`ReportLoader::load`] never fails. Every error is logged, reported to
//! the [`LoadProgress`] listener and replaced by [`Report::fallback`], so the
//! caller always has a complete report to render.

use api::{AnalysisBatch, LoadError, LoadResult, ReportSource};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::core::normalize::normalize;
use crate::core::report::Report;
use crate::core::timing;

/// Side channel for the UI: loading indicator and error banner.
pub trait LoadProgress {
    /// The server answered the probe and the analysis is being requested.
    fn loading_started(&mut self) {}

    /// Always called last, whatever the outcome.
    fn loading_finished(&mut self) {}

    fn failed(&mut self, _error: &LoadError) {}
}

impl LoadProgress for () {}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub report: Report,
    pub error: Option<LoadError>,
    /// What the trigger endpoint said about the batch it ran, when readable.
    pub batch: Option<AnalysisBatch>,
}

impl LoadOutcome {
    pub fn is_live(&self) -> bool {
        self.error.is_none()
    }
}

pub struct ReportLoader<S> {
    source: S,
    timeout_ms: u64,
}

impl<S: ReportSource> ReportLoader<S> {
    pub fn new(source: S, timeout_ms: u64) -> Self {
        Self { source, timeout_ms }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub async fn load(&self, progress: &mut impl LoadProgress) -> LoadOutcome {
        let mut batch = None;
        let fetched = timing::with_deadline(self.timeout_ms, self.fetch(progress, &mut batch))
            .await
            .unwrap_or_else(|elapsed| {
                Err(LoadError::Timeout {
                    after_ms: elapsed.after_ms,
                })
            });

        let outcome = match fetched {
            Ok(raw) => {
                let report = normalize(&raw);
                info!(
                    students = report.summary.total_students,
                    analyses = report.summary.total_analyses,
                    high_risk = report.risk_distribution.high,
                    "analysis report loaded"
                );
                LoadOutcome {
                    report,
                    error: None,
                    batch,
                }
            }
            Err(error) => {
                warn!(kind = error.kind(), %error, "load failed; showing fallback snapshot");
                progress.failed(&error);
                LoadOutcome {
                    report: Report::fallback(),
                    error: Some(error),
                    batch,
                }
            }
        };

        progress.loading_finished();
        outcome
    }

    async fn fetch(
        &self,
        progress: &mut impl LoadProgress,
        batch: &mut Option<AnalysisBatch>,
    ) -> LoadResult<Value> {
        let status = self
            .source
            .probe()
            .await
            .map_err(|err| LoadError::Unreachable {
                url: self.source.base_url(),
                reason: err.to_string(),
            })?;
        debug!(status, "liveness probe answered");

        progress.loading_started();

        let trigger = self
            .source
            .trigger_analysis()
            .await
            .map_err(|err| LoadError::Network {
                step: "analysis trigger",
                reason: err.to_string(),
            })?;
        if !trigger.is_success() {
            return Err(LoadError::TriggerFailed {
                status: trigger.status,
                body: trigger.body,
            });
        }
        *batch = AnalysisBatch::parse(&trigger.body);
        match batch.as_ref() {
            Some(summary) => info!(
                created = summary.predictions_created,
                failed = summary.predictions_failed,
                analysed = summary.students_analysed,
                "batch analysis finished"
            ),
            None => debug!(status = trigger.status, "batch analysis finished"),
        }

        let reply = self
            .source
            .fetch_report()
            .await
            .map_err(|err| LoadError::Network {
                step: "report fetch",
                reason: err.to_string(),
            })?;
        if !reply.is_success() {
            return Err(LoadError::FetchFailed {
                status: reply.status,
                body: reply.body,
            });
        }

        serde_json::from_str(&reply.body).map_err(|err| LoadError::malformed(err, reply.body))
    }
}
