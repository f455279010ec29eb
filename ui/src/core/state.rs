//! Application state for one dashboard instance.

use api::{AnalysisBatch, LoadError};
use tracing::warn;

use crate::core::loader::{LoadOutcome, LoadProgress};
use crate::core::report::Report;
use crate::core::scheduler::RefreshTrigger;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    /// Replaced wholesale at the end of every cycle, never patched.
    pub report: Report,
    pub loading: bool,
    /// Most recent failure, while its banner is still shown.
    pub error: Option<LoadError>,
    pub batch: Option<AnalysisBatch>,
    pub in_flight: u32,
    pub completed_cycles: u64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            report: Report::fallback(),
            loading: false,
            error: None,
            batch: None,
            in_flight: 0,
            completed_cycles: 0,
        }
    }
}

impl DashboardState {
    /// Register a new cycle. Overlapping cycles are allowed; the later one
    /// to finish wins.
    pub fn begin_cycle(&mut self, trigger: RefreshTrigger) {
        if trigger.clears_error() {
            self.error = None;
        }
        if self.in_flight > 0 {
            warn!(
                trigger = trigger.as_str(),
                in_flight = self.in_flight,
                "refresh started while another load is still running"
            );
        }
        self.in_flight += 1;
    }

    pub fn apply(&mut self, outcome: LoadOutcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.completed_cycles += 1;
        self.report = outcome.report;
        if outcome.batch.is_some() {
            self.batch = outcome.batch;
        }
        // Live outcomes take the banner down.
        self.error = outcome.error;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

impl LoadProgress for DashboardState {
    fn loading_started(&mut self) {
        self.loading = true;
    }

    fn loading_finished(&mut self) {
        self.loading = false;
    }

    fn failed(&mut self, error: &LoadError) {
        self.error = Some(error.clone());
    }
}
