//! Pushes a normalized report into a [`ViewSurface`].

use crate::core::format;
use crate::core::report::Report;
use crate::core::scheduler::RefreshPolicy;
use crate::view::charts::ChartSpec;
use crate::view::surface::{ChartId, TextSlot, ViewSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binder {
    pub progress_delay_ms: u64,
}

impl Default for Binder {
    fn default() -> Self {
        Self {
            progress_delay_ms: RefreshPolicy::default().progress_delay_ms,
        }
    }
}

impl Binder {
    pub fn new(policy: &RefreshPolicy) -> Self {
        Self {
            progress_delay_ms: policy.progress_delay_ms,
        }
    }

    /// Idempotent: running it twice with the same report leaves the surface
    /// showing the same values with one live instance per chart.
    pub fn render(&self, report: &Report, surface: &mut impl ViewSurface) {
        let summary = &report.summary;
        let predictions = &report.predictions;
        let probability = &report.metrics.average_dropout_probability;

        surface.set_text(TextSlot::PredictedDropout, &predictions.dropout.to_string());
        surface.set_text(
            TextSlot::PredictedRetention,
            &predictions.retention.to_string(),
        );
        if !report.message.is_empty() {
            surface.set_text(TextSlot::ApiMessage, &report.message);
        }
        surface.set_text(TextSlot::TotalStudents, &summary.total_students.to_string());
        surface.set_text(TextSlot::TotalAnalyses, &summary.total_analyses.to_string());
        surface.set_text(
            TextSlot::StudentsWithoutPrediction,
            &summary.students_without_prediction.to_string(),
        );
        surface.set_text(TextSlot::AnalysisCoverage, &summary.analysis_coverage);
        surface.set_text(TextSlot::PredictedDropoutRate, &predictions.dropout_rate);
        surface.set_text(
            TextSlot::AverageDropoutProbability,
            &format::probability_percent(probability),
        );

        if let Some(slot) = surface.chart_slot(ChartId::Risk) {
            slot.replace(ChartSpec::risk(&report.risk_distribution));
        }
        if let Some(slot) = surface.chart_slot(ChartId::Predictions) {
            slot.replace(ChartSpec::predictions(predictions));
        }

        surface.animate_width(format::progress_width(probability), self.progress_delay_ms);

        for element in surface.interactive_elements() {
            surface.bind_interactions(element);
        }
    }
}

/// [`Binder::render`] with the default progress delay.
pub fn render(report: &Report, surface: &mut impl ViewSurface) {
    Binder::default().render(report, surface);
}
