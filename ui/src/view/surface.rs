use crate::core::report::RiskLevel;
use crate::view::charts::ChartSlot;

/// Text display slots. `class_name` is the element class the theme styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSlot {
    ApiMessage,
    TotalStudents,
    TotalAnalyses,
    StudentsWithoutPrediction,
    AnalysisCoverage,
    AverageDropoutProbability,
    PredictedDropout,
    PredictedRetention,
    PredictedDropoutRate,
}

impl TextSlot {
    pub const ALL: [TextSlot; 9] = [
        TextSlot::ApiMessage,
        TextSlot::TotalStudents,
        TextSlot::TotalAnalyses,
        TextSlot::StudentsWithoutPrediction,
        TextSlot::AnalysisCoverage,
        TextSlot::AverageDropoutProbability,
        TextSlot::PredictedDropout,
        TextSlot::PredictedRetention,
        TextSlot::PredictedDropoutRate,
    ];

    pub fn class_name(&self) -> &'static str {
        match self {
            TextSlot::ApiMessage => "api-message",
            TextSlot::TotalStudents => "metric-total-alunos",
            TextSlot::TotalAnalyses => "metric-total-analises",
            TextSlot::StudentsWithoutPrediction => "metric-alunos-sem-predicao",
            TextSlot::AnalysisCoverage => "metric-cobertura-analises",
            TextSlot::AverageDropoutProbability => "metric-prob-media-evasao",
            TextSlot::PredictedDropout => "prediction-evasao",
            TextSlot::PredictedRetention => "prediction-nao-evasao",
            TextSlot::PredictedDropoutRate => "prediction-taxa-evasao",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartId {
    Risk,
    Predictions,
}

/// Which card family a card belongs to; both families get hover handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardRole {
    Metric,
    Prediction,
}

/// Elements that carry hover / click / keyboard handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interactive {
    Card(CardRole, TextSlot),
    RiskItem(RiskLevel),
}

/// What the binder is allowed to do to a page.
pub trait ViewSurface {
    /// Write `text` into `slot`. Slots the page does not mount are ignored.
    fn set_text(&mut self, slot: TextSlot, text: &str);

    /// Reset the progress fill to 0 and move it to `percent` after
    /// `delay_ms`.
    fn animate_width(&mut self, percent: f64, delay_ms: u64);

    /// Mount point for a chart, or `None` when the page has no such chart.
    fn chart_slot(&mut self, chart: ChartId) -> Option<&mut ChartSlot>;

    fn interactive_elements(&self) -> Vec<Interactive>;

    /// Attach handlers to `element`. Returns `false` when they were already
    /// attached, in which case nothing changes.
    fn bind_interactions(&mut self, element: Interactive) -> bool;
}
