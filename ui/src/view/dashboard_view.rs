//! The surface the Dioxus components render from.

use std::collections::{HashMap, HashSet};

use crate::core::report::RiskLevel;
use crate::view::charts::{ChartInstance, ChartSlot};
use crate::view::surface::{CardRole, ChartId, Interactive, TextSlot, ViewSurface};

/// A progress fill move that is due once `delay_ms` has passed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingWidth {
    pub target: f64,
    pub delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    mounted: HashSet<TextSlot>,
    texts: HashMap<TextSlot, String>,
    progress_width: f64,
    pending_width: Option<PendingWidth>,
    risk_chart: ChartSlot,
    prediction_chart: ChartSlot,
    elements: Vec<Interactive>,
    bound: HashSet<Interactive>,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardView {
    /// Every slot mounted, both charts present, all cards and risk items
    /// interactive.
    pub fn new() -> Self {
        let metric_cards = [
            TextSlot::TotalStudents,
            TextSlot::TotalAnalyses,
            TextSlot::StudentsWithoutPrediction,
            TextSlot::AnalysisCoverage,
            TextSlot::AverageDropoutProbability,
        ]
        .into_iter()
        .map(|slot| Interactive::Card(CardRole::Metric, slot));
        let prediction_cards = [
            TextSlot::PredictedDropout,
            TextSlot::PredictedRetention,
            TextSlot::PredictedDropoutRate,
        ]
        .into_iter()
        .map(|slot| Interactive::Card(CardRole::Prediction, slot));
        let risk_items = RiskLevel::ALL.into_iter().map(Interactive::RiskItem);

        Self {
            mounted: TextSlot::ALL.into_iter().collect(),
            texts: HashMap::new(),
            progress_width: 0.0,
            pending_width: None,
            risk_chart: ChartSlot::default(),
            prediction_chart: ChartSlot::default(),
            elements: metric_cards.chain(prediction_cards).chain(risk_items).collect(),
            bound: HashSet::new(),
        }
    }

    pub fn text(&self, slot: TextSlot) -> Option<&str> {
        self.texts.get(&slot).map(String::as_str)
    }

    pub fn progress_width(&self) -> f64 {
        self.progress_width
    }

    /// Hand the pending progress move to whoever drives the delay.
    pub fn take_pending_width(&mut self) -> Option<PendingWidth> {
        self.pending_width.take()
    }

    pub fn finish_width(&mut self, pending: PendingWidth) {
        self.progress_width = pending.target;
    }

    pub fn chart(&self, chart: ChartId) -> Option<&ChartInstance> {
        match chart {
            ChartId::Risk => self.risk_chart.current(),
            ChartId::Predictions => self.prediction_chart.current(),
        }
    }

    pub fn is_bound(&self, element: Interactive) -> bool {
        self.bound.contains(&element)
    }
}

impl ViewSurface for DashboardView {
    fn set_text(&mut self, slot: TextSlot, text: &str) {
        if self.mounted.contains(&slot) {
            self.texts.insert(slot, text.to_string());
        }
    }

    fn animate_width(&mut self, percent: f64, delay_ms: u64) {
        self.progress_width = 0.0;
        self.pending_width = Some(PendingWidth {
            target: percent.clamp(0.0, 100.0),
            delay_ms,
        });
    }

    fn chart_slot(&mut self, chart: ChartId) -> Option<&mut ChartSlot> {
        match chart {
            ChartId::Risk => Some(&mut self.risk_chart),
            ChartId::Predictions => Some(&mut self.prediction_chart),
        }
    }

    fn interactive_elements(&self) -> Vec<Interactive> {
        self.elements.clone()
    }

    fn bind_interactions(&mut self, element: Interactive) -> bool {
        self.bound.insert(element)
    }
}
