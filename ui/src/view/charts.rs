//! Chart datasets and their mount slots.

use tracing::debug;

use crate::core::format;
use crate::core::report::{Predictions, RiskDistribution, RiskLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Proportions of a whole (risk distribution).
    Doughnut,
    /// Side-by-side counts (prediction outcome).
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    Risk(RiskLevel),
    PredictedDropout,
    PredictedRetention,
}

impl Series {
    pub fn color(&self) -> &'static str {
        match self {
            Series::Risk(RiskLevel::High) | Series::PredictedDropout => "#B4413C",
            Series::Risk(RiskLevel::Medium) => "#FFC185",
            Series::Risk(RiskLevel::Low) | Series::PredictedRetention => "#1FB8CD",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub series: Vec<Series>,
    pub values: Vec<u64>,
}

impl ChartSpec {
    pub fn risk(distribution: &RiskDistribution) -> Self {
        Self {
            kind: ChartKind::Doughnut,
            series: RiskLevel::ALL.iter().copied().map(Series::Risk).collect(),
            values: RiskLevel::ALL
                .iter()
                .map(|level| distribution.count(*level))
                .collect(),
        }
    }

    pub fn predictions(predictions: &Predictions) -> Self {
        Self {
            kind: ChartKind::Bar,
            series: vec![Series::PredictedDropout, Series::PredictedRetention],
            values: vec![predictions.dropout, predictions.retention],
        }
    }

    pub fn total(&self) -> u64 {
        self.values.iter().copied().sum()
    }

    pub fn max(&self) -> u64 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    pub fn tooltip(&self, index: usize) -> Option<Tooltip> {
        let series = *self.series.get(index)?;
        let value = *self.values.get(index)?;
        let share = match self.kind {
            ChartKind::Doughnut => Some(format::format_share(value, self.total())),
            ChartKind::Bar => None,
        };
        Some(Tooltip {
            series,
            value,
            share,
        })
    }
}

/// Hover text parts for one data point. `share` is only set for proportion
/// charts and reads `"0"` when the chart is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub series: Series,
    pub value: u64,
    pub share: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartInstance {
    pub serial: u64,
    pub spec: ChartSpec,
}

/// Owns at most one live chart. `replace` destroys the current instance
/// before creating the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartSlot {
    current: Option<ChartInstance>,
    created: u64,
    destroyed: u64,
}

impl ChartSlot {
    pub fn replace(&mut self, spec: ChartSpec) -> &ChartInstance {
        if let Some(old) = self.current.take() {
            self.destroyed += 1;
            debug!(serial = old.serial, "chart destroyed");
        }
        self.created += 1;
        self.current.insert(ChartInstance {
            serial: self.created,
            spec,
        })
    }

    pub fn current(&self) -> Option<&ChartInstance> {
        self.current.as_ref()
    }

    pub fn created(&self) -> u64 {
        self.created
    }

    pub fn destroyed(&self) -> u64 {
        self.destroyed
    }

    pub fn live(&self) -> u64 {
        self.created - self.destroyed
    }
}
