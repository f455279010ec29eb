//! The analysis report snapshot shown by the dashboard.
//!
//! Field names on the wire are the API's Portuguese keys; the Rust side uses
//! English names and `serde(rename)` keeps the two in sync. Values only ever
//! reach this type through [`crate::core::normalize::normalize`], so every
//! field is always populated.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Report {
    #[serde(rename = "mensagem")]
    pub message: String,
    #[serde(rename = "resumo_geral")]
    pub summary: Summary,
    #[serde(rename = "distribuicao_risco")]
    pub risk_distribution: RiskDistribution,
    #[serde(rename = "previsoes")]
    pub predictions: Predictions,
    #[serde(rename = "metricas")]
    pub metrics: Metrics,
}

impl Report {
    /// All-zero snapshot used whenever live data cannot be obtained.
    pub fn fallback() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    #[serde(rename = "total_alunos_cadastrados")]
    pub total_students: u64,
    #[serde(rename = "total_analises_realizadas")]
    pub total_analyses: u64,
    #[serde(rename = "alunos_sem_predicao")]
    pub students_without_prediction: u64,
    #[serde(rename = "cobertura_de_analises")]
    pub analysis_coverage: String,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            total_students: 0,
            total_analyses: 0,
            students_without_prediction: 0,
            analysis_coverage: "0%".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Chart and list order.
    pub const ALL: [RiskLevel; 3] = [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct RiskDistribution {
    #[serde(rename = "alto_risco")]
    pub high: u64,
    #[serde(rename = "medio_risco")]
    pub medium: u64,
    #[serde(rename = "baixo_risco")]
    pub low: u64,
}

impl RiskDistribution {
    pub fn count(&self, level: RiskLevel) -> u64 {
        match level {
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
        }
    }

    pub fn total(&self) -> u64 {
        self.high
            .saturating_add(self.medium)
            .saturating_add(self.low)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Predictions {
    #[serde(rename = "evasao_prevista")]
    pub dropout: u64,
    #[serde(rename = "nao_evasao_prevista")]
    pub retention: u64,
    #[serde(rename = "taxa_evasao_prevista")]
    pub dropout_rate: String,
}

impl Default for Predictions {
    fn default() -> Self {
        Self {
            dropout: 0,
            retention: 0,
            dropout_rate: "0%".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metrics {
    /// Kept as text: the API has sent both `0.42` and `"0.42"`.
    #[serde(rename = "probabilidade_media_evasao")]
    pub average_dropout_probability: String,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            average_dropout_probability: "0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fallback_is_all_zero() {
        let report = Report::fallback();
        assert_eq!(report.message, "");
        assert_eq!(report.summary.total_students, 0);
        assert_eq!(report.summary.analysis_coverage, "0%");
        assert_eq!(report.risk_distribution.total(), 0);
        assert_eq!(report.predictions.dropout, 0);
        assert_eq!(report.predictions.retention, 0);
        assert_eq!(report.predictions.dropout_rate, "0%");
        assert_eq!(report.metrics.average_dropout_probability, "0");
    }

    #[test]
    fn serializes_with_api_field_names() {
        let value = serde_json::to_value(Report::fallback()).unwrap();
        assert_eq!(
            value,
            json!({
                "mensagem": "",
                "resumo_geral": {
                    "total_alunos_cadastrados": 0,
                    "total_analises_realizadas": 0,
                    "alunos_sem_predicao": 0,
                    "cobertura_de_analises": "0%"
                },
                "distribuicao_risco": { "alto_risco": 0, "medio_risco": 0, "baixo_risco": 0 },
                "previsoes": {
                    "evasao_prevista": 0,
                    "nao_evasao_prevista": 0,
                    "taxa_evasao_prevista": "0%"
                },
                "metricas": { "probabilidade_media_evasao": "0" }
            })
        );
    }

    #[test]
    fn risk_counts_follow_level_order() {
        let dist = RiskDistribution {
            high: 5,
            medium: 3,
            low: 2,
        };
        let counts: Vec<u64> = RiskLevel::ALL.iter().map(|l| dist.count(*l)).collect();
        assert_eq!(counts, vec![5, 3, 2]);
        assert_eq!(dist.total(), 10);
    }
}
