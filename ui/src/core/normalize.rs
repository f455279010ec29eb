//! Turns whatever the report endpoint sent into a fully populated [`Report`].
//!
//! The function is total: non-object payloads, `null`s and wrong-typed
//! fields all collapse to the documented defaults instead of failing.

use serde_json::Value;

use crate::core::report::{Metrics, Predictions, Report, RiskDistribution, Summary};

pub fn normalize(raw: &Value) -> Report {
    let summary = raw.get("resumo_geral");
    let risk = raw.get("distribuicao_risco");
    let predictions = raw.get("previsoes");
    let metrics = raw.get("metricas");

    Report {
        message: text(raw.get("mensagem"), ""),
        summary: Summary {
            total_students: count(field(summary, "total_alunos_cadastrados")),
            total_analyses: count(field(summary, "total_analises_realizadas")),
            students_without_prediction: count(field(summary, "alunos_sem_predicao")),
            analysis_coverage: text(field(summary, "cobertura_de_analises"), "0%"),
        },
        risk_distribution: RiskDistribution {
            high: count(field(risk, "alto_risco")),
            medium: count(field(risk, "medio_risco")),
            low: count(field(risk, "baixo_risco")),
        },
        predictions: Predictions {
            dropout: count(field(predictions, "evasao_prevista")),
            retention: count(field(predictions, "nao_evasao_prevista")),
            dropout_rate: text(field(predictions, "taxa_evasao_prevista"), "0%"),
        },
        metrics: Metrics {
            average_dropout_probability: text(field(metrics, "probabilidade_media_evasao"), "0"),
        },
    }
}

fn field<'a>(section: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    section.and_then(|section| section.get(key))
}

/// Non-negative integer counts. Floats are truncated, numeric strings are
/// accepted, anything else is zero.
fn count(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(number)) => number
            .as_u64()
            .or_else(|| number.as_f64().and_then(non_negative)),
        Some(Value::String(raw)) => {
            let raw = raw.trim();
            raw.parse::<u64>()
                .ok()
                .or_else(|| raw.parse::<f64>().ok().and_then(non_negative))
        }
        _ => None,
    }
    .unwrap_or(0)
}

fn non_negative(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0).then(|| value.trunc() as u64)
}

/// Text fields keep strings verbatim and stringify scalars, so a numeric
/// probability of `0.42` becomes `"0.42"`.
fn text(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(raw)) => raw.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> Value {
        json!({
            "mensagem": "Relatório gerado com sucesso",
            "resumo_geral": {
                "total_alunos_cadastrados": 120,
                "total_analises_realizadas": 110,
                "alunos_sem_predicao": 10,
                "cobertura_de_analises": "91.67%"
            },
            "distribuicao_risco": { "alto_risco": 20, "medio_risco": 30, "baixo_risco": 60 },
            "previsoes": {
                "evasao_prevista": 25,
                "nao_evasao_prevista": 85,
                "taxa_evasao_prevista": "22.73%"
            },
            "metricas": { "probabilidade_media_evasao": 0.3141 }
        })
    }

    #[test]
    fn empty_object_yields_every_default() {
        assert_eq!(normalize(&json!({})), Report::fallback());
    }

    #[test]
    fn non_object_payloads_yield_defaults() {
        for raw in [json!(null), json!([1, 2, 3]), json!("relatorio"), json!(42)] {
            assert_eq!(normalize(&raw), Report::fallback(), "payload {raw}");
        }
    }

    #[test]
    fn partial_sections_keep_present_values() {
        let report = normalize(&json!({
            "resumo_geral": { "total_alunos_cadastrados": 7 },
            "distribuicao_risco": { "alto_risco": 5, "medio_risco": 3, "baixo_risco": 2 },
            "previsoes": null
        }));
        assert_eq!(report.summary.total_students, 7);
        assert_eq!(report.summary.total_analyses, 0);
        assert_eq!(report.summary.analysis_coverage, "0%");
        assert_eq!(report.risk_distribution.high, 5);
        assert_eq!(report.risk_distribution.medium, 3);
        assert_eq!(report.risk_distribution.low, 2);
        assert_eq!(report.predictions.dropout_rate, "0%");
        assert_eq!(report.metrics.average_dropout_probability, "0");
    }

    #[test]
    fn full_payload_only_changes_probability_type() {
        let raw = full_payload();
        let normalized = serde_json::to_value(normalize(&raw)).unwrap();

        let mut expected = raw.clone();
        expected["metricas"]["probabilidade_media_evasao"] = json!("0.3141");
        assert_eq!(normalized, expected);
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        let payloads = [
            json!({}),
            json!({ "metricas": { "probabilidade_media_evasao": 0.5 } }),
            json!({ "previsoes": { "evasao_prevista": "12" }, "mensagem": 3 }),
            full_payload(),
        ];
        for raw in payloads {
            let once = normalize(&raw);
            let twice = normalize(&serde_json::to_value(&once).unwrap());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn probability_is_always_text() {
        let from_number = normalize(&json!({ "metricas": { "probabilidade_media_evasao": 0.42 } }));
        assert_eq!(from_number.metrics.average_dropout_probability, "0.42");

        let from_int = normalize(&json!({ "metricas": { "probabilidade_media_evasao": 1 } }));
        assert_eq!(from_int.metrics.average_dropout_probability, "1");

        let from_text = normalize(&json!({ "metricas": { "probabilidade_media_evasao": "0.42" } }));
        assert_eq!(from_text.metrics.average_dropout_probability, "0.42");

        let from_null = normalize(&json!({ "metricas": { "probabilidade_media_evasao": null } }));
        assert_eq!(from_null.metrics.average_dropout_probability, "0");
    }

    #[test]
    fn odd_counts_are_coerced_or_zeroed() {
        let report = normalize(&json!({
            "distribuicao_risco": {
                "alto_risco": "4",
                "medio_risco": 2.9,
                "baixo_risco": -3
            },
            "previsoes": { "evasao_prevista": true, "nao_evasao_prevista": { "n": 1 } }
        }));
        assert_eq!(report.risk_distribution.high, 4);
        assert_eq!(report.risk_distribution.medium, 2);
        assert_eq!(report.risk_distribution.low, 0);
        assert_eq!(report.predictions.dropout, 0);
        assert_eq!(report.predictions.retention, 0);
    }
}
