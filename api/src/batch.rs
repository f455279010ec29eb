use serde::Deserialize;

/// Summary the trigger endpoint returns after re-running the analysis.
/// Only used for logging and the header note, so parsing is best effort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnalysisBatch {
    #[serde(rename = "mensagem")]
    pub message: String,
    #[serde(rename = "total_alunos_analisados")]
    pub students_analysed: u64,
    #[serde(rename = "predicoes_criadas")]
    pub predictions_created: u64,
    #[serde(rename = "predicoes_com_erro")]
    pub predictions_failed: u64,
}

impl AnalysisBatch {
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}
