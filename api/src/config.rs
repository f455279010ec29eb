//! Connection settings for the analysis API.

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const TRIGGER_PATH: &str = "/api/analises/analisar_todos_estudantes/";
pub const REPORT_PATH: &str = "/api/analises/gerar_relatorio_analises/";
/// Deadline for one whole load cycle (probe, trigger and report together).
pub const DEFAULT_TIMEOUT_MS: u64 = 12_000;

const BASE_URL_VAR: &str = "EVASAO_API_BASE_URL";
const TIMEOUT_VAR: &str = "EVASAO_API_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub trigger_path: String,
    pub report_path: String,
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            trigger_path: TRIGGER_PATH.to_string(),
            report_path: REPORT_PATH.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ApiConfig {
    /// Defaults overridden by `EVASAO_API_BASE_URL` / `EVASAO_API_TIMEOUT_MS`.
    ///
    /// Native builds read the variables at runtime; web builds can only see
    /// what was present when the bundle was compiled.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(base_url) = env_value(BASE_URL_VAR) {
            config.base_url = base_url;
        }
        if let Some(timeout_ms) = env_value(TIMEOUT_VAR).and_then(|raw| raw.trim().parse().ok()) {
            config.timeout_ms = timeout_ms;
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }

    pub fn liveness_url(&self) -> String {
        self.url("/")
    }

    pub fn trigger_url(&self) -> String {
        self.url(&self.trigger_path)
    }

    pub fn report_url(&self) -> String {
        self.url(&self.report_path)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
fn env_value(key: &str) -> Option<String> {
    let value = match key {
        BASE_URL_VAR => option_env!("EVASAO_API_BASE_URL"),
        TIMEOUT_VAR => option_env!("EVASAO_API_TIMEOUT_MS"),
        _ => None,
    };
    value
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
}
