//! Runtime configuration handed to the dashboard through Dioxus context.

use api::ApiConfig;
use serde::Deserialize;

use crate::core::scheduler::RefreshPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api: ApiConfig,
    pub refresh: RefreshPolicy,
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig::from_env(),
            refresh: RefreshPolicy::default(),
        }
    }
}
