//! Dioxus components of the dashboard page.

mod cards;
mod charts;
mod dashboard;
mod header;
mod risk_list;

pub use cards::{MetricCards, PredictionCards};
pub use charts::{PredictionChart, RiskChart};
pub use dashboard::Dashboard;
pub use header::Header;
pub use risk_list::RiskList;
