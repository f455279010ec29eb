//! Platform-agnostic dashboard logic: the report model, its normalizer, the
//! load pipeline and the refresh timers. Nothing in here touches Dioxus
//! rendering, so all of it is testable on the host.

pub mod config;
pub mod format;
pub mod loader;
pub mod normalize;
pub mod platform;
pub mod report;
pub mod scheduler;
pub mod state;
pub mod timing;
