//! Shared UI crate for the dropout-risk dashboard: report loading, view
//! binding and the Dioxus components both launchers mount.

pub mod components;
pub mod core;
pub mod i18n;
pub mod view;
pub mod views;

pub use crate::core::config::DashboardConfig;
