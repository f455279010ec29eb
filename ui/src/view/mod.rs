//! View binding: how a [`Report`](crate::core::report::Report) reaches the
//! page.
//!
//! [`binder::Binder`] writes into a [`surface::ViewSurface`], a small
//! capability trait ("set text", "animate width", "chart slot", "bind
//! interactions"). The Dioxus components render from
//! [`dashboard_view::DashboardView`], the surface implementation kept in a
//! signal; tests use their own in-memory surfaces.

pub mod binder;
pub mod charts;
pub mod dashboard_view;
pub mod surface;

pub use binder::{render, Binder};
pub use charts::{ChartInstance, ChartKind, ChartSlot, ChartSpec, Series, Tooltip};
pub use dashboard_view::{DashboardView, PendingWidth};
pub use surface::{CardRole, ChartId, Interactive, TextSlot, ViewSurface};
