use std::rc::Rc;

use api::{HttpReportSource, LoadError};
use dioxus::prelude::*;
use tracing::{error, info};

use crate::components::{Header, MetricCards, PredictionCards, PredictionChart, RiskChart, RiskList};
use crate::core::config::DashboardConfig;
use crate::core::format::StatusStamp;
use crate::core::loader::{LoadOutcome, LoadProgress, ReportLoader};
use crate::core::platform::{self, Platform};
use crate::core::report::Report;
use crate::core::scheduler::{RefreshScheduler, RefreshTrigger};
use crate::core::state::DashboardState;
use crate::core::timing;
use crate::view::{Binder, DashboardView};

type HttpLoader = ReportLoader<HttpReportSource>;

#[component]
pub fn Dashboard() -> Element {
    let config = try_use_context::<DashboardConfig>().unwrap_or_default();
    let policy = config.refresh;

    let state = use_signal(DashboardState::default);
    let view = use_signal(DashboardView::new);
    let mut stamp = use_signal(StatusStamp::now);

    let loader: Option<Rc<HttpLoader>> = use_hook(|| {
        match HttpReportSource::new(config.api.clone()) {
            Ok(source) => Some(Rc::new(ReportLoader::new(source, config.api.timeout_ms))),
            Err(err) => {
                error!(%err, "could not build HTTP client; every load will use the fallback");
                None
            }
        }
    });

    let refresh = move |trigger: RefreshTrigger| {
        platform::spawn_future(run_cycle(
            loader.clone(),
            state,
            view,
            trigger,
            Binder::new(&policy),
        ));
    };

    let scheduler = use_hook(|| RefreshScheduler::new(policy));

    use_hook({
        let scheduler = scheduler.clone();
        let periodic = refresh.clone();
        let startup = refresh.clone();
        move || {
            info!(
                platform = Platform::current().as_str(),
                base_url = %config.api.base_url,
                refresh_every_ms = policy.refresh_every_ms,
                "dashboard mounted"
            );
            startup(RefreshTrigger::Startup);
            platform::spawn_future(
                scheduler
                    .refresh_ticker()
                    .run(move |_| periodic(RefreshTrigger::Periodic)),
            );
            platform::spawn_future(
                scheduler
                    .status_ticker()
                    .run(move |_| stamp.set(StatusStamp::now())),
            );
        }
    });

    use_drop({
        let scheduler = scheduler.clone();
        move || scheduler.teardown()
    });

    let loading = state.read().loading;
    let root_class = if loading { "dashboard loading" } else { "dashboard" };

    rsx! {
        div { class: "{root_class}",
            Header {
                state,
                view,
                stamp,
                on_refresh: move |_| refresh(RefreshTrigger::Manual),
            }

            MetricCards { view }

            section { class: "charts-grid",
                RiskChart { view }
                PredictionChart { view }
            }

            PredictionCards { view }

            RiskList { view, flash_ms: policy.flash_ms }
        }
    }
}

/// Load, store, render. Rendering runs whatever the load outcome was.
async fn run_cycle(
    loader: Option<Rc<HttpLoader>>,
    mut state: Signal<DashboardState>,
    mut view: Signal<DashboardView>,
    trigger: RefreshTrigger,
    binder: Binder,
) {
    info!(trigger = trigger.as_str(), "refreshing dashboard");
    state.with_mut(|s| s.begin_cycle(trigger));

    let outcome = match loader {
        Some(loader) => {
            let mut progress = state;
            loader.load(&mut progress).await
        }
        None => LoadOutcome {
            report: Report::fallback(),
            error: Some(LoadError::Network {
                step: "client setup",
                reason: "HTTP client unavailable".to_string(),
            }),
            batch: None,
        },
    };
    state.with_mut(|s| s.apply(outcome));

    let report = state.peek().report.clone();
    let pending = view.with_mut(|v| {
        binder.render(&report, v);
        v.take_pending_width()
    });

    if let Some(pending) = pending {
        timing::sleep_ms(pending.delay_ms).await;
        view.with_mut(|v| v.finish_width(pending));
    }
}

impl LoadProgress for Signal<DashboardState> {
    fn loading_started(&mut self) {
        self.with_mut(|s| s.loading_started());
    }

    fn loading_finished(&mut self) {
        self.with_mut(|s| s.loading_finished());
    }

    fn failed(&mut self, error: &LoadError) {
        self.with_mut(|s| s.failed(error));
    }
}
