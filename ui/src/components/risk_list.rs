use dioxus::prelude::*;

use crate::core::platform;
use crate::core::report::RiskLevel;
use crate::core::timing;
use crate::i18n;
use crate::t;
use crate::view::{ChartId, DashboardView, Interactive, Series, Tooltip};

#[component]
pub fn RiskList(view: Signal<DashboardView>, flash_ms: u64) -> Element {
    let spec = view.read().chart(ChartId::Risk).map(|chart| chart.spec.clone());

    rsx! {
        section { class: "risk-card",
            h2 { class: "risk-card__title", {t!("risk-list-title")} }
            ul { class: "risk-list",
                for (index, level) in RiskLevel::ALL.into_iter().enumerate() {
                    RiskItem {
                        key: "{index}",
                        view,
                        level,
                        tooltip: spec.as_ref().and_then(|s| s.tooltip(index)),
                        flash_ms,
                    }
                }
            }
        }
    }
}

#[component]
fn RiskItem(
    view: Signal<DashboardView>,
    level: RiskLevel,
    #[props(!optional)] tooltip: Option<Tooltip>,
    flash_ms: u64,
) -> Element {
    let mut flashing = use_signal(|| false);
    let interactive = view.read().is_bound(Interactive::RiskItem(level));

    let mut activate = move || {
        if !interactive {
            return;
        }
        flashing.set(true);
        platform::spawn_future(async move {
            timing::sleep_ms(flash_ms).await;
            flashing.set(false);
        });
    };

    let label = i18n::series_label(Series::Risk(level));
    let count = tooltip.as_ref().map(|tip| tip.value).unwrap_or(0);
    let share = tooltip
        .as_ref()
        .and_then(|tip| tip.share.clone())
        .unwrap_or_else(|| "0".to_string());
    let students = t!("students-count", count = count);
    let level_class = match level {
        RiskLevel::High => "risk-item--high",
        RiskLevel::Medium => "risk-item--medium",
        RiskLevel::Low => "risk-item--low",
    };
    let background = if flashing() {
        "var(--color-secondary)"
    } else {
        "var(--color-surface)"
    };

    rsx! {
        li {
            class: "risk-item {level_class}",
            style: "background-color: {background}",
            tabindex: "0",
            role: "button",
            onclick: move |_| activate(),
            onkeydown: move |evt| {
                let key = evt.key().to_string().to_lowercase();
                if key == " " || key == "space" || key == "spacebar" || key == "enter" {
                    evt.prevent_default();
                    activate();
                }
            },
            span { class: "risk-item__swatch", style: "background-color: {Series::Risk(level).color()}" }
            span { class: "risk-item__label", "{label}" }
            span { class: "risk-item__count", "{students}" }
            span { class: "risk-item__share", "{share}%" }
        }
    }
}
