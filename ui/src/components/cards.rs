use dioxus::prelude::*;

use crate::t;
use crate::view::{CardRole, DashboardView, Interactive, TextSlot};

#[component]
pub fn MetricCards(view: Signal<DashboardView>) -> Element {
    rsx! {
        section { class: "metrics-grid",
            Card { view, role: CardRole::Metric, slot: TextSlot::TotalStudents, label: t!("metric-total-students") }
            Card { view, role: CardRole::Metric, slot: TextSlot::TotalAnalyses, label: t!("metric-total-analyses") }
            Card { view, role: CardRole::Metric, slot: TextSlot::StudentsWithoutPrediction, label: t!("metric-without-prediction") }
            Card { view, role: CardRole::Metric, slot: TextSlot::AnalysisCoverage, label: t!("metric-coverage") }
            Card {
                view,
                role: CardRole::Metric,
                slot: TextSlot::AverageDropoutProbability,
                label: t!("metric-average-probability"),
                show_progress: true,
            }
        }
    }
}

#[component]
pub fn PredictionCards(view: Signal<DashboardView>) -> Element {
    rsx! {
        section { class: "predictions-grid",
            Card { view, role: CardRole::Prediction, slot: TextSlot::PredictedDropout, label: t!("prediction-dropout") }
            Card { view, role: CardRole::Prediction, slot: TextSlot::PredictedRetention, label: t!("prediction-retention") }
            Card { view, role: CardRole::Prediction, slot: TextSlot::PredictedDropoutRate, label: t!("prediction-rate") }
        }
    }
}

#[component]
fn Card(
    view: Signal<DashboardView>,
    role: CardRole,
    slot: TextSlot,
    label: String,
    #[props(default)] show_progress: bool,
) -> Element {
    let mut hovered = use_signal(|| false);

    let (interactive, value, width) = {
        let current = view.read();
        (
            current.is_bound(Interactive::Card(role, slot)),
            current.text(slot).unwrap_or("-").to_string(),
            current.progress_width(),
        )
    };

    let card_class = match role {
        CardRole::Metric => "metric-card",
        CardRole::Prediction => "prediction-card",
    };
    let transform = if hovered() {
        "translateY(-4px) scale(1.02)"
    } else {
        "translateY(0) scale(1)"
    };

    rsx! {
        div {
            class: "{card_class}",
            style: "transform: {transform}",
            onmouseenter: move |_| {
                if interactive {
                    hovered.set(true);
                }
            },
            onmouseleave: move |_| {
                if interactive {
                    hovered.set(false);
                }
            },
            span { class: "card__label", "{label}" }
            strong { class: "card__value {slot.class_name()}", "{value}" }
            if show_progress {
                div { class: "progress-bar",
                    div { class: "progress-fill", style: "width: {width}%" }
                }
            }
        }
    }
}
