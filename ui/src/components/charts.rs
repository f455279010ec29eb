//! SVG renderings of the two chart slots.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use dioxus::prelude::*;

use crate::i18n;
use crate::t;
use crate::view::{ChartId, ChartSpec, DashboardView};

const DOUGHNUT_SIZE: f64 = 200.0;
const DOUGHNUT_OUTER: f64 = 90.0;
/// 60% cutout.
const DOUGHNUT_INNER: f64 = DOUGHNUT_OUTER * 0.6;

const BAR_WIDTH: f64 = 320.0;
const BAR_HEIGHT: f64 = 200.0;
const BAR_BASELINE: f64 = 180.0;
const BAR_MAX: f64 = 160.0;

#[component]
pub fn RiskChart(view: Signal<DashboardView>) -> Element {
    let instance = view.read().chart(ChartId::Risk).cloned();
    let body = match instance {
        Some(instance) => render_doughnut(&instance.spec),
        None => placeholder(),
    };

    rsx! {
        section { class: "chart-card",
            h2 { class: "chart-card__title", {t!("chart-risk-title")} }
            {body}
        }
    }
}

#[component]
pub fn PredictionChart(view: Signal<DashboardView>) -> Element {
    let instance = view.read().chart(ChartId::Predictions).cloned();
    let body = match instance {
        Some(instance) => render_bars(&instance.spec),
        None => placeholder(),
    };

    rsx! {
        section { class: "chart-card",
            h2 { class: "chart-card__title", {t!("chart-predictions-title")} }
            {body}
        }
    }
}

fn placeholder() -> Element {
    rsx! {
        p { class: "chart-card__placeholder", {t!("chart-empty")} }
    }
}

fn render_doughnut(spec: &ChartSpec) -> Element {
    let center = DOUGHNUT_SIZE / 2.0;
    let segments = doughnut_segments(&spec.values, center, DOUGHNUT_OUTER, DOUGHNUT_INNER);
    let empty_ring = full_ring(center, DOUGHNUT_OUTER, DOUGHNUT_INNER);

    let slices: Vec<(String, &'static str, String)> = segments
        .into_iter()
        .map(|segment| {
            let color = spec.series[segment.index].color();
            let tooltip = spec
                .tooltip(segment.index)
                .map(|tip| i18n::tooltip_text(&tip))
                .unwrap_or_default();
            (segment.path, color, tooltip)
        })
        .collect();
    let legend = legend_entries(spec);
    let empty = slices.is_empty();

    rsx! {
        div { class: "chart chart--doughnut",
            svg {
                class: "chart__canvas",
                view_box: "0 0 {DOUGHNUT_SIZE} {DOUGHNUT_SIZE}",
                role: "img",
                if empty {
                    path { class: "chart__empty", d: "{empty_ring}", fill: "#ECEBD5", fill_rule: "evenodd" }
                }
                for (path, color, tooltip) in slices.into_iter() {
                    path {
                        class: "chart__slice",
                        d: "{path}",
                        fill: "{color}",
                        fill_rule: "evenodd",
                        stroke: "#ffffff",
                        stroke_width: "2",
                        title { "{tooltip}" }
                    }
                }
            }
            ul { class: "chart__legend",
                for (label, color) in legend.into_iter() {
                    li { class: "chart__legend-item",
                        span { class: "chart__legend-swatch", style: "background-color: {color}" }
                        "{label}"
                    }
                }
            }
        }
    }
}

fn render_bars(spec: &ChartSpec) -> Element {
    let heights = bar_heights(&spec.values, BAR_MAX);
    let slot = BAR_WIDTH / spec.values.len().max(1) as f64;
    let bar_width = slot * 0.5;

    let bars: Vec<(f64, f64, f64, &'static str, String, String)> = heights
        .iter()
        .enumerate()
        .map(|(index, height)| {
            let x = slot * index as f64 + (slot - bar_width) / 2.0;
            let y = BAR_BASELINE - height;
            let color = spec.series[index].color();
            let tooltip = spec
                .tooltip(index)
                .map(|tip| i18n::tooltip_text(&tip))
                .unwrap_or_default();
            let label = i18n::series_label(spec.series[index]);
            (x, y, *height, color, tooltip, label)
        })
        .collect();

    rsx! {
        div { class: "chart chart--bar",
            svg {
                class: "chart__canvas",
                view_box: "0 0 {BAR_WIDTH} {BAR_HEIGHT}",
                role: "img",
                line {
                    class: "chart__axis",
                    x1: "0",
                    y1: "{BAR_BASELINE}",
                    x2: "{BAR_WIDTH}",
                    y2: "{BAR_BASELINE}",
                    stroke: "rgba(0, 0, 0, 0.1)",
                }
                for (x, y, height, color, tooltip, label) in bars.into_iter() {
                    g { class: "chart__bar",
                        rect {
                            x: "{x}",
                            y: "{y}",
                            width: "{bar_width}",
                            height: "{height}",
                            rx: "6",
                            fill: "{color}",
                            title { "{tooltip}" }
                        }
                        text {
                            class: "chart__bar-label",
                            x: "{x + bar_width / 2.0}",
                            y: "{BAR_HEIGHT - 4.0}",
                            text_anchor: "middle",
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

fn legend_entries(spec: &ChartSpec) -> Vec<(String, &'static str)> {
    spec.series
        .iter()
        .map(|series| (i18n::series_label(*series), series.color()))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
struct Segment {
    index: usize,
    path: String,
}

/// Ring slices starting at 12 o'clock, clockwise. Zero values get no slice.
fn doughnut_segments(values: &[u64], center: f64, outer: f64, inner: f64) -> Vec<Segment> {
    let total: u64 = values.iter().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut start = -FRAC_PI_2;
    let mut segments = Vec::new();
    for (index, value) in values.iter().copied().enumerate() {
        if value == 0 {
            continue;
        }
        let sweep = value as f64 / total as f64 * TAU;
        let path = if value == total {
            full_ring(center, outer, inner)
        } else {
            annular_sector(center, outer, inner, start, start + sweep)
        };
        segments.push(Segment { index, path });
        start += sweep;
    }
    segments
}

fn point(center: f64, radius: f64, angle: f64) -> (f64, f64) {
    (center + radius * angle.cos(), center + radius * angle.sin())
}

fn annular_sector(center: f64, outer: f64, inner: f64, from: f64, to: f64) -> String {
    let large_arc = u8::from(to - from > PI);
    let (x0, y0) = point(center, outer, from);
    let (x1, y1) = point(center, outer, to);
    let (x2, y2) = point(center, inner, to);
    let (x3, y3) = point(center, inner, from);
    format!(
        "M {x0:.3} {y0:.3} A {outer} {outer} 0 {large_arc} 1 {x1:.3} {y1:.3} \
         L {x2:.3} {y2:.3} A {inner} {inner} 0 {large_arc} 0 {x3:.3} {y3:.3} Z"
    )
}

/// A single arc cannot close a circle, so the ring is two half circles per
/// edge, filled with the even-odd rule.
fn full_ring(center: f64, outer: f64, inner: f64) -> String {
    let (left_o, right_o) = (center - outer, center + outer);
    let (left_i, right_i) = (center - inner, center + inner);
    format!(
        "M {left_o} {center} A {outer} {outer} 0 1 1 {right_o} {center} \
         A {outer} {outer} 0 1 1 {left_o} {center} Z \
         M {left_i} {center} A {inner} {inner} 0 1 0 {right_i} {center} \
         A {inner} {inner} 0 1 0 {left_i} {center} Z"
    )
}

/// Heights scaled so the largest value fills `max_height`; all zero when
/// every value is zero.
fn bar_heights(values: &[u64], max_height: f64) -> Vec<f64> {
    let max = values.iter().copied().max().unwrap_or(0);
    values
        .iter()
        .map(|value| {
            if max == 0 {
                0.0
            } else {
                *value as f64 / max as f64 * max_height
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dataset_draws_no_slices() {
        assert!(doughnut_segments(&[0, 0, 0], 100.0, 90.0, 54.0).is_empty());
    }

    #[test]
    fn one_slice_per_non_zero_value() {
        let segments = doughnut_segments(&[5, 0, 2], 100.0, 90.0, 54.0);
        let indices: Vec<usize> = segments.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 2]);
        assert!(segments[0].path.starts_with("M 100.000 10.000"));
    }

    #[test]
    fn majority_slice_uses_large_arc() {
        let segments = doughnut_segments(&[3, 1], 100.0, 90.0, 54.0);
        assert!(segments[0].path.contains(" 0 1 1 "));
        assert!(segments[1].path.contains(" 0 0 1 "));
    }

    #[test]
    fn single_value_becomes_full_ring() {
        let segments = doughnut_segments(&[0, 4, 0], 100.0, 90.0, 54.0);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].index, 1);
        assert_eq!(segments[0].path.matches('M').count(), 2);
    }

    #[test]
    fn bars_scale_to_largest_value() {
        assert_eq!(bar_heights(&[4, 8], 160.0), vec![80.0, 160.0]);
        assert_eq!(bar_heights(&[0, 0], 160.0), vec![0.0, 0.0]);
    }
}
