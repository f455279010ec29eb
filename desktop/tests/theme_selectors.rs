#![cfg(test)]
/*!
Theme selector lint for the desktop build.

The dashboard components emit fixed class names (cards, value slots, charts,
risk list). Each one listed here must keep a rule in the shared theme at
`ui/assets/theme/main.css`. A substring check is enough to catch a dropped or
renamed selector.

When a component's markup changes, adjust REQUIRED_SELECTORS with it.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".dashboard {",
    ".visually-hidden",
    // Header & state banners
    ".header {",
    ".header__title",
    ".status-active",
    ".api-message",
    ".loading-state",
    ".error-state",
    ".error-message",
    ".button--primary",
    // Cards
    ".metrics-grid",
    ".predictions-grid",
    ".metric-card",
    ".prediction-card",
    ".card__value",
    ".progress-bar",
    ".progress-fill",
    // Charts
    ".charts-grid",
    ".chart-card",
    ".chart-card__placeholder",
    ".chart__legend-swatch",
    // Risk list
    ".risk-list",
    ".risk-item {",
    ".risk-item:focus-visible",
    ".risk-item__share",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn progress_fill_animates_width() {
    let rule_start = THEME_CSS
        .find(".progress-fill {")
        .expect("progress fill rule present");
    let rule = &THEME_CSS[rule_start..];
    let rule = &rule[..rule.find('}').unwrap_or(rule.len())];
    assert!(
        rule.contains("transition: width"),
        "progress fill must transition its width"
    );
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 3_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}
