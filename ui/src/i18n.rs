//! Localization for the dashboard.
//!
//! Bundles live under `i18n/<lang-id>/evasao_ui.ftl` and are embedded at
//! compile time. `pt-BR` is the fallback and reference locale; `fl!` checks
//! every lookup against it.
//!
//! ```ignore
//! use crate::t;
//! crate::i18n::init();
//! let title = t!("dashboard-title");
//! ```
use std::sync::Once;

use api::LoadError;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::{I18nEmbedError, LanguageLoader};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use time::Month;
use unic_langid::{langid, LanguageIdentifier};

use crate::core::report::RiskLevel;
use crate::view::{Series, Tooltip};

pub use i18n_embed_fl::fl;

/// `t!("key")` / `t!("key", name = value)` through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain: the package name with `_` for `-`, as `fl!` resolves it.
const DOMAIN: &str = "evasao_ui";

pub const FALLBACK_LANGUAGE: &str = "pt-BR";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> =
    Lazy::new(|| FluentLanguageLoader::new(DOMAIN, langid!("pt-BR")));

static INIT: Once = Once::new();

/// Load the bundles matching the platform's requested languages. Idempotent.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = select(&requested) {
            tracing::warn!(%err, "language selection failed; using {FALLBACK_LANGUAGE}");
        }
    });
}

/// Switch language at runtime. Unparsable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(lang) => lang,
        Err(_) => return Ok(()),
    };
    select(&[lang])
}

/// The isolation flag only reaches bundles that are already loaded, so it is
/// reapplied after every selection. Bidi marks would otherwise leak into SVG
/// titles and plain text.
fn select(requested: &[LanguageIdentifier]) -> Result<(), I18nEmbedError> {
    i18n_embed::select(&*LOADER, &Localizations, requested)?;
    LOADER.set_use_isolating(false);
    Ok(())
}

/// Embedded language tags, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Tag of the bundle currently in use.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

pub fn month_name(month: Month) -> String {
    match month {
        Month::January => crate::t!("month-january"),
        Month::February => crate::t!("month-february"),
        Month::March => crate::t!("month-march"),
        Month::April => crate::t!("month-april"),
        Month::May => crate::t!("month-may"),
        Month::June => crate::t!("month-june"),
        Month::July => crate::t!("month-july"),
        Month::August => crate::t!("month-august"),
        Month::September => crate::t!("month-september"),
        Month::October => crate::t!("month-october"),
        Month::November => crate::t!("month-november"),
        Month::December => crate::t!("month-december"),
    }
}

pub fn series_label(series: Series) -> String {
    match series {
        Series::Risk(RiskLevel::High) => crate::t!("risk-high"),
        Series::Risk(RiskLevel::Medium) => crate::t!("risk-medium"),
        Series::Risk(RiskLevel::Low) => crate::t!("risk-low"),
        Series::PredictedDropout => crate::t!("series-predicted-dropout"),
        Series::PredictedRetention => crate::t!("series-predicted-retention"),
    }
}

/// Hover text for a chart data point. Proportion charts append the share.
pub fn tooltip_text(tooltip: &Tooltip) -> String {
    match &tooltip.share {
        Some(share) => crate::t!(
            "tooltip-risk",
            label = series_label(tooltip.series),
            count = tooltip.value,
            share = share.as_str()
        ),
        None => crate::t!("students-count", count = tooltip.value),
    }
}

/// Banner text for a failed load: the localized prefix around a localized
/// description of the failure.
pub fn error_banner(error: &LoadError) -> String {
    crate::t!("error-banner", message = error_message(error))
}

pub fn error_message(error: &LoadError) -> String {
    match error {
        LoadError::Unreachable { url, reason } => crate::t!(
            "error-unreachable",
            url = url.as_str(),
            reason = reason.as_str()
        ),
        LoadError::TriggerFailed { status, body } => crate::t!(
            "error-trigger-failed",
            status = (*status),
            body = body.as_str()
        ),
        LoadError::FetchFailed { status, body } => crate::t!(
            "error-fetch-failed",
            status = (*status),
            body = body.as_str()
        ),
        LoadError::MalformedResponse { error, .. } => {
            crate::t!("error-malformed", reason = error.as_str())
        }
        LoadError::Timeout { after_ms } => crate::t!("error-timeout", after_ms = (*after_ms)),
        LoadError::Network { step, reason } => crate::t!(
            "error-network",
            step = step_label(step),
            reason = reason.as_str()
        ),
    }
}

fn step_label(step: &str) -> String {
    match step {
        "analysis trigger" => crate::t!("step-analysis-trigger"),
        "report fetch" => crate::t!("step-report-fetch"),
        "client setup" => crate::t!("step-client-setup"),
        other => other.to_string(),
    }
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
