//! Formatting helpers for presenting report values.

use time::{Month, OffsetDateTime};

/// Parse the average-probability text the way the dashboard has always read
/// it: surrounding whitespace ignored, anything non-finite rejected.
pub fn parse_probability(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// `"0.42"` → `"42.0%"`, unparsable → `"-"`.
pub fn probability_percent(raw: &str) -> String {
    match parse_probability(raw) {
        Some(value) => format!("{:.1}%", value * 100.0),
        None => "-".to_string(),
    }
}

/// Target width (in percent) of the average-probability progress fill.
pub fn progress_width(raw: &str) -> f64 {
    parse_probability(raw).map(|value| value * 100.0).unwrap_or(0.0)
}

/// Share of `value` in `total` with one decimal, or `"0"` for an empty total.
pub fn format_share(value: u64, total: u64) -> String {
    if total == 0 {
        "0".to_string()
    } else {
        format!("{:.1}", value as f64 / total as f64 * 100.0)
    }
}

/// Parts of the "last updated" line; month names are localized by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStamp {
    pub day: u8,
    pub month: Month,
    pub year: i32,
    pub hour: u8,
    pub minute: u8,
}

impl StatusStamp {
    pub fn at(moment: OffsetDateTime) -> Self {
        Self {
            day: moment.day(),
            month: moment.month(),
            year: moment.year(),
            hour: moment.hour(),
            minute: moment.minute(),
        }
    }

    pub fn now() -> Self {
        Self::at(crate::core::timing::now_local())
    }

    /// Two-digit day, as the long pt-BR date shows it.
    pub fn day_label(&self) -> String {
        format!("{:02}", self.day)
    }

    pub fn time_label(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn probability_renders_with_one_decimal() {
        assert_eq!(probability_percent("0.42"), "42.0%");
        assert_eq!(probability_percent("0"), "0.0%");
        assert_eq!(probability_percent(" 1 "), "100.0%");
        assert_eq!(probability_percent("0.12345"), "12.3%");
    }

    #[test]
    fn non_numeric_probability_renders_dash() {
        assert_eq!(probability_percent("abc"), "-");
        assert_eq!(probability_percent(""), "-");
        assert_eq!(probability_percent("NaN"), "-");
        assert_eq!(probability_percent("inf"), "-");
    }

    #[test]
    fn progress_width_falls_back_to_zero() {
        assert!((progress_width("0.42") - 42.0).abs() < 1e-9);
        assert_eq!(progress_width("n/a"), 0.0);
    }

    #[test]
    fn share_of_empty_total_is_zero() {
        assert_eq!(format_share(0, 0), "0");
        assert_eq!(format_share(5, 10), "50.0");
        assert_eq!(format_share(1, 3), "33.3");
    }

    #[test]
    fn status_stamp_pads_day_and_time() {
        let stamp = StatusStamp::at(datetime!(2026-10-08 09:05 UTC));
        assert_eq!(stamp.day_label(), "08");
        assert_eq!(stamp.month, Month::October);
        assert_eq!(stamp.year, 2026);
        assert_eq!(stamp.time_label(), "09:05");
    }
}
