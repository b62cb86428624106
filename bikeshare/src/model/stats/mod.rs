pub mod duration_stats;
pub mod frequency;
pub mod pivot;
pub mod station_stats;
pub mod time_stats;
pub mod user_stats;

pub use pivot::PivotTable;

/// rounds to 2 decimal places, matching the console's minute displays.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// console text for a statistic that has no value on an empty table.
pub(crate) fn value_or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("n/a")
}
