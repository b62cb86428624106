use chrono::{NaiveDateTime, Timelike};
use serde::Deserialize;

use crate::model::BikeshareError;

/// separator used to build the synthetic route identifier. station stats
/// split on this to decompose a route back into its station pair.
pub const ROUTE_SEPARATOR: &str = "==>";

/// timestamp layout used by all three dataset files.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// serde view of one CSV record, keyed by the original header names.
/// the washington file carries no `Gender` or `Birth Year` columns, so those
/// default to `None`. a leading unnamed index column in the source files is
/// ignored.
#[derive(Debug, Deserialize)]
pub struct RawTripRow {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

/// one trip in the working table, with the start timestamp parsed and the
/// derived month, weekday and route columns appended.
#[derive(Debug, Clone)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: String,
    pub start_station: String,
    pub end_station: String,
    pub duration_seconds: f64,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
    /// full month name derived from the start timestamp
    pub month: String,
    /// full weekday name derived from the start timestamp
    pub day_of_week: String,
    /// `"<start station>==><end station>"`
    pub route: String,
}

impl Trip {
    pub fn new(raw: RawTripRow) -> Result<Trip, BikeshareError> {
        let start_time = NaiveDateTime::parse_from_str(&raw.start_time, TIME_FORMAT).map_err(
            |source| BikeshareError::TimestampParseError {
                value: raw.start_time.clone(),
                source,
            },
        )?;
        let month = start_time.format("%B").to_string();
        let day_of_week = start_time.format("%A").to_string();
        let route = format!(
            "{}{}{}",
            raw.start_station, ROUTE_SEPARATOR, raw.end_station
        );
        Ok(Trip {
            start_time,
            end_time: raw.end_time,
            start_station: raw.start_station,
            end_station: raw.end_station,
            duration_seconds: raw.trip_duration,
            user_type: raw.user_type,
            gender: raw.gender,
            birth_year: raw.birth_year,
            month,
            day_of_week,
            route,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }
}
