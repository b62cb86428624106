use std::time::Instant;

use crate::model::selection::DAY_CHOICES;
use crate::model::stats::frequency::mode_first;
use crate::model::stats::pivot::{PivotTable, MONTH_ORDER};
use crate::model::stats::value_or_na;
use crate::model::TripTable;
use crate::util::console;

/// the most frequent times of travel.
#[derive(Debug)]
pub struct TimeStats {
    pub common_month: Option<String>,
    pub common_day: Option<String>,
    pub common_start_hour: Option<u32>,
    pub rentals_by_month_and_day: PivotTable,
}

impl TimeStats {
    pub fn from_table(table: &TripTable) -> TimeStats {
        let common_month = mode_first(table.trips.iter().map(|t| &t.month)).cloned();
        let common_day = mode_first(table.trips.iter().map(|t| &t.day_of_week)).cloned();
        let hours: Vec<u32> = table.trips.iter().map(|t| t.start_hour()).collect();
        let common_start_hour = mode_first(hours.iter()).copied();
        let pairs: Vec<(&str, &str)> = table
            .trips
            .iter()
            .map(|t| (t.month.as_str(), t.day_of_week.as_str()))
            .collect();
        let rentals_by_month_and_day = PivotTable::count(
            &pairs,
            Some(MONTH_ORDER.as_slice()),
            Some(DAY_CHOICES.as_slice()),
        );
        TimeStats {
            common_month,
            common_day,
            common_start_hour,
            rentals_by_month_and_day,
        }
    }
}

pub fn report(table: &TripTable) {
    console::banner("Time Statistics", '-');
    println!("\nCalculating The Most Frequent Times of Travel...\n");
    let timer = Instant::now();

    let stats = TimeStats::from_table(table);

    println!("\nMost Common Month ========>  {}", value_or_na(&stats.common_month));
    println!(
        "\nMost Common Day of week ==>  {}",
        value_or_na(&stats.common_day)
    );
    match stats.common_start_hour {
        Some(hour) => println!("\nMost Common Start Hour ===> {hour}H"),
        None => println!("\nMost Common Start Hour ===> n/a"),
    }
    println!("\nMonths Vs Days by Number of Rentals ===>\n");
    print!("{}", stats.rentals_by_month_and_day);

    println!("\nThis took {} seconds.", timer.elapsed().as_secs_f64());
    println!("{}", "-".repeat(40));
}
