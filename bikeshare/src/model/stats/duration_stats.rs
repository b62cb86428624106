use std::time::Instant;

use crate::model::selection::DAY_CHOICES;
use crate::model::stats::pivot::{PivotTable, MONTH_ORDER};
use crate::model::stats::round2;
use crate::model::TripTable;
use crate::util::console;

/// total and average trip duration, in minutes.
#[derive(Debug)]
pub struct DurationStats {
    pub total_minutes: f64,
    pub mean_minutes: f64,
    pub mean_minutes_by_month_and_day: PivotTable,
}

impl DurationStats {
    pub fn from_table(table: &TripTable) -> DurationStats {
        let total_seconds: f64 = table.trips.iter().map(|t| t.duration_seconds).sum();
        let total_minutes = round2(total_seconds / 60.0);
        let mean_minutes = if table.is_empty() {
            0.0
        } else {
            round2(total_seconds / 60.0 / table.len() as f64)
        };
        let entries: Vec<(&str, &str, f64)> = table
            .trips
            .iter()
            .map(|t| {
                (
                    t.month.as_str(),
                    t.day_of_week.as_str(),
                    t.duration_seconds / 60.0,
                )
            })
            .collect();
        let mean_minutes_by_month_and_day = PivotTable::mean(
            &entries,
            Some(MONTH_ORDER.as_slice()),
            Some(DAY_CHOICES.as_slice()),
        );
        DurationStats {
            total_minutes,
            mean_minutes,
            mean_minutes_by_month_and_day,
        }
    }
}

pub fn report(table: &TripTable) {
    console::banner("Trips Duration Statistics", '-');
    println!("\nCalculating Trip Duration...\n");
    let timer = Instant::now();

    let stats = DurationStats::from_table(table);

    println!("\nTotal travel time ==>  {:.2} Minutes.", stats.total_minutes);
    println!("\nMean travel time ===>  {:.2} Minutes.", stats.mean_minutes);
    println!("\nMonths Vs Days by Trip Duration Mean (in Minutes) ===> ");
    print!("{}", stats.mean_minutes_by_month_and_day);

    println!("\nThis took {} seconds.", timer.elapsed().as_secs_f64());
    println!("{}", "-".repeat(40));
}

#[cfg(test)]
mod test {
    use super::DurationStats;
    use crate::model::{City, DateFilter, TripTable};

    const CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-01-02 09:00:00,2017-01-02 09:10:00,600,A,B,Subscriber
1,2017-01-02 10:00:00,2017-01-02 10:20:00,1200,B,A,Subscriber
2,2017-02-01 11:00:00,2017-02-01 11:05:30,330,A,B,Customer
";

    fn table() -> TripTable {
        let reader = csv::Reader::from_reader(CSV.as_bytes());
        TripTable::from_reader(City::Chicago, &DateFilter::All, &DateFilter::All, reader)
            .expect("should read csv")
    }

    #[test]
    fn test_total_and_mean_minutes() {
        let stats = DurationStats::from_table(&table());
        // 2130 seconds = 35.5 minutes
        assert_eq!(stats.total_minutes, 35.5);
        // 35.5 / 3 = 11.8333.. rounds to 11.83
        assert_eq!(stats.mean_minutes, 11.83);
    }

    #[test]
    fn test_mean_pivot_in_minutes() {
        let stats = DurationStats::from_table(&table());
        let pivot = &stats.mean_minutes_by_month_and_day;
        // (10 + 20) / 2 minutes on January Mondays
        assert_eq!(pivot.cell("January", "Monday"), Some(15.0));
        assert_eq!(pivot.cell("February", "Wednesday"), Some(5.5));
    }

    #[test]
    fn test_empty_table_reports_zero() {
        let empty = TripTable {
            city: City::Chicago,
            trips: vec![],
        };
        let stats = DurationStats::from_table(&empty);
        assert_eq!(stats.total_minutes, 0.0);
        assert_eq!(stats.mean_minutes, 0.0);
    }
}
