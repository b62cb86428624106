use std::time::Instant;

use crate::model::selection::DAY_CHOICES;
use crate::model::stats::frequency::{mode_first, value_counts};
use crate::model::stats::pivot::{PivotTable, MONTH_ORDER};
use crate::model::TripTable;
use crate::util::{console, format};

/// label used for rows with no recorded gender.
pub const MISSING_LABEL: &str = "(missing)";

/// user demographics, only available for cities whose datasets carry the
/// gender and birth year columns.
#[derive(Debug)]
pub struct Demographics {
    pub gender_counts: Vec<(String, usize)>,
    pub earliest_birth_year: Option<i32>,
    pub most_recent_birth_year: Option<i32>,
    pub most_common_birth_year: Option<i32>,
}

/// rental counts per user type, plus demographics where available.
#[derive(Debug)]
pub struct UserStats {
    pub user_type_counts: Vec<(String, usize)>,
    pub rentals_by_type_and_day: PivotTable,
    pub rentals_by_type_and_month: PivotTable,
    pub demographics: Option<Demographics>,
}

impl UserStats {
    pub fn from_table(table: &TripTable) -> UserStats {
        // rows without a user type are excluded from the counts and pivots
        let user_type_counts = value_counts(table.trips.iter().filter_map(|t| t.user_type.as_ref()))
            .into_iter()
            .map(|(user_type, count)| (user_type.clone(), count))
            .collect();

        let day_pairs: Vec<(&str, &str)> = table
            .trips
            .iter()
            .filter_map(|t| {
                t.user_type
                    .as_deref()
                    .map(|user_type| (user_type, t.day_of_week.as_str()))
            })
            .collect();
        let rentals_by_type_and_day =
            PivotTable::count(&day_pairs, None, Some(DAY_CHOICES.as_slice()));

        let month_pairs: Vec<(&str, &str)> = table
            .trips
            .iter()
            .filter_map(|t| {
                t.user_type
                    .as_deref()
                    .map(|user_type| (user_type, t.month.as_str()))
            })
            .collect();
        let rentals_by_type_and_month =
            PivotTable::count(&month_pairs, None, Some(MONTH_ORDER.as_slice()));

        let demographics = table
            .city
            .has_demographics()
            .then(|| demographics(table));

        UserStats {
            user_type_counts,
            rentals_by_type_and_day,
            rentals_by_type_and_month,
            demographics,
        }
    }
}

fn demographics(table: &TripTable) -> Demographics {
    // missing genders count as their own category
    let gender_labels: Vec<String> = table
        .trips
        .iter()
        .map(|t| {
            t.gender
                .clone()
                .unwrap_or_else(|| String::from(MISSING_LABEL))
        })
        .collect();
    let gender_counts = value_counts(gender_labels.iter())
        .into_iter()
        .map(|(gender, count)| (gender.clone(), count))
        .collect();

    let birth_years: Vec<i32> = table
        .trips
        .iter()
        .filter_map(|t| t.birth_year.map(|year| year as i32))
        .collect();
    Demographics {
        gender_counts,
        earliest_birth_year: birth_years.iter().min().copied(),
        most_recent_birth_year: birth_years.iter().max().copied(),
        most_common_birth_year: mode_first(birth_years.iter()).copied(),
    }
}

pub fn report(table: &TripTable) {
    console::banner("Users Statistics", '-');
    println!("\nCalculating User Stats...");
    let timer = Instant::now();

    let stats = UserStats::from_table(table);

    println!("\nCounts of user types =======>");
    print!("{}", counts_table("User Type", &stats.user_type_counts));

    println!("\nUser Types Vs Days by Number of Rentals =======>");
    print!("{}", stats.rentals_by_type_and_day);

    println!("\nUser Types Vs Months by Number of Rentals =======>");
    print!("{}", stats.rentals_by_type_and_month);

    match &stats.demographics {
        Some(demographics) => {
            println!("\nCounts of gender ===========>");
            print!("{}", counts_table("Gender", &demographics.gender_counts));
            println!(
                "\nEarliest year of birth =====> {}",
                year_or_na(demographics.earliest_birth_year)
            );
            println!(
                "\nMost recent year of birth ==> {}",
                year_or_na(demographics.most_recent_birth_year)
            );
            println!(
                "\nMost common year of birth ==> {}",
                year_or_na(demographics.most_common_birth_year)
            );
        }
        None => {
            let city = table.city;
            println!("\nCounts of gender ===========> Sorry! No Gender data for : {city}");
            println!("\nEarliest year of birth =====> Sorry! No birth data for : {city}");
            println!("\nMost recent year of birth ==> Sorry! No birth data for : {city}");
            println!("\nMost common year of birth ==> Sorry! No birth data for : {city}");
        }
    }

    println!("\nThis took {} seconds.", timer.elapsed().as_secs_f64());
    println!("{}", "-".repeat(40));
}

fn counts_table(label: &str, counts: &[(String, usize)]) -> String {
    let headers = vec![String::from(label), String::from("Counts")];
    let rows: Vec<Vec<String>> = counts
        .iter()
        .map(|(value, count)| vec![value.clone(), count.to_string()])
        .collect();
    format::render_table(&headers, &rows)
}

fn year_or_na(year: Option<i32>) -> String {
    match year {
        Some(year) => year.to_string(),
        None => String::from("n/a"),
    }
}
