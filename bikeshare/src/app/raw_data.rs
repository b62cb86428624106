use std::io::BufRead;
use std::ops::Range;

use crate::model::{BikeshareError, Trip, TripTable};
use crate::util::{console, format};

/// one answer to the pagination prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    Next,
    Stop,
    Jump(usize),
    Invalid,
}

/// interprets a pagination answer: `y`/`yes` continues, `n`/`no` stops, a
/// bare integer within `[0, row_count)` jumps to that row.
pub fn parse_viewer_command(input: &str, row_count: usize) -> ViewerCommand {
    let cleaned = input.trim().to_lowercase();
    match cleaned.as_str() {
        "y" | "yes" => ViewerCommand::Next,
        "n" | "no" => ViewerCommand::Stop,
        other => {
            if !other.is_empty() && other.chars().all(|c| c.is_ascii_digit()) {
                match other.parse::<usize>() {
                    Ok(row) if row < row_count => ViewerCommand::Jump(row),
                    _ => ViewerCommand::Invalid,
                }
            } else {
                ViewerCommand::Invalid
            }
        }
    }
}

/// the row range a page starting at `start` covers.
pub fn visible_range(start: usize, page_size: usize, row_count: usize) -> Range<usize> {
    let end = start.saturating_add(page_size).min(row_count);
    start.min(row_count)..end
}

/// pages through the working table. shows the schema and the first page,
/// then advances, jumps or stops on each prompt answer until the cursor
/// passes the end of the table.
pub fn run<R: BufRead>(input: &mut R, table: &TripTable) -> Result<(), BikeshareError> {
    let page_size = loop {
        let line = console::prompt(input, "Enter the number of rows to be displayed : ")?;
        match line.parse::<usize>() {
            Ok(n) if n >= 1 => break n,
            _ => println!("\nInvalid input.\n"),
        }
    };

    console::banner("Displaying raw Data", '-');
    println!("\nData Columns details :\n");
    print_schema(table);
    println!("\nThe {} first rows of the Data : \n", page_size);
    print_rows(table, visible_range(0, page_size, table.len()));
    println!();

    let mut cursor = page_size;
    while cursor <= table.len() {
        let message = format!(
            "Would you display the next {} lines of raw data? \"y\" for yes, \"n\" for no.\nYou can even jump to a specified row where the row number between 0 and {} : ",
            page_size,
            table.len().saturating_sub(1)
        );
        let line = console::prompt(input, &message)?;
        console::rule('-');
        match parse_viewer_command(&line, table.len()) {
            ViewerCommand::Next => {
                print_rows(table, visible_range(cursor, page_size, table.len()));
                cursor += page_size;
            }
            ViewerCommand::Stop => {
                console::clear();
                break;
            }
            ViewerCommand::Jump(row) => {
                print_rows(table, visible_range(row, page_size, table.len()));
                cursor = row + page_size;
            }
            ViewerCommand::Invalid => println!("\nInvalid input.\n"),
        }
    }
    Ok(())
}

/// column names, non-null counts and types for the schema summary. the
/// derived route column is excluded; the derived month and weekday columns
/// are shown; demographic columns only appear for cities that carry them.
fn schema_rows(table: &TripTable) -> Vec<Vec<String>> {
    let total = table.len();
    let non_null = |count: usize| format!("{count} non-null");
    let mut rows: Vec<Vec<String>> = vec![
        vec![
            String::from("Start Time"),
            non_null(total),
            String::from("datetime"),
        ],
        vec![
            String::from("End Time"),
            non_null(total),
            String::from("text"),
        ],
        vec![
            String::from("Start Station"),
            non_null(total),
            String::from("text"),
        ],
        vec![
            String::from("End Station"),
            non_null(total),
            String::from("text"),
        ],
        vec![
            String::from("Trip Duration"),
            non_null(total),
            String::from("seconds"),
        ],
        vec![
            String::from("User Type"),
            non_null(table.trips.iter().filter(|t| t.user_type.is_some()).count()),
            String::from("category"),
        ],
    ];
    if table.city.has_demographics() {
        rows.push(vec![
            String::from("Gender"),
            non_null(table.trips.iter().filter(|t| t.gender.is_some()).count()),
            String::from("category"),
        ]);
        rows.push(vec![
            String::from("Birth Year"),
            non_null(table.trips.iter().filter(|t| t.birth_year.is_some()).count()),
            String::from("year"),
        ]);
    }
    rows.push(vec![
        String::from("month"),
        non_null(total),
        String::from("text"),
    ]);
    rows.push(vec![
        String::from("day_of_week"),
        non_null(total),
        String::from("text"),
    ]);
    rows
}

fn print_schema(table: &TripTable) {
    let headers = vec![
        String::from("Column"),
        String::from("Non-Null Count"),
        String::from("Type"),
    ];
    print!("{}", format::render_table(&headers, &schema_rows(table)));
    println!("{} rows total", table.len());
}

/// header row for the row printouts: an index column, the source columns
/// present for this city, and the derived month and weekday columns.
fn display_headers(table: &TripTable) -> Vec<String> {
    let mut headers = vec![
        String::new(),
        String::from("Start Time"),
        String::from("End Time"),
        String::from("Start Station"),
        String::from("End Station"),
        String::from("Trip Duration"),
        String::from("User Type"),
    ];
    if table.city.has_demographics() {
        headers.push(String::from("Gender"));
        headers.push(String::from("Birth Year"));
    }
    headers.push(String::from("month"));
    headers.push(String::from("day_of_week"));
    headers
}

fn print_rows(table: &TripTable, range: Range<usize>) {
    let headers = display_headers(table);
    let rows: Vec<Vec<String>> = range
        .clone()
        .zip(table.trips[range].iter())
        .map(|(index, trip)| display_row(table, index, trip))
        .collect();
    print!("{}", format::render_table(&headers, &rows));
}

fn display_row(table: &TripTable, index: usize, trip: &Trip) -> Vec<String> {
    let mut row = vec![
        index.to_string(),
        trip.start_time.format(crate::model::trip::TIME_FORMAT).to_string(),
        trip.end_time.clone(),
        trip.start_station.clone(),
        trip.end_station.clone(),
        trip.duration_seconds.to_string(),
        trip.user_type.clone().unwrap_or_default(),
    ];
    if table.city.has_demographics() {
        row.push(trip.gender.clone().unwrap_or_default());
        row.push(
            trip.birth_year
                .map(|year| (year as i32).to_string())
                .unwrap_or_default(),
        );
    }
    row.push(trip.month.clone());
    row.push(trip.day_of_week.clone());
    row
}
