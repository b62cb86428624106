use std::io::BufRead;
use std::path::Path;

use crate::app::{filters, raw_data};
use crate::model::stats::{duration_stats, station_stats, time_stats, user_stats};
use crate::model::{BikeshareError, FilterSelection, TripTable};
use crate::util::console;

/// one of the seven menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    LoadData,
    RawData,
    TimeStats,
    StationStats,
    DurationStats,
    UserStats,
    Exit,
}

/// accepts the digits 1 through 7 (leading zeros included, as in `"01"`).
pub fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    let cleaned = input.trim();
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    match cleaned.parse::<u32>() {
        Ok(1) => Some(MenuChoice::LoadData),
        Ok(2) => Some(MenuChoice::RawData),
        Ok(3) => Some(MenuChoice::TimeStats),
        Ok(4) => Some(MenuChoice::StationStats),
        Ok(5) => Some(MenuChoice::DurationStats),
        Ok(6) => Some(MenuChoice::UserStats),
        Ok(7) => Some(MenuChoice::Exit),
        _ => None,
    }
}

fn print_menu() {
    console::rule('-');
    println!("| Load Data [1] | Raw Data [2] | Time Statistics [3] | Station Statistics [4] |");
    console::rule('-');
    println!("|    Duration Statistics [5]   | User Statistics [6] | Exit Application   [7] |");
    console::rule('-');
}

/// the session loop. the working table starts absent, is replaced wholesale
/// by each successful load, and gates the report and viewer actions until
/// then. exit requires a literal `yes` confirmation.
pub fn run<R: BufRead>(input: &mut R, data_dir: &Path) -> Result<(), BikeshareError> {
    console::clear();
    let mut table: Option<TripTable> = None;
    loop {
        print_menu();
        let choice = loop {
            let line = console::prompt(input, "Choose Menu Item from 1 to 7 : ")?;
            match parse_menu_choice(&line) {
                Some(choice) => break choice,
                None => println!("\nInvalid input !!!.\n"),
            }
        };

        match choice {
            MenuChoice::LoadData => {
                console::clear();
                let selection = filters::collect(input)?;
                match load_data(&selection, data_dir) {
                    Ok(loaded) => table = Some(loaded),
                    Err(e) => {
                        log::error!("failed loading {} dataset: {e}", selection.city);
                        println!("\nCould not load data for {} : {e}\n", selection.city);
                    }
                }
            }
            MenuChoice::Exit => {
                console::clear();
                let confirmation = console::prompt_raw(
                    input,
                    "\nWould you really like to exit? Enter yes or no.",
                )?;
                if confirmation == "yes" {
                    console::clear();
                    break;
                }
            }
            action => match &table {
                None => {
                    console::clear();
                    println!();
                    println!("Data have not been loaded. Try to load a Data Set.");
                    println!();
                }
                Some(table) => {
                    console::clear();
                    match action {
                        MenuChoice::RawData => raw_data::run(input, table)?,
                        MenuChoice::TimeStats => time_stats::report(table),
                        MenuChoice::StationStats => station_stats::report(table),
                        MenuChoice::DurationStats => duration_stats::report(table),
                        MenuChoice::UserStats => user_stats::report(table),
                        MenuChoice::LoadData | MenuChoice::Exit => {}
                    }
                    println!();
                }
            },
        }
    }
    Ok(())
}

fn load_data(
    selection: &FilterSelection,
    data_dir: &Path,
) -> Result<TripTable, BikeshareError> {
    console::banner("Data Loading", '-');
    println!("Loading Data....");
    let table = TripTable::load(selection.city, &selection.months, &selection.days, data_dir)?;
    console::banner("!!! Data Loaded Successfully !!!", ' ');
    println!();
    Ok(table)
}
