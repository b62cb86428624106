use std::io::BufRead;

use crate::model::selection::{parse_selection, DAY_CHOICES, MONTH_CHOICES};
use crate::model::{BikeshareError, City, FilterSelection};
use crate::util::console;

/// asks the user for a city, a month selection and a day selection,
/// reprompting until each answer validates. never fails on bad input, only
/// when the input stream itself closes.
pub fn collect<R: BufRead>(input: &mut R) -> Result<FilterSelection, BikeshareError> {
    println!("Hello! Let's explore some US bikeshare data!\n");

    let city = loop {
        let line = console::prompt_raw(
            input,
            "\nPlease, choose One City from the list [chicago, new york city, washington] :",
        )?;
        match City::from_input(&line) {
            Some(city) => break city,
            None => println!("Invalid input, try again!!!"),
        }
    };

    let months = loop {
        let line = console::prompt(
            input,
            "\nMake your Month choice from the list [all, january, february, ... , june]\nYou can choose more than One Month. You have to separate the Months by a comma:",
        )?;
        match parse_selection(&line, &MONTH_CHOICES) {
            Some(filter) => break filter,
            None => println!("\nInvalid input, try again!!!\n"),
        }
    };

    let days = loop {
        let line = console::prompt(
            input,
            "\nMake your Day choice from the list [all, monday, tuesday, ... sunday] \nYou can choose more than One Day. You have to separate the Days by a comma:",
        )?;
        match parse_selection(&line, &DAY_CHOICES) {
            Some(filter) => break filter,
            None => println!("\nInvalid input, try again!!!\n"),
        }
    };

    Ok(FilterSelection { city, months, days })
}

#[cfg(test)]
mod test {
    use super::collect;
    use crate::model::{City, DateFilter};
    use std::io::Cursor;

    #[test]
    fn test_collect_accepts_valid_answers() {
        let mut input = Cursor::new("chicago\nall\nmonday,tuesday\n");
        let selection = collect(&mut input).expect("should collect filters");
        assert_eq!(selection.city, City::Chicago);
        assert_eq!(selection.months, DateFilter::All);
        assert_eq!(
            selection.days,
            DateFilter::Members(vec![String::from("Monday"), String::from("Tuesday")])
        );
    }

    #[test]
    fn test_collect_reprompts_after_invalid_answers() {
        // a padded city answer counts as invalid; the exact name passes
        let mut input = Cursor::new("boston\n chicago \nchicago\njuly\njanuary\nfunday\nall\n");
        let selection = collect(&mut input).expect("should collect filters");
        assert_eq!(selection.city, City::Chicago);
        assert_eq!(
            selection.months,
            DateFilter::Members(vec![String::from("January")])
        );
        assert_eq!(selection.days, DateFilter::All);
    }
}
