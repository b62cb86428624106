use crate::model::City;

/// month names accepted by the month filter. the published datasets only
/// cover the first half of the year, so the vocabulary stops at June.
pub const MONTH_CHOICES: [&str; 6] = ["January", "February", "March", "April", "May", "June"];

/// weekday names accepted by the day filter, in calendar order.
pub const DAY_CHOICES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// a validated month or day selection. a literal `All` token anywhere in the
/// user's input collapses the whole selection to no filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFilter {
    All,
    Members(Vec<String>),
}

impl DateFilter {
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            DateFilter::All => true,
            DateFilter::Members(members) => members.iter().any(|m| m == value),
        }
    }
}

/// the user-chosen city plus the month/day subsets applied at load time.
#[derive(Debug, Clone)]
pub struct FilterSelection {
    pub city: City,
    pub months: DateFilter,
    pub days: DateFilter,
}

/// validates one comma-separated selection against a name vocabulary.
/// spaces are stripped and each token is title-cased before matching, so
/// `"monday, TUESDAY"` parses the same as `"Monday,Tuesday"`. returns `None`
/// when any token falls outside the vocabulary.
pub fn parse_selection(input: &str, choices: &[&str]) -> Option<DateFilter> {
    let cleaned = input.replace(' ', "");
    let tokens: Vec<String> = cleaned.split(',').map(title_case).collect();
    if tokens.iter().any(|t| t == "All") {
        return Some(DateFilter::All);
    }
    if tokens.iter().all(|t| choices.contains(&t.as_str())) {
        Some(DateFilter::Members(tokens))
    } else {
        None
    }
}

fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

#[cfg(test)]
mod test {
    use super::{parse_selection, DateFilter, DAY_CHOICES, MONTH_CHOICES};

    #[test]
    fn test_single_month_parses() {
        let filter = parse_selection("january", &MONTH_CHOICES).expect("should parse");
        assert_eq!(filter, DateFilter::Members(vec![String::from("January")]));
    }

    #[test]
    fn test_multiple_months_with_spaces_and_case() {
        let filter = parse_selection(" january , MAY", &MONTH_CHOICES).expect("should parse");
        assert_eq!(
            filter,
            DateFilter::Members(vec![String::from("January"), String::from("May")])
        );
    }

    #[test]
    fn test_all_anywhere_collapses_selection() {
        let filter = parse_selection("january,all,may", &MONTH_CHOICES).expect("should parse");
        assert_eq!(filter, DateFilter::All);
        assert!(filter.accepts("December"));
    }

    #[test]
    fn test_month_outside_vocabulary_is_rejected() {
        // only January..June are supported
        assert_eq!(parse_selection("july", &MONTH_CHOICES), None);
        assert_eq!(parse_selection("january,smarch", &MONTH_CHOICES), None);
        assert_eq!(parse_selection("", &MONTH_CHOICES), None);
        assert_eq!(parse_selection("january,", &MONTH_CHOICES), None);
    }

    #[test]
    fn test_day_selection() {
        let filter = parse_selection("monday,sunday", &DAY_CHOICES).expect("should parse");
        assert!(filter.accepts("Monday"));
        assert!(filter.accepts("Sunday"));
        assert!(!filter.accepts("Friday"));
    }
}
