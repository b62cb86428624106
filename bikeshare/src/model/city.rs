use std::fmt::Display;

/// the three cities with published trip datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// matches user input against the city names, ignoring case only.
    /// surrounding whitespace is not forgiven; anything outside the fixed
    /// set is rejected.
    pub fn from_input(input: &str) -> Option<City> {
        match input.to_lowercase().as_str() {
            "chicago" => Some(City::Chicago),
            "new york city" => Some(City::NewYorkCity),
            "washington" => Some(City::Washington),
            _ => None,
        }
    }

    /// fixed dataset filename for this city.
    pub fn filename(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// the washington dataset carries no gender or birth year columns.
    pub fn has_demographics(&self) -> bool {
        !matches!(self, City::Washington)
    }
}

impl Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        };
        write!(f, "{}", name)
    }
}
