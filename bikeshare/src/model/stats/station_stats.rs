use std::time::Instant;

use crate::model::stats::frequency::{mode_first, value_counts};
use crate::model::stats::value_or_na;
use crate::model::trip::ROUTE_SEPARATOR;
use crate::model::TripTable;
use crate::util::{console, format};

/// the most popular stations and routes.
#[derive(Debug)]
pub struct StationStats {
    pub common_start_station: Option<String>,
    pub common_end_station: Option<String>,
    /// every (start, end) pair whose route count reaches the maximum.
    /// ties are all listed, in first-encountered order.
    pub popular_routes: Vec<(String, String)>,
}

impl StationStats {
    pub fn from_table(table: &TripTable) -> StationStats {
        let common_start_station =
            mode_first(table.trips.iter().map(|t| &t.start_station)).cloned();
        let common_end_station = mode_first(table.trips.iter().map(|t| &t.end_station)).cloned();

        let route_counts = value_counts(table.trips.iter().map(|t| &t.route));
        let max_count = route_counts.first().map(|(_, count)| *count).unwrap_or(0);
        let popular_routes = route_counts
            .iter()
            .take_while(|(_, count)| *count == max_count)
            .map(|(route, _)| split_route(route))
            .collect();

        StationStats {
            common_start_station,
            common_end_station,
            popular_routes,
        }
    }
}

fn split_route(route: &str) -> (String, String) {
    match route.split_once(ROUTE_SEPARATOR) {
        Some((start, end)) => (start.to_string(), end.to_string()),
        None => (route.to_string(), String::new()),
    }
}

pub fn report(table: &TripTable) {
    console::banner("Stations Statistics", '-');
    println!("\nCalculating The Most Popular Stations and Trip...\n");
    let timer = Instant::now();

    let stats = StationStats::from_table(table);

    println!(
        "\nMost Commonly used Start Station ==>  {}",
        value_or_na(&stats.common_start_station)
    );
    println!(
        "\nMost Commonly used End Station ====>  {}",
        value_or_na(&stats.common_end_station)
    );
    println!("\nMost frequent combination of Start Station and End Station trip :\n");
    let headers = vec![String::from("Start Station"), String::from("End Station")];
    let rows: Vec<Vec<String>> = stats
        .popular_routes
        .iter()
        .map(|(start, end)| vec![start.clone(), end.clone()])
        .collect();
    print!("{}", format::render_table(&headers, &rows));

    println!("\nThis took {} seconds.", timer.elapsed().as_secs_f64());
    println!("{}", "-".repeat(40));
}

#[cfg(test)]
mod test {
    use super::StationStats;
    use crate::model::{City, DateFilter, TripTable};

    fn table(csv_text: &str) -> TripTable {
        let reader = csv::Reader::from_reader(csv_text.as_bytes());
        TripTable::from_reader(City::Chicago, &DateFilter::All, &DateFilter::All, reader)
            .expect("should read csv")
    }

    #[test]
    fn test_unique_maximum_route_yields_one_pair() {
        let stats = StationStats::from_table(&table(
            "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-01-02 09:00:00,2017-01-02 09:10:00,600,A,B,Subscriber
1,2017-01-02 10:00:00,2017-01-02 10:10:00,600,A,B,Subscriber
2,2017-01-02 11:00:00,2017-01-02 11:10:00,600,B,C,Subscriber
",
        ));
        assert_eq!(stats.common_start_station.as_deref(), Some("A"));
        assert_eq!(stats.common_end_station.as_deref(), Some("B"));
        assert_eq!(
            stats.popular_routes,
            vec![(String::from("A"), String::from("B"))]
        );
    }

    #[test]
    fn test_tied_maximum_routes_are_all_listed() {
        let stats = StationStats::from_table(&table(
            "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-01-02 09:00:00,2017-01-02 09:10:00,600,A,B,Subscriber
1,2017-01-02 10:00:00,2017-01-02 10:10:00,600,B,C,Subscriber
2,2017-01-02 11:00:00,2017-01-02 11:10:00,600,A,B,Subscriber
3,2017-01-02 12:00:00,2017-01-02 12:10:00,600,B,C,Subscriber
4,2017-01-02 13:00:00,2017-01-02 13:10:00,600,C,D,Subscriber
",
        ));
        assert_eq!(
            stats.popular_routes,
            vec![
                (String::from("A"), String::from("B")),
                (String::from("B"), String::from("C")),
            ]
        );
    }

    #[test]
    fn test_empty_table_has_no_popular_routes() {
        let empty = TripTable {
            city: City::Chicago,
            trips: vec![],
        };
        let stats = StationStats::from_table(&empty);
        assert_eq!(stats.common_start_station, None);
        assert!(stats.popular_routes.is_empty());
    }
}
