use std::collections::HashMap;
use std::fmt::Display;

use itertools::Itertools;

use crate::util::format;

/// full month vocabulary in calendar order, used to order pivot rows.
/// derived months can fall outside the six filterable ones, so all twelve
/// are listed here.
pub const MONTH_ORDER: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// a cross-tabulation over two label axes. only labels present in the data
/// appear; cells with no contributing rows are empty.
#[derive(Debug)]
pub struct PivotTable {
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    pub cells: Vec<Vec<Option<f64>>>,
    /// decimal places used when rendering cell values
    pub precision: usize,
}

impl PivotTable {
    /// counts rows per (row label, column label) pair.
    pub fn count(
        pairs: &[(&str, &str)],
        row_order: Option<&[&str]>,
        col_order: Option<&[&str]>,
    ) -> PivotTable {
        let mut counts: HashMap<(&str, &str), f64> = HashMap::new();
        for pair in pairs {
            *counts.entry(*pair).or_insert(0.0) += 1.0;
        }
        let row_labels = ordered_labels(pairs.iter().map(|(r, _)| *r), row_order);
        let col_labels = ordered_labels(pairs.iter().map(|(_, c)| *c), col_order);
        let cells = fill_cells(&row_labels, &col_labels, &counts);
        PivotTable {
            row_labels,
            col_labels,
            cells,
            precision: 0,
        }
    }

    /// averages the value per (row label, column label) pair.
    pub fn mean(
        entries: &[(&str, &str, f64)],
        row_order: Option<&[&str]>,
        col_order: Option<&[&str]>,
    ) -> PivotTable {
        let mut sums: HashMap<(&str, &str), f64> = HashMap::new();
        let mut counts: HashMap<(&str, &str), f64> = HashMap::new();
        for (row, col, value) in entries {
            *sums.entry((*row, *col)).or_insert(0.0) += value;
            *counts.entry((*row, *col)).or_insert(0.0) += 1.0;
        }
        let means: HashMap<(&str, &str), f64> = sums
            .into_iter()
            .map(|(key, sum)| (key, sum / counts[&key]))
            .collect();
        let row_labels = ordered_labels(entries.iter().map(|(r, _, _)| *r), row_order);
        let col_labels = ordered_labels(entries.iter().map(|(_, c, _)| *c), col_order);
        let cells = fill_cells(&row_labels, &col_labels, &means);
        PivotTable {
            row_labels,
            col_labels,
            cells,
            precision: 2,
        }
    }

    pub fn cell(&self, row: &str, col: &str) -> Option<f64> {
        let row_idx = self.row_labels.iter().position(|r| r == row)?;
        let col_idx = self.col_labels.iter().position(|c| c == col)?;
        self.cells[row_idx][col_idx]
    }
}

/// deduplicates labels, keeping the given ordering when one is provided and
/// falling back to alphabetical otherwise.
fn ordered_labels<'a, I>(values: I, order: Option<&[&str]>) -> Vec<String>
where
    I: Iterator<Item = &'a str>,
{
    let present: Vec<&str> = values.unique().collect();
    match order {
        Some(order) => order
            .iter()
            .filter(|label| present.contains(*label))
            .map(|label| label.to_string())
            .collect(),
        None => present
            .into_iter()
            .sorted()
            .map(|label| label.to_string())
            .collect(),
    }
}

fn fill_cells(
    row_labels: &[String],
    col_labels: &[String],
    values: &HashMap<(&str, &str), f64>,
) -> Vec<Vec<Option<f64>>> {
    row_labels
        .iter()
        .map(|row| {
            col_labels
                .iter()
                .map(|col| values.get(&(row.as_str(), col.as_str())).copied())
                .collect()
        })
        .collect()
}

impl Display for PivotTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut headers = vec![String::new()];
        headers.extend(self.col_labels.iter().cloned());
        let rows: Vec<Vec<String>> = self
            .row_labels
            .iter()
            .zip(self.cells.iter())
            .map(|(label, cells)| {
                let mut row = vec![label.clone()];
                row.extend(cells.iter().map(|cell| match cell {
                    Some(value) => format!("{:.prec$}", value, prec = self.precision),
                    None => String::new(),
                }));
                row
            })
            .collect();
        write!(f, "{}", format::render_table(&headers, &rows))
    }
}

#[cfg(test)]
mod test {
    use super::{PivotTable, MONTH_ORDER};
    use crate::model::selection::DAY_CHOICES;

    #[test]
    fn test_count_orders_labels_by_calendar() {
        let pairs = vec![
            ("March", "Friday"),
            ("January", "Monday"),
            ("March", "Monday"),
            ("January", "Monday"),
        ];
        let pivot = PivotTable::count(&pairs, Some(MONTH_ORDER.as_slice()), Some(DAY_CHOICES.as_slice()));
        assert_eq!(pivot.row_labels, vec!["January", "March"]);
        assert_eq!(pivot.col_labels, vec!["Monday", "Friday"]);
        assert_eq!(pivot.cell("January", "Monday"), Some(2.0));
        assert_eq!(pivot.cell("March", "Friday"), Some(1.0));
        // no contributing rows
        assert_eq!(pivot.cell("January", "Friday"), None);
    }

    #[test]
    fn test_mean_averages_cell_values() {
        let entries = vec![
            ("January", "Monday", 10.0),
            ("January", "Monday", 20.0),
            ("February", "Sunday", 7.0),
        ];
        let pivot = PivotTable::mean(&entries, Some(MONTH_ORDER.as_slice()), Some(DAY_CHOICES.as_slice()));
        assert_eq!(pivot.cell("January", "Monday"), Some(15.0));
        assert_eq!(pivot.cell("February", "Sunday"), Some(7.0));
        assert_eq!(pivot.precision, 2);
    }

    #[test]
    fn test_unordered_labels_sort_alphabetically() {
        let pairs = vec![("Subscriber", "Monday"), ("Customer", "Monday")];
        let pivot = PivotTable::count(&pairs, None, Some(DAY_CHOICES.as_slice()));
        assert_eq!(pivot.row_labels, vec!["Customer", "Subscriber"]);
    }

    #[test]
    fn test_display_renders_counts_as_integers() {
        let pairs = vec![("January", "Monday")];
        let pivot = PivotTable::count(&pairs, Some(MONTH_ORDER.as_slice()), Some(DAY_CHOICES.as_slice()));
        let rendered = pivot.to_string();
        let expected = "\
+---------+--------+
|         | Monday |
+---------+--------+
| January | 1      |
+---------+--------+
";
        assert_eq!(rendered, expected);
    }
}
