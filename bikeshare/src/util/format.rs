//! formatting functions for displaying rows of values as ASCII tables

/// limit width to 50 chars per column for readability
const MAX_COLUMN_WIDTH: usize = 50;

/// calculate column widths by scanning the header and all rows
fn calculate_column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let mut col_widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (col_idx, value) in row.iter().enumerate() {
            if col_idx < col_widths.len() {
                col_widths[col_idx] = col_widths[col_idx].max(value.chars().count());
            }
        }
    }
    for width in &mut col_widths {
        *width = (*width).min(MAX_COLUMN_WIDTH);
    }
    col_widths
}

/// draw a border line with given column widths
fn draw_border(col_widths: &[usize]) -> String {
    let mut border = String::new();
    border.push('+');
    for width in col_widths {
        border.push_str(&"-".repeat(width + 2));
        border.push('+');
    }
    border.push('\n');
    border
}

/// draw one row of cells, truncated and left-aligned to the column widths
fn draw_row(cells: &[String], col_widths: &[usize]) -> String {
    let mut line = String::new();
    line.push('|');
    for (col_idx, width) in col_widths.iter().enumerate() {
        let value = cells.get(col_idx).map(String::as_str).unwrap_or("");
        let value: String = value.chars().take(*width).collect();
        line.push_str(&format!(" {:<width$} |", value, width = width));
    }
    line.push('\n');
    line
}

/// renders headers and rows as a bordered fixed-width ASCII table.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let col_widths = calculate_column_widths(headers, rows);
    let mut out = String::new();
    out.push_str(&draw_border(&col_widths));
    out.push_str(&draw_row(headers, &col_widths));
    out.push_str(&draw_border(&col_widths));
    for row in rows {
        out.push_str(&draw_row(row, &col_widths));
    }
    out.push_str(&draw_border(&col_widths));
    out
}

#[cfg(test)]
mod test {
    use super::render_table;

    fn owned(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_render_table_pads_to_widest_cell() {
        let headers = owned(&["Station", "Counts"]);
        let rows = vec![owned(&["Clark & Lake", "12"]), owned(&["Wells St", "3"])];
        let table = render_table(&headers, &rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "+--------------+--------+");
        assert_eq!(lines[1], "| Station      | Counts |");
        assert_eq!(lines[3], "| Clark & Lake | 12     |");
        // every line is the same width
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }

    #[test]
    fn test_render_table_truncates_very_wide_cells() {
        let headers = owned(&["Station"]);
        let wide = "x".repeat(80);
        let rows = vec![vec![wide]];
        let table = render_table(&headers, &rows);
        for line in table.lines() {
            // 50 char cap plus "| " and " |" framing
            assert_eq!(line.chars().count(), 54);
        }
    }
}
