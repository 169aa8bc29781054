//! Output formatting helpers for human-readable and JSON output.

use reorder::Item;
use serde::Serialize;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Print any serialisable value as a single line of JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// Render a position for a table cell; unpositioned entities show a dash.
pub fn format_position(position: Option<f64>) -> String {
    match position {
        Some(p) => p.to_string(),
        None => "-".to_string(),
    }
}

/// Table rows for a sequence of items: index, id, position.
pub fn item_rows(items: &[Item]) -> Vec<Vec<String>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| vec![i.to_string(), item.id.clone(), format_position(item.position)])
        .collect()
}

/// Format a table with aligned columns.
///
/// `headers` and each row in `rows` must have the same length. Returns an
/// empty string when there are no rows.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    // Calculate column widths (max of header and all row values)
    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = line(headers.to_vec());
    for row in rows {
        out.push('\n');
        out.push_str(&line(row.iter().take(col_count).map(String::as_str).collect()));
    }
    out
}

/// Print a table with aligned columns in human-readable format.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let table = render_table(headers, rows);
    if !table.is_empty() {
        println!("{table}");
    }
}
