//! Console table rendering for NDC records.

use crate::models::NdcRecord;

const COLUMNS: [&str; 9] = [
    "Name", "RxCUI", "NDC", "NDC9", "NDC10", "Desc", "Mfg", "Route", "Strength",
];

/// Widest a free-text cell may grow before truncation.
const MAX_CELL_WIDTH: usize = 36;

/// Render the record set as an aligned table with a trailing count line.
pub fn render_table(records: &[NdcRecord]) -> String {
    let rows: Vec<[String; 9]> = records.iter().map(row_cells).collect();

    let mut widths: Vec<usize> = COLUMNS.iter().map(|c| c.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for (i, column) in COLUMNS.iter().enumerate() {
        out.push_str(&format!("{:<width$}  ", column, width = widths[i]));
    }
    out.push('\n');
    for width in &widths {
        out.push_str(&"-".repeat(*width));
        out.push_str("  ");
    }
    out.push('\n');

    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            out.push_str(&format!("{:<width$}  ", cell, width = widths[i]));
        }
        out.push('\n');
    }

    out.push_str(&format!("\n{} record(s)\n", records.len()));
    out
}

fn row_cells(record: &NdcRecord) -> [String; 9] {
    [
        clip(&record.name),
        record.rxcui.clone(),
        record.ndc.clone(),
        record.ndc9.clone(),
        record.ndc10.clone(),
        clip(&record.description),
        clip(&record.manufacturer),
        clip(&record.route),
        clip(&record.strength),
    ]
}

/// Truncate a free-text cell to the maximum column width.
fn clip(s: &str) -> String {
    if s.chars().count() <= MAX_CELL_WIDTH {
        return s.to_string();
    }
    let mut clipped: String = s.chars().take(MAX_CELL_WIDTH - 3).collect();
    clipped.push_str("...");
    clipped
}
