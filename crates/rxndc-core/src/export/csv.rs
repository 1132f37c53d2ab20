//! CSV export of NDC records.

use std::fs;
use std::io;
use std::path::Path;

use crate::models::NdcRecord;

/// Column order for the header and every row.
const HEADER: &str = "rxcui,term_type,name,ndc,ndc9,ndc10,spl_id,description,manufacturer,route,strength";

/// Render the full record set as CSV with a header row.
pub fn to_csv(records: &[NdcRecord]) -> String {
    let mut csv = String::new();
    csv.push_str(HEADER);
    csv.push('\n');

    for record in records {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{},{}\n",
            escape_csv(&record.rxcui),
            escape_csv(&record.term_type),
            escape_csv(&record.name),
            escape_csv(&record.ndc),
            escape_csv(&record.ndc9),
            escape_csv(&record.ndc10),
            escape_csv(&record.spl_id),
            escape_csv(&record.description),
            escape_csv(&record.manufacturer),
            escape_csv(&record.route),
            escape_csv(&record.strength),
        ));
    }

    csv
}

/// Write the record set to `path`, replacing any existing file.
pub fn write_csv(records: &[NdcRecord], path: &Path) -> io::Result<()> {
    fs::write(path, to_csv(records))
}

/// Escape a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
