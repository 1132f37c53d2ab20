//! Output sinks for resolved NDC records.

mod csv;
mod table;

pub use csv::*;
pub use table::*;
