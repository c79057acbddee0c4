//! Export writers for a finished batch.
//!
//! Three artifacts leave the pipeline: the cleaned contact CSV, the
//! per-input-row detailed audit CSV, and the summary JSON. Both CSV files
//! are written with a UTF-8 BOM so Hebrew content opens correctly in
//! spreadsheet tools.

mod common;
mod csv_export;
mod summary_json;

pub use common::{UTF8_BOM, corrected_headers, corrected_values};
pub use csv_export::{write_cleaned_csv, write_detailed_csv};
pub use summary_json::write_summary_json;
