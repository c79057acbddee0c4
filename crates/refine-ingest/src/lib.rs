//! CSV ingestion and column-mapping application.
//!
//! Reads the uploaded contact file into raw records (header order
//! preserved, UTF-8 BOM tolerated) and remaps each row into the canonical
//! contact fields the prompt builder works with.

pub mod csv_table;
pub mod mapping;

pub use csv_table::{ContactTable, read_contacts_csv};
pub use mapping::{apply_mapping, single_row_csv};
