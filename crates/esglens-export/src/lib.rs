//! esglens-export
//!
//! CSV serialization of the currently filtered record set: UTF-8 with a
//! BOM prefix for spreadsheet compatibility, Korean header row matching
//! the visible table columns, date-stamped file names.

pub mod csv;
pub mod error;

pub use csv::{
    CsvDocument, donations_csv, emissions_csv, employments_csv, export_filename, write_csv,
};
pub use error::ExportError;
