#![deny(unsafe_code)]

//! CSV ingestion for raw civil-registry exports.
//!
//! Reads an exported registry CSV into a [`warga_model::Dataset`],
//! treating empty cells and upstream null tokens as missing values.
//! File-level problems (unreadable path, unparseable CSV, no header)
//! are the only errors raised here; everything cell-level is resolved
//! to `CellValue::Missing`.

pub mod csv_table;
pub mod error;

pub use csv_table::{is_null_token, read_csv_table};
pub use error::{IngestError, Result};
