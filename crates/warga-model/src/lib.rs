#![deny(unsafe_code)]

//! Data model for the civil-registry cleaning pipeline.
//!
//! Defines the in-memory tabular representation (`Dataset`, `Record`,
//! `CellValue`) and the canonical-value enumerations the transform
//! stage maps raw fields into (`MaritalStatus`, `AgeBracket`).

pub mod enums;
pub mod error;
pub mod table;

pub use enums::{AgeBracket, MaritalStatus};
pub use error::{ModelError, Result};
pub use table::{CellValue, Dataset, Record};
