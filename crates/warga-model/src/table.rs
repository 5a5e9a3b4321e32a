#![deny(unsafe_code)]

use crate::error::{ModelError, Result};

/// A single cell of a registry table.
///
/// Empty cells and null tokens left behind by upstream tooling ingest
/// as `Missing`; everything else is kept as trimmed text.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Returns the text content, or `None` for a missing cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value),
            CellValue::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

/// One row of a dataset. Cells are positional; the owning `Dataset`
/// schema maps column names to positions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub cells: Vec<CellValue>,
}

impl Record {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index)
    }
}

/// An ordered, immutable snapshot of tabular registry data.
///
/// The transform stage consumes one `Dataset` and produces a new one;
/// rows are never mutated in place, dropped, or reordered.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Position of a column, matched case-insensitively.
    ///
    /// Registry exports vary header case between extractions, so all
    /// schema lookups go through this.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.eq_ignore_ascii_case(name))
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell for `column` in `row`, if both exist.
    pub fn cell<'a>(&self, row: &'a Record, column: &str) -> Option<&'a CellValue> {
        self.column_index(column).and_then(|idx| row.get(idx))
    }

    /// Appends a row, enforcing the schema width.
    pub fn push_row(&mut self, record: Record) -> Result<()> {
        if record.cells.len() != self.columns.len() {
            return Err(ModelError::ColumnCountMismatch {
                record: record.cells.len(),
                schema: self.columns.len(),
            });
        }
        self.rows.push(record);
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
