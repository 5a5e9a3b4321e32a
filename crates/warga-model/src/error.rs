use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("column count mismatch: record has {record} cells, schema has {schema} columns")]
    ColumnCountMismatch { record: usize, schema: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
