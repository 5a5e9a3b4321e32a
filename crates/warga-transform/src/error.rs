use thiserror::Error;

/// Errors raised by individual normalizers.
///
/// These never abort a run: the transformer resolves them per record
/// to a missing derived value.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Household identifier cannot be coerced to an integer.
    #[error("invalid household identifier: {value:?}")]
    InvalidIdentifier { value: String },
}
