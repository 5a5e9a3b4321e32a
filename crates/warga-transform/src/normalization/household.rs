//! Household identifier (no_kk) canonicalization.
//!
//! Upstream numeric storage turns the 16-digit household number into
//! a float, so exports carry values like "1234567890.0". The
//! canonical form is a plain decimal digit string.

use crate::error::TransformError;

/// Canonicalizes a raw household identifier.
///
/// Missing input propagates as `Ok(None)`. Integer-looking input is
/// rendered as-is minus artifacts; float-looking input is truncated
/// toward zero. Input that cannot be coerced to an integer is an
/// [`TransformError::InvalidIdentifier`]; the transformer downgrades
/// that to a missing cell rather than aborting the run.
pub fn normalize_household_id(raw: Option<&str>) -> Result<Option<String>, TransformError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(Some(value.to_string()));
    }
    if let Ok(value) = trimmed.parse::<f64>() {
        if value.is_finite() {
            return Ok(Some(format!("{}", value.trunc() as i64)));
        }
    }

    Err(TransformError::InvalidIdentifier {
        value: trimmed.to_string(),
    })
}
