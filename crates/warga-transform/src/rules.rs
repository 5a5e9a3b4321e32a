//! Ordered rule tables for surface repair and classification.
//!
//! The registry cleaning logic is deliberately expressed as data, not
//! as cascading branches: replacement tables and classification
//! ladders are plain ordered slices evaluated top-down, so precedence
//! can be audited and tested entry by entry.

use warga_model::MaritalStatus;

/// One literal global substring replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replacement {
    pub from: &'static str,
    pub to: &'static str,
}

impl Replacement {
    pub const fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }
}

/// Applies an ordered replacement table.
///
/// Each entry is applied globally before the next entry is
/// considered. Table order is load-bearing: longer misspellings must
/// sit above shorter ones they contain.
pub fn apply_replacements(value: &str, table: &[Replacement]) -> String {
    let mut out = value.to_string();
    for rule in table {
        if out.contains(rule.from) {
            out = out.replace(rule.from, rule.to);
        }
    }
    out
}

/// Match condition for one classification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// The value contains the given substring.
    Contains(&'static str),
    /// The value equals one of the given strings exactly.
    ExactAny(&'static [&'static str]),
    /// The value is empty or a residual null token ("NAN", "NONE").
    EmptyOrNullLike,
}

impl Pattern {
    fn matches(&self, value: &str) -> bool {
        match self {
            Pattern::Contains(needle) => value.contains(needle),
            Pattern::ExactAny(candidates) => candidates.contains(&value),
            Pattern::EmptyOrNullLike => {
                value.is_empty() || value == "NAN" || value == "NONE"
            }
        }
    }
}

/// One entry of a first-match-wins classification ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifyRule {
    pub pattern: Pattern,
    pub status: MaritalStatus,
}

impl ClassifyRule {
    pub const fn new(pattern: Pattern, status: MaritalStatus) -> Self {
        Self { pattern, status }
    }
}

/// Evaluates a ladder top-down, returning the first matching status.
pub fn classify(value: &str, ladder: &[ClassifyRule]) -> Option<MaritalStatus> {
    ladder
        .iter()
        .find(|rule| rule.pattern.matches(value))
        .map(|rule| rule.status)
}
