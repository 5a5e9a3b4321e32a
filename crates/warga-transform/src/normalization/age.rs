//! Birthdate parsing and age derivation.
//!
//! Ages are derived against an explicit reference date passed in by
//! the caller; nothing here reads a wall clock, so runs are
//! reproducible and testable.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use warga_model::AgeBracket;

/// Derived age fields for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeFields {
    /// Parsed birthdate, `None` when missing or unparseable.
    pub birth_date: Option<NaiveDate>,
    /// Whole years, `None` when the birthdate is unavailable.
    pub umur: Option<i64>,
    /// Bracket classified from `umur`.
    pub kelompok_umur: AgeBracket,
}

impl AgeFields {
    fn unknown() -> Self {
        Self {
            birth_date: None,
            umur: None,
            kelompok_umur: AgeBracket::Unknown,
        }
    }
}

/// Leniently parses a birthdate from the formats seen in registry
/// exports. Date-only formats are tried first, then datetime forms
/// with the time discarded.
pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let date_formats = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%d-%m-%Y",
        "%d/%m/%Y",
        "%m/%d/%Y",
        "%d-%b-%Y", // 15-Jan-1984
        "%d %b %Y", // 15 Jan 1984
        "%d.%m.%Y",
        "%Y%m%d",
    ];
    for fmt in &date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(d);
        }
    }

    let datetime_formats = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%d/%m/%Y %H:%M"];
    for fmt in &datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.date());
        }
    }

    None
}

/// Classifies a whole-year age into its bracket.
///
/// The ladder is evaluated in order, lowest boundary first; a missing
/// age is `Unknown`.
pub fn classify_age(umur: Option<i64>) -> AgeBracket {
    let Some(umur) = umur else {
        return AgeBracket::Unknown;
    };
    if umur <= 5 {
        AgeBracket::Under5
    } else if umur <= 12 {
        AgeBracket::Child
    } else if umur <= 17 {
        AgeBracket::Teen
    } else if umur <= 25 {
        AgeBracket::YoungAdult
    } else if umur <= 40 {
        AgeBracket::Adult
    } else if umur <= 60 {
        AgeBracket::MiddleAged
    } else {
        AgeBracket::Senior
    }
}

/// Derives birthdate, age, and age bracket from a raw date value.
///
/// Age is `floor(days / 365)` of the span from birthdate to
/// `reference`. The 365-day divisor ignores leap-year drift and can
/// be off by one year near a birthday; that imprecision is part of
/// the output contract, kept from the source system on purpose.
pub fn derive_age_fields(raw: Option<&str>, reference: NaiveDate) -> AgeFields {
    let Some(raw) = raw else {
        return AgeFields::unknown();
    };
    let Some(birth_date) = parse_birth_date(raw) else {
        debug!(value = raw, "unparseable birthdate");
        return AgeFields::unknown();
    };

    let days = (reference - birth_date).num_days();
    if days < 0 {
        debug!(value = raw, "birthdate after reference date");
    }
    let umur = days.div_euclid(365);

    AgeFields {
        birth_date: Some(birth_date),
        umur: Some(umur),
        kelompok_umur: classify_age(Some(umur)),
    }
}
