//! Marital-status normalization.
//!
//! Two stages, both table-driven:
//! 1. surface repair — strip quoting artifacts and fix the misspelled
//!    BELUM KAWIN / KAWIN variants seen in the registry exports;
//! 2. classification — a first-match-wins containment ladder mapping
//!    the repaired string to a [`MaritalStatus`].

use warga_model::MaritalStatus;

use crate::rules::{apply_replacements, classify, ClassifyRule, Pattern, Replacement};

/// Misspelling repair table, applied after uppercasing and after
/// backticks are stripped and hyphens replaced by spaces.
///
/// Order is load-bearing: the BELUM variants sit above the bare KAWIN
/// fixes so that e.g. "BLUM KAWIN" is repaired as a whole phrase, and
/// "KAWIN KAWIN" collapses only after the single-word typos have been
/// rewritten into "KAWIN".
pub const MARITAL_REPLACEMENTS: &[Replacement] = &[
    Replacement::new("BELUM  KAWIN", "BELUM KAWIN"),
    Replacement::new("BELUMKAWIN", "BELUM KAWIN"),
    Replacement::new("BLUM KAWIN", "BELUM KAWIN"),
    Replacement::new("BELEM KAWIN", "BELUM KAWIN"),
    Replacement::new("BEKUM KAWIN", "BELUM KAWIN"),
    Replacement::new("BWLUM KAWIN", "BELUM KAWIN"),
    Replacement::new("KAWN", "KAWIN"),
    Replacement::new("KWIN", "KAWIN"),
    Replacement::new("KAWWIN", "KAWIN"),
    Replacement::new("KAWIU", "KAWIN"),
    Replacement::new("KAWI", "KAWIN"),
    Replacement::new("KAIN", "KAWIN"),
    Replacement::new("KAWAIN", "KAWIN"),
    Replacement::new("KAWAN", "KAWIN"),
    Replacement::new("KAWIN KAWIN", "KAWIN"),
];

/// Classification ladder, evaluated top-down on the repaired string.
///
/// Precedence matters: a value containing both BELUM and KAWIN must
/// classify as BELUM KAWIN, and the specific CERAI HIDUP / CERAI MATI
/// phrases must win over the bare CERAI fallback.
pub const MARITAL_LADDER: &[ClassifyRule] = &[
    ClassifyRule::new(Pattern::Contains("BELUM"), MaritalStatus::BelumKawin),
    ClassifyRule::new(Pattern::Contains("KAWIN"), MaritalStatus::Kawin),
    ClassifyRule::new(Pattern::Contains("CERAI HIDUP"), MaritalStatus::CeraiHidup),
    ClassifyRule::new(Pattern::Contains("CERAI MATI"), MaritalStatus::CeraiMati),
    ClassifyRule::new(
        Pattern::ExactAny(&["JANDA", "DUDA", "JANDA/DUDA"]),
        MaritalStatus::JandaDuda,
    ),
    ClassifyRule::new(Pattern::Contains("CERAI"), MaritalStatus::CeraiHidup),
    ClassifyRule::new(
        Pattern::ExactAny(&["TIDAK DIKETAHUI"]),
        MaritalStatus::TidakDiketahui,
    ),
    ClassifyRule::new(Pattern::EmptyOrNullLike, MaritalStatus::TidakDiketahui),
];

/// Stage 1: trim, uppercase, drop backticks, hyphens to spaces, then
/// run the misspelling table.
fn repair_surface(raw: &str, table: &[Replacement]) -> String {
    let upper = raw
        .trim()
        .to_uppercase()
        .replace('`', "")
        .replace('-', " ")
        .trim()
        .to_string();
    apply_replacements(&upper, table)
}

/// Normalizes a raw marital-status value to its canonical category.
///
/// Missing input maps to `TidakDiketahui`; any non-empty value that
/// matches no ladder rule is `Lainnya`. Idempotent over its own
/// output labels.
pub fn normalize_status_kawin(raw: Option<&str>, table: &[Replacement]) -> MaritalStatus {
    let Some(raw) = raw else {
        return MaritalStatus::TidakDiketahui;
    };
    let repaired = repair_surface(raw, table);
    classify(&repaired, MARITAL_LADDER).unwrap_or(MaritalStatus::Lainnya)
}
