//! Dusun (neighborhood) name normalization.

use crate::rules::{apply_replacements, Replacement};

/// Sentinel for a missing dusun value.
pub const UNKNOWN_DUSUN: &str = "TIDAK DIKETAHUI";

/// Known misspellings observed in the registry exports, applied in
/// order after uppercasing.
pub const DUSUN_REPLACEMENTS: &[Replacement] = &[
    Replacement::new("DASN GERES", "DASAN GERES"),
    Replacement::new("CEMARE", "CEMARA"),
];

/// Normalizes a raw dusun value.
///
/// Missing input maps to [`UNKNOWN_DUSUN`]; otherwise the value is
/// trimmed, uppercased, and run through the replacement table. There
/// is no closed list of valid dusun names: a corrected name that
/// matches no table entry passes through unchanged.
pub fn normalize_dusun(raw: Option<&str>, table: &[Replacement]) -> String {
    let Some(raw) = raw else {
        return UNKNOWN_DUSUN.to_string();
    };
    let upper = raw.trim().to_uppercase();
    apply_replacements(&upper, table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_maps_to_sentinel() {
        assert_eq!(normalize_dusun(None, DUSUN_REPLACEMENTS), "TIDAK DIKETAHUI");
    }

    #[test]
    fn corrects_known_misspellings() {
        assert_eq!(
            normalize_dusun(Some("dasn geres utara"), DUSUN_REPLACEMENTS),
            "DASAN GERES UTARA"
        );
        assert_eq!(
            normalize_dusun(Some("  Cemare "), DUSUN_REPLACEMENTS),
            "CEMARA"
        );
    }

    #[test]
    fn unknown_names_pass_through() {
        assert_eq!(
            normalize_dusun(Some("montong tangi"), DUSUN_REPLACEMENTS),
            "MONTONG TANGI"
        );
    }

    #[test]
    fn already_canonical_is_unchanged() {
        let canonical = normalize_dusun(Some("DASAN GERES UTARA"), DUSUN_REPLACEMENTS);
        assert_eq!(canonical, "DASAN GERES UTARA");
    }
}
