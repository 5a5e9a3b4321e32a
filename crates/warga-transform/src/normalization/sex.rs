//! Sex code normalization.

/// Normalizes a raw sex value to the short registry codes.
///
/// The long labels map to "L"/"P"; anything else passes through
/// trimmed and uppercased, so already-short codes survive unchanged.
/// Unlike the other normalizers this one synthesizes no sentinel:
/// missing stays missing and callers treat absence as unknown.
pub fn normalize_sex(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    let upper = raw.trim().to_uppercase();
    let code = match upper.as_str() {
        "LAKI-LAKI" => "L".to_string(),
        "PEREMPUAN" => "P".to_string(),
        _ => upper,
    };
    Some(code)
}
