//! Canonical-value enumerations for normalized registry fields.
//!
//! Raw registry exports carry these as free text; the transform stage
//! maps every raw value into one of these variants and the output
//! artifact renders them via `as_str`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical marital-status classification.
///
/// The output labels are the exact strings downstream dashboards
/// filter on, so `as_str` is the single source of truth for spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaritalStatus {
    /// Not yet married.
    BelumKawin,
    /// Married.
    Kawin,
    /// Divorced, spouse living.
    CeraiHidup,
    /// Widowed (marriage ended by death).
    CeraiMati,
    /// Widow/widower recorded directly as JANDA or DUDA.
    JandaDuda,
    /// Unknown or missing.
    TidakDiketahui,
    /// Recognizable text that fits no category.
    Lainnya,
}

impl MaritalStatus {
    /// Canonical output label.
    pub fn as_str(&self) -> &'static str {
        match self {
            MaritalStatus::BelumKawin => "BELUM KAWIN",
            MaritalStatus::Kawin => "KAWIN",
            MaritalStatus::CeraiHidup => "CERAI HIDUP",
            MaritalStatus::CeraiMati => "CERAI MATI",
            MaritalStatus::JandaDuda => "JANDA/DUDA",
            MaritalStatus::TidakDiketahui => "TIDAK DIKETAHUI",
            MaritalStatus::Lainnya => "LAINNYA",
        }
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaritalStatus {
    type Err = String;

    /// Parses a canonical label back into its variant. Only the exact
    /// output labels round-trip; raw registry text goes through the
    /// normalizer instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BELUM KAWIN" => Ok(MaritalStatus::BelumKawin),
            "KAWIN" => Ok(MaritalStatus::Kawin),
            "CERAI HIDUP" => Ok(MaritalStatus::CeraiHidup),
            "CERAI MATI" => Ok(MaritalStatus::CeraiMati),
            "JANDA/DUDA" => Ok(MaritalStatus::JandaDuda),
            "TIDAK DIKETAHUI" => Ok(MaritalStatus::TidakDiketahui),
            "LAINNYA" => Ok(MaritalStatus::Lainnya),
            other => Err(format!("unknown marital status label: {other:?}")),
        }
    }
}

/// Ordered age bracket used for demographic grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    /// 0-5 years.
    Under5,
    /// 6-12 years.
    Child,
    /// 13-17 years.
    Teen,
    /// 18-25 years.
    YoungAdult,
    /// 26-40 years.
    Adult,
    /// 41-60 years.
    MiddleAged,
    /// Over 60 years.
    Senior,
    /// Birthdate missing or unparseable.
    Unknown,
}

impl AgeBracket {
    /// Canonical output label.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBracket::Under5 => "0-5",
            AgeBracket::Child => "6-12",
            AgeBracket::Teen => "13-17",
            AgeBracket::YoungAdult => "18-25",
            AgeBracket::Adult => "26-40",
            AgeBracket::MiddleAged => "41-60",
            AgeBracket::Senior => "60+",
            AgeBracket::Unknown => "Tidak diketahui",
        }
    }

    /// Sort position for ordered display, youngest first, unknown last.
    pub fn sort_order(&self) -> u8 {
        match self {
            AgeBracket::Under5 => 1,
            AgeBracket::Child => 2,
            AgeBracket::Teen => 3,
            AgeBracket::YoungAdult => 4,
            AgeBracket::Adult => 5,
            AgeBracket::MiddleAged => 6,
            AgeBracket::Senior => 7,
            AgeBracket::Unknown => 8,
        }
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marital_status_labels_round_trip() {
        let all = [
            MaritalStatus::BelumKawin,
            MaritalStatus::Kawin,
            MaritalStatus::CeraiHidup,
            MaritalStatus::CeraiMati,
            MaritalStatus::JandaDuda,
            MaritalStatus::TidakDiketahui,
            MaritalStatus::Lainnya,
        ];
        for status in all {
            assert_eq!(status.as_str().parse::<MaritalStatus>().unwrap(), status);
        }
    }

    #[test]
    fn marital_status_from_str_rejects_raw_text() {
        assert!("BELUMKAWIN".parse::<MaritalStatus>().is_err());
        assert!("janda".parse::<MaritalStatus>().is_err());
    }

    #[test]
    fn age_brackets_are_ordered_youngest_first() {
        let ordered = [
            AgeBracket::Under5,
            AgeBracket::Child,
            AgeBracket::Teen,
            AgeBracket::YoungAdult,
            AgeBracket::Adult,
            AgeBracket::MiddleAged,
            AgeBracket::Senior,
            AgeBracket::Unknown,
        ];
        let mut orders: Vec<u8> = ordered.iter().map(AgeBracket::sort_order).collect();
        let sorted = orders.clone();
        orders.sort_unstable();
        assert_eq!(orders, sorted);
    }

    #[test]
    fn bracket_labels_match_output_contract() {
        assert_eq!(AgeBracket::Under5.as_str(), "0-5");
        assert_eq!(AgeBracket::Senior.as_str(), "60+");
        assert_eq!(AgeBracket::Unknown.as_str(), "Tidak diketahui");
    }
}
