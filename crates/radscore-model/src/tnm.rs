//! TNM codes and the overall stage labels derived from them.
//!
//! The code sets are the cancer-agnostic enumerations offered by the tumor
//! board staging form. Parsing is case-insensitive and yields the canonical
//! spelling (`tis` becomes `Tis`, `m1A` becomes `M1a`).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ModelError, Result};

/// Primary tumor codes.
pub const T_CODES: [&str; 6] = ["Tis", "T1", "T2", "T3", "T4", "TX"];

/// Regional lymph node codes.
pub const N_CODES: [&str; 5] = ["N0", "N1", "N2", "N3", "NX"];

/// Distant metastasis codes.
pub const M_CODES: [&str; 6] = ["M0", "M1", "M1a", "M1b", "M1c", "MX"];

fn canonical_code(axis: &'static str, codes: &[&'static str], raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    codes
        .iter()
        .find(|code| code.eq_ignore_ascii_case(trimmed))
        .map(|code| (*code).to_string())
        .ok_or_else(|| ModelError::UnknownStageCode {
            axis,
            code: trimmed.to_string(),
        })
}

/// A T/N/M code triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TnmCodes {
    pub t: String,
    pub n: String,
    pub m: String,
}

impl TnmCodes {
    /// Parse and canonicalize a code triple.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownStageCode`] for the first code outside
    /// its enumeration.
    pub fn parse(t: &str, n: &str, m: &str) -> Result<Self> {
        Ok(Self {
            t: canonical_code("T", &T_CODES, t)?,
            n: canonical_code("N", &N_CODES, n)?,
            m: canonical_code("M", &M_CODES, m)?,
        })
    }
}

impl fmt::Display for TnmCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.t, self.n, self.m)
    }
}

/// Overall stage group, ordered from least to most advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OverallStage {
    I,
    II,
    #[serde(rename = "IIIA")]
    IIIa,
    #[serde(rename = "IIIB")]
    IIIb,
    #[serde(rename = "IIIC")]
    IIIc,
    IV,
}

impl OverallStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallStage::I => "I",
            OverallStage::II => "II",
            OverallStage::IIIa => "IIIA",
            OverallStage::IIIb => "IIIB",
            OverallStage::IIIc => "IIIC",
            OverallStage::IV => "IV",
        }
    }
}

impl fmt::Display for OverallStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonicalizes_case() {
        let codes = TnmCodes::parse("tis", " n1 ", "m1A").unwrap();
        assert_eq!(codes.t, "Tis");
        assert_eq!(codes.n, "N1");
        assert_eq!(codes.m, "M1a");
        assert_eq!(codes.to_string(), "TisN1M1a");
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        let err = TnmCodes::parse("T1", "N4", "M0").unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownStageCode {
                axis: "N",
                code: "N4".to_string()
            }
        );
        assert_eq!(err.to_string(), "unknown N code: N4");
    }

    #[test]
    fn stages_are_ordered() {
        assert!(OverallStage::I < OverallStage::II);
        assert!(OverallStage::IIIa < OverallStage::IIIc);
        assert!(OverallStage::IIIc < OverallStage::IV);
    }
}
