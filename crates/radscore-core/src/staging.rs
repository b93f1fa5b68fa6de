//! Overall stage from T/N/M codes.
//!
//! This is a fixed, cancer-agnostic precedence table rather than per-site
//! AJCC staging. The first matching rule wins:
//!
//! | rule                    | stage |
//! |-------------------------|-------|
//! | M starts with `M1`      | IV    |
//! | N is `N3`               | IIIC  |
//! | N is `N2`               | IIIB  |
//! | T is `T4`               | IIIA  |
//! | T is `T3` or N is `N1`  | II    |
//! | otherwise               | I     |

use radscore_model::{OverallStage, TnmCodes};

/// Overall stage for canonical codes (see [`radscore_model::tnm`] for the
/// accepted enumerations). Codes are compared exactly.
pub fn overall_stage(t: &str, n: &str, m: &str) -> OverallStage {
    if m.starts_with("M1") {
        OverallStage::IV
    } else if n == "N3" {
        OverallStage::IIIc
    } else if n == "N2" {
        OverallStage::IIIb
    } else if t == "T4" {
        OverallStage::IIIa
    } else if t == "T3" || n == "N1" {
        OverallStage::II
    } else {
        OverallStage::I
    }
}

/// Extension for staging parsed code triples.
pub trait StageExt {
    fn overall_stage(&self) -> OverallStage;
}

impl StageExt for TnmCodes {
    fn overall_stage(&self) -> OverallStage {
        overall_stage(&self.t, &self.n, &self.m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metastasis_dominates() {
        assert_eq!(overall_stage("T1", "N0", "M1a"), OverallStage::IV);
        assert_eq!(overall_stage("T4", "N3", "M1"), OverallStage::IV);
        assert_eq!(overall_stage("T1", "N0", "MX"), OverallStage::I);
    }

    #[test]
    fn parsed_codes_stage_the_same() {
        let codes = TnmCodes::parse("t3", "n0", "m0").unwrap();
        assert_eq!(codes.overall_stage(), OverallStage::II);
    }
}
