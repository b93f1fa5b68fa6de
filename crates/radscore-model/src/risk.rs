//! Pulmonary nodule risk inputs and results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::interval::{IntervalUnit, RecommendationInterval};

/// Patient and nodule risk factors for a single malignancy estimate.
///
/// The model is calibrated for age 30-90 years, nodule size 4-30 mm and
/// pack-years 0-60. Scoring does not enforce any range; [`RiskFactors::validate`]
/// rejects values that are outside the domain altogether.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskFactors {
    /// Age in years.
    pub age: u32,
    /// Largest nodule diameter in millimeters.
    #[serde(alias = "size_mm", alias = "nodule_size")]
    pub nodule_size_mm: f64,
    #[serde(default)]
    pub upper_lobe: bool,
    #[serde(default)]
    pub spiculation: bool,
    #[serde(default)]
    pub part_solid: bool,
    #[serde(default)]
    pub family_history: bool,
    #[serde(default)]
    pub emphysema: bool,
    /// Cumulative smoking exposure.
    #[serde(default)]
    pub pack_years: f64,
}

/// Oldest accepted age in years.
pub const MAX_AGE: u32 = 120;

impl RiskFactors {
    /// Reject values no patient or nodule can have: age above [`MAX_AGE`],
    /// a nodule size that is not a positive finite number, or pack-years that
    /// are negative or not finite.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidRiskFactor`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ModelError> {
        let invalid = |field: &'static str, message: String| {
            Err(ModelError::InvalidRiskFactor { field, message })
        };
        if self.age > MAX_AGE {
            return invalid("age", format!("{} exceeds {MAX_AGE} years", self.age));
        }
        if !self.nodule_size_mm.is_finite() || self.nodule_size_mm <= 0.0 {
            return invalid(
                "nodule_size_mm",
                format!("expected a positive size, got {}", self.nodule_size_mm),
            );
        }
        if !self.pack_years.is_finite() || self.pack_years < 0.0 {
            return invalid(
                "pack_years",
                format!("expected a non-negative value, got {}", self.pack_years),
            );
        }
        Ok(())
    }
}

/// Ordered malignancy risk category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    /// Below 5%.
    #[serde(rename = "Very Low")]
    VeryLow,
    /// 5-9%.
    Low,
    /// 10-29%.
    Intermediate,
    /// 30% and above.
    High,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 4] = [
        RiskCategory::VeryLow,
        RiskCategory::Low,
        RiskCategory::Intermediate,
        RiskCategory::High,
    ];

    /// Category for a percentage score.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=4 => RiskCategory::VeryLow,
            5..=9 => RiskCategory::Low,
            10..=29 => RiskCategory::Intermediate,
            _ => RiskCategory::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::VeryLow => "Very Low",
            RiskCategory::Low => "Low",
            RiskCategory::Intermediate => "Intermediate",
            RiskCategory::High => "High",
        }
    }

    /// Management recommendation shown alongside the score.
    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskCategory::VeryLow => "Optional CT at 12 months",
            RiskCategory::Low => "CT at 6-12 months, then consider CT at 18-24 months",
            RiskCategory::Intermediate => "CT at 3 months, PET/CT, or tissue sampling",
            RiskCategory::High => "PET/CT and tissue sampling or surgical consultation",
        }
    }

    /// Structured follow-up interval matching [`RiskCategory::recommendation`].
    pub fn follow_up_interval(&self) -> RecommendationInterval {
        let (value, max_value, unit) = match self {
            RiskCategory::VeryLow => (12, None, IntervalUnit::Months),
            RiskCategory::Low => (6, Some(12), IntervalUnit::Months),
            RiskCategory::Intermediate => (3, None, IntervalUnit::Months),
            RiskCategory::High => (2, None, IntervalUnit::Weeks),
        };
        RecommendationInterval {
            value,
            unit,
            max_value,
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "VERY LOW" | "VERYLOW" => Ok(RiskCategory::VeryLow),
            "LOW" => Ok(RiskCategory::Low),
            "INTERMEDIATE" => Ok(RiskCategory::Intermediate),
            "HIGH" => Ok(RiskCategory::High),
            _ => Err(ModelError::UnknownRiskCategory(s.trim().to_string())),
        }
    }
}

/// Malignancy probability as a whole percentage plus its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiskResult {
    /// Probability of malignancy, 0-100.
    pub score: u8,
    pub category: RiskCategory,
}

impl RiskResult {
    pub fn from_score(score: u8) -> Self {
        Self {
            score,
            category: RiskCategory::from_score(score),
        }
    }

    pub fn recommendation(&self) -> &'static str {
        self.category.recommendation()
    }
}
