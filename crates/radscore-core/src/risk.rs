//! Brock-style pulmonary nodule malignancy score.
//!
//! The score is a logistic model over patient and nodule risk factors:
//!
//! ```text
//! logit = intercept
//!       + age * age_coefficient
//!       + ln(size_mm + 1) * size_coefficient
//!       + sum of flag constants for the flags that are set
//!       + min(pack_years, smoking_cap) * smoking_coefficient   (pack_years > 0)
//! probability = 1 / (1 + e^-logit)
//! ```
//!
//! The returned score is `round(probability * 100)`. Inputs outside the
//! expected clinical ranges (age 30-90, size 4-30 mm, pack-years 0-60) are
//! the caller's responsibility; nothing is validated here.

use serde::{Deserialize, Serialize};
use tracing::trace;

use radscore_model::{RiskFactors, RiskResult};

/// Coefficients of the logistic risk model.
///
/// `Default` is the built-in parameter set. Every field has a serde default,
/// so a configuration file only needs the coefficients it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RiskModel {
    pub intercept: f64,
    pub age: f64,
    /// Multiplies `ln(size_mm + 1)`.
    pub size: f64,
    pub upper_lobe: f64,
    pub spiculation: f64,
    pub part_solid: f64,
    pub family_history: f64,
    pub emphysema: f64,
    /// Per pack-year.
    pub smoking: f64,
    /// Pack-years beyond this add nothing.
    pub smoking_cap: f64,
}

impl Default for RiskModel {
    fn default() -> Self {
        Self {
            intercept: -6.8,
            age: 0.03,
            size: 1.2,
            upper_lobe: 0.65,
            spiculation: 0.78,
            part_solid: 0.38,
            family_history: 0.29,
            emphysema: 0.33,
            smoking: 0.015,
            smoking_cap: 50.0,
        }
    }
}

impl RiskModel {
    /// Linear predictor (log-odds) for the given factors.
    pub fn logit(&self, factors: &RiskFactors) -> f64 {
        let mut logit = self.intercept;
        logit += self.age * f64::from(factors.age);
        logit += self.size * (factors.nodule_size_mm + 1.0).ln();

        let flags = [
            (factors.upper_lobe, self.upper_lobe),
            (factors.spiculation, self.spiculation),
            (factors.part_solid, self.part_solid),
            (factors.family_history, self.family_history),
            (factors.emphysema, self.emphysema),
        ];
        logit += flags
            .iter()
            .filter(|(set, _)| *set)
            .map(|(_, weight)| weight)
            .sum::<f64>();

        if factors.pack_years > 0.0 {
            logit += self.smoking * factors.pack_years.min(self.smoking_cap);
        }
        logit
    }

    /// Malignancy probability in `[0, 1]`.
    pub fn probability(&self, factors: &RiskFactors) -> f64 {
        logistic(self.logit(factors))
    }

    /// Whole-percent score and category.
    pub fn calculate(&self, factors: &RiskFactors) -> RiskResult {
        let probability = self.probability(factors);
        let score = (probability * 100.0).round().clamp(0.0, 100.0) as u8;
        trace!(probability, score, "risk score computed");
        RiskResult::from_score(score)
    }
}

fn logistic(logit: f64) -> f64 {
    1.0 / (1.0 + (-logit).exp())
}

/// Score `factors` with the built-in coefficients.
pub fn calculate_risk(factors: &RiskFactors) -> RiskResult {
    RiskModel::default().calculate(factors)
}
