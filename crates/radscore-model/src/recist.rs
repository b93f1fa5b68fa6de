//! RECIST tumor response outputs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Response category from the change in summed target-lesion diameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseCategory {
    #[serde(rename = "Complete Response")]
    CompleteResponse,
    #[serde(rename = "Partial Response")]
    PartialResponse,
    #[serde(rename = "Stable Disease")]
    StableDisease,
    #[serde(rename = "Progressive Disease")]
    ProgressiveDisease,
}

impl ResponseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCategory::CompleteResponse => "Complete Response",
            ResponseCategory::PartialResponse => "Partial Response",
            ResponseCategory::StableDisease => "Stable Disease",
            ResponseCategory::ProgressiveDisease => "Progressive Disease",
        }
    }

    /// Conventional abbreviation (CR, PR, SD, PD).
    pub fn abbreviation(&self) -> &'static str {
        match self {
            ResponseCategory::CompleteResponse => "CR",
            ResponseCategory::PartialResponse => "PR",
            ResponseCategory::StableDisease => "SD",
            ResponseCategory::ProgressiveDisease => "PD",
        }
    }
}

impl fmt::Display for ResponseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response between two timepoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecistResult {
    pub category: ResponseCategory,
    /// Whole-percent change of the current sum relative to baseline.
    pub percent_change: i32,
    pub current_sum_mm: f64,
    pub baseline_sum_mm: f64,
}

/// A [`RecistResult`] together with the timepoints it compares.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimepointAssessment {
    pub baseline_date: NaiveDate,
    pub current_date: NaiveDate,
    #[serde(flatten)]
    pub result: RecistResult,
    /// New lesions recorded at the current timepoint.
    pub new_lesions: usize,
    /// Non-target lesions recorded at the current timepoint.
    pub non_target_lesions: usize,
}
