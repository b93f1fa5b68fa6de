use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// RECIST classification of a measured lesion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LesionKind {
    /// Counted in the sum of diameters.
    Target,
    /// Followed qualitatively only.
    NonTarget,
    /// Appeared after baseline.
    New,
}

impl LesionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LesionKind::Target => "target",
            LesionKind::NonTarget => "non-target",
            LesionKind::New => "new",
        }
    }

    pub fn is_target(&self) -> bool {
        matches!(self, LesionKind::Target)
    }
}

impl fmt::Display for LesionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LesionKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "target" => Ok(LesionKind::Target),
            "non-target" | "nontarget" => Ok(LesionKind::NonTarget),
            "new" => Ok(LesionKind::New),
            _ => Err(ModelError::UnknownLesionKind(s.trim().to_string())),
        }
    }
}

/// One lesion measured on one imaging date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LesionMeasurement {
    pub id: String,
    /// Stable identifier of the lesion across timepoints.
    pub lesion_id: String,
    /// Anatomic location, free text.
    pub location: String,
    pub date: NaiveDate,
    pub long_axis_mm: f64,
    pub short_axis_mm: f64,
    pub kind: LesionKind,
}

impl LesionMeasurement {
    /// Long-axis contribution to the RECIST sum (zero for non-target lesions).
    pub fn target_diameter_mm(&self) -> f64 {
        if self.kind.is_target() {
            self.long_axis_mm
        } else {
            0.0
        }
    }
}
