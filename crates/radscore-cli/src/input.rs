//! Risk factor flags and their merge with a JSON input record.

use clap::Args;

use radscore_model::{ModelError, RiskFactors};

/// Risk factors given on the command line.
#[derive(Debug, Clone, Default, Args)]
pub struct RiskFlags {
    /// Patient age in years.
    #[arg(long = "age", required_unless_present = "input")]
    pub age: Option<u32>,

    /// Largest nodule diameter in millimeters.
    #[arg(long = "size", value_name = "MM", required_unless_present = "input")]
    pub size: Option<f64>,

    #[arg(long = "upper-lobe")]
    pub upper_lobe: bool,

    #[arg(long = "spiculation")]
    pub spiculation: bool,

    #[arg(long = "part-solid")]
    pub part_solid: bool,

    #[arg(long = "family-history")]
    pub family_history: bool,

    #[arg(long = "emphysema")]
    pub emphysema: bool,

    /// Cumulative smoking exposure.
    #[arg(long = "pack-years")]
    pub pack_years: Option<f64>,
}

impl RiskFlags {
    /// Overlay the flags on `base` and validate the result.
    ///
    /// Values given as flags replace those in `base`; boolean flags can only
    /// switch a factor on. Without a base record, age and size must be given.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidRiskFactor`] when a required value is
    /// missing or the merged record fails [`RiskFactors::validate`].
    pub fn apply(&self, base: Option<RiskFactors>) -> Result<RiskFactors, ModelError> {
        let mut factors = match base {
            Some(factors) => factors,
            None => RiskFactors {
                age: self.age.ok_or_else(|| missing("age"))?,
                nodule_size_mm: self.size.ok_or_else(|| missing("nodule_size_mm"))?,
                ..RiskFactors::default()
            },
        };
        if let Some(age) = self.age {
            factors.age = age;
        }
        if let Some(size) = self.size {
            factors.nodule_size_mm = size;
        }
        if let Some(pack_years) = self.pack_years {
            factors.pack_years = pack_years;
        }
        factors.upper_lobe |= self.upper_lobe;
        factors.spiculation |= self.spiculation;
        factors.part_solid |= self.part_solid;
        factors.family_history |= self.family_history;
        factors.emphysema |= self.emphysema;
        factors.validate()?;
        Ok(factors)
    }
}

fn missing(field: &'static str) -> ModelError {
    ModelError::InvalidRiskFactor {
        field,
        message: "value is required".to_string(),
    }
}
