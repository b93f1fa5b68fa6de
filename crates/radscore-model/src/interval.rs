//! Follow-up recommendation intervals.
//!
//! An interval is a positive count of a time unit, optionally widened to a
//! range (`6-12 months`). Conversions to days and months are approximate
//! (30-day months, 365-day years) and match how follow-up due dates are
//! scheduled.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, Result};

/// Time unit of a follow-up interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalUnit {
    Days,
    Weeks,
    Months,
    Years,
}

impl IntervalUnit {
    /// Plural lowercase name, as used in rendered intervals.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntervalUnit::Days => "days",
            IntervalUnit::Weeks => "weeks",
            IntervalUnit::Months => "months",
            IntervalUnit::Years => "years",
        }
    }

    /// Approximate length of one unit in days.
    pub fn days(&self) -> u32 {
        match self {
            IntervalUnit::Days => 1,
            IntervalUnit::Weeks => 7,
            IntervalUnit::Months => 30,
            IntervalUnit::Years => 365,
        }
    }

    fn singular(&self) -> &'static str {
        let plural = self.as_str();
        &plural[..plural.len() - 1]
    }
}

impl FromStr for IntervalUnit {
    type Err = ModelError;

    /// Accepts singular, plural, and abbreviated forms (`mo`, `yr`, `wk`).
    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_lowercase();
        match lowered.trim_end_matches('s') {
            "day" => Ok(IntervalUnit::Days),
            "week" | "wk" => Ok(IntervalUnit::Weeks),
            "month" | "mo" => Ok(IntervalUnit::Months),
            "year" | "yr" => Ok(IntervalUnit::Years),
            _ => Err(ModelError::UnknownIntervalUnit(s.trim().to_string())),
        }
    }
}

impl fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A follow-up interval such as `3 months`, `1 year`, or `6-12 months`.
///
/// Deserialization goes through [`RecommendationInterval::new`] and
/// [`RecommendationInterval::range`], so a zero count or an inverted range is
/// rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IntervalFields")]
pub struct RecommendationInterval {
    pub(crate) value: u32,
    pub(crate) unit: IntervalUnit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) max_value: Option<u32>,
}

/// Unchecked serde shape of [`RecommendationInterval`].
#[derive(Deserialize)]
struct IntervalFields {
    value: u32,
    unit: IntervalUnit,
    #[serde(default)]
    max_value: Option<u32>,
}

impl TryFrom<IntervalFields> for RecommendationInterval {
    type Error = ModelError;

    fn try_from(fields: IntervalFields) -> Result<Self> {
        match fields.max_value {
            Some(max) => Self::range(fields.value, max, fields.unit),
            None => Self::new(fields.value, fields.unit),
        }
    }
}

impl RecommendationInterval {
    /// Create a single-valued interval.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NonPositiveInterval`] when `value` is zero.
    pub fn new(value: u32, unit: IntervalUnit) -> Result<Self> {
        if value == 0 {
            return Err(ModelError::NonPositiveInterval(value));
        }
        Ok(Self {
            value,
            unit,
            max_value: None,
        })
    }

    /// Create a ranged interval (`value`-`max_value` units).
    ///
    /// # Errors
    ///
    /// Returns an error when `value` is zero or `max_value <= value`.
    pub fn range(value: u32, max_value: u32, unit: IntervalUnit) -> Result<Self> {
        let mut interval = Self::new(value, unit)?;
        if max_value <= value {
            return Err(ModelError::InvalidIntervalRange {
                value,
                max: max_value,
            });
        }
        interval.max_value = Some(max_value);
        Ok(interval)
    }

    /// Lower (or only) bound of the interval.
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn unit(&self) -> IntervalUnit {
        self.unit
    }

    /// Upper bound for ranged intervals.
    pub fn max_value(&self) -> Option<u32> {
        self.max_value
    }

    /// Approximate length in days, using the lower bound. Saturates at
    /// `u32::MAX`.
    pub fn to_days(&self) -> u32 {
        self.value.saturating_mul(self.unit.days())
    }

    /// Approximate length in whole months, never less than one. Saturates at
    /// `u32::MAX`.
    pub fn to_months(&self) -> u32 {
        let months = match self.unit {
            IntervalUnit::Days => self.value / 30,
            IntervalUnit::Weeks => self.value / 4,
            IntervalUnit::Months => self.value,
            IntervalUnit::Years => self.value.saturating_mul(12),
        };
        months.max(1)
    }

    /// Build an interval from a month count, collapsing whole years.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NonPositiveInterval`] when `months` is zero.
    pub fn from_months(months: u32) -> Result<Self> {
        if months >= 12 && months % 12 == 0 {
            Self::new(months / 12, IntervalUnit::Years)
        } else {
            Self::new(months, IntervalUnit::Months)
        }
    }

    /// Parse free text such as `"3 months"`, `"1 yr"`, or `"6 - 12 months"`.
    ///
    /// Anything after the unit word is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error when no leading number or unit can be found, the unit
    /// is unknown, or the numbers violate the interval invariants.
    pub fn parse(text: &str) -> Result<Self> {
        let lowered = text.trim().to_lowercase();
        let unparseable = || ModelError::UnparseableInterval(text.trim().to_string());

        let (value, rest) = split_number(&lowered).ok_or_else(unparseable)?;
        let rest = rest.trim_start();
        let (max_value, rest) = match rest.strip_prefix('-') {
            Some(after_dash) => {
                let (max, tail) = split_number(after_dash.trim_start()).ok_or_else(unparseable)?;
                (Some(max), tail.trim_start())
            }
            None => (None, rest),
        };

        let unit_end = rest
            .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
            .unwrap_or(rest.len());
        let unit_word = &rest[..unit_end];
        if unit_word.is_empty() {
            return Err(unparseable());
        }
        let unit = unit_word.parse::<IntervalUnit>()?;

        match max_value {
            Some(max) => Self::range(value, max, unit),
            None => Self::new(value, unit),
        }
    }
}

/// Split a leading run of ASCII digits off `text`.
fn split_number(text: &str) -> Option<(u32, &str)> {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    if end == 0 {
        return None;
    }
    let value = text[..end].parse().ok()?;
    Some((value, &text[end..]))
}

impl FromStr for RecommendationInterval {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for RecommendationInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max_value {
            Some(max) => write!(f, "{}-{} {}", self.value, max, self.unit.as_str()),
            None if self.value == 1 => write!(f, "1 {}", self.unit.singular()),
            None => write!(f, "{} {}", self.value, self.unit.as_str()),
        }
    }
}
