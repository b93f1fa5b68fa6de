//! RECIST 1.1 style response from summed target-lesion diameters.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::debug;

use radscore_model::{
    LesionKind, LesionMeasurement, RecistResult, ResponseCategory, TimepointAssessment,
};

/// Percent change at or below which the response is partial.
pub const PARTIAL_RESPONSE_THRESHOLD: i32 = -30;

/// Percent change at or above which the disease is progressive.
pub const PROGRESSION_THRESHOLD: i32 = 20;

/// Sum of long-axis diameters over target lesions only.
pub fn target_sum_mm(measurements: &[LesionMeasurement]) -> f64 {
    measurements
        .iter()
        .map(LesionMeasurement::target_diameter_mm)
        .sum()
}

/// Classify a whole-percent change. `current_sum_mm == 0` wins over the
/// percent thresholds; both thresholds are inclusive.
pub fn classify_response(percent_change: i32, current_sum_mm: f64) -> ResponseCategory {
    if current_sum_mm == 0.0 {
        ResponseCategory::CompleteResponse
    } else if percent_change <= PARTIAL_RESPONSE_THRESHOLD {
        ResponseCategory::PartialResponse
    } else if percent_change >= PROGRESSION_THRESHOLD {
        ResponseCategory::ProgressiveDisease
    } else {
        ResponseCategory::StableDisease
    }
}

/// Compare a baseline timepoint against a current one.
///
/// Returns `None` when the baseline has no target-lesion burden, since there
/// is nothing to compare against.
pub fn calculate_recist(
    baseline: &[LesionMeasurement],
    current: &[LesionMeasurement],
) -> Option<RecistResult> {
    let baseline_sum_mm = target_sum_mm(baseline);
    let current_sum_mm = target_sum_mm(current);
    if baseline_sum_mm == 0.0 {
        debug!("baseline target sum is zero; no response computed");
        return None;
    }

    // Halves round toward positive infinity, so -29.5 becomes -29.
    let percent_change =
        ((current_sum_mm - baseline_sum_mm) / baseline_sum_mm * 100.0 + 0.5).floor() as i32;
    let category = classify_response(percent_change, current_sum_mm);
    debug!(
        baseline_sum_mm,
        current_sum_mm,
        percent_change,
        category = category.abbreviation(),
        "recist response"
    );
    Some(RecistResult {
        category,
        percent_change,
        current_sum_mm,
        baseline_sum_mm,
    })
}

/// Earliest and latest distinct measurement dates, or `None` with fewer than
/// two distinct dates.
pub fn split_timepoints(measurements: &[LesionMeasurement]) -> Option<(NaiveDate, NaiveDate)> {
    let dates: BTreeSet<NaiveDate> = measurements.iter().map(|m| m.date).collect();
    if dates.len() < 2 {
        return None;
    }
    let baseline = dates.first().copied()?;
    let current = dates.last().copied()?;
    Some((baseline, current))
}

/// Assess response across a full measurement history.
///
/// The first measurement date is the baseline and the last is the current
/// timepoint; intermediate dates are ignored.
pub fn assess_response(measurements: &[LesionMeasurement]) -> Option<TimepointAssessment> {
    let Some((baseline_date, current_date)) = split_timepoints(measurements) else {
        debug!(
            measurement_count = measurements.len(),
            "fewer than two measurement dates; no response computed"
        );
        return None;
    };

    let on = |date: NaiveDate| -> Vec<LesionMeasurement> {
        measurements
            .iter()
            .filter(|m| m.date == date)
            .cloned()
            .collect()
    };
    let baseline = on(baseline_date);
    let current = on(current_date);

    let result = calculate_recist(&baseline, &current)?;
    let count_kind = |kind: LesionKind| current.iter().filter(|m| m.kind == kind).count();
    Some(TimepointAssessment {
        baseline_date,
        current_date,
        result,
        new_lesions: count_kind(LesionKind::New),
        non_target_lesions: count_kind(LesionKind::NonTarget),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_response_precedes_thresholds() {
        assert_eq!(
            classify_response(-100, 0.0),
            ResponseCategory::CompleteResponse
        );
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(classify_response(-30, 14.0), ResponseCategory::PartialResponse);
        assert_eq!(classify_response(-29, 14.2), ResponseCategory::StableDisease);
        assert_eq!(classify_response(20, 24.0), ResponseCategory::ProgressiveDisease);
        assert_eq!(classify_response(19, 23.8), ResponseCategory::StableDisease);
    }

    #[test]
    fn empty_history_has_no_timepoints() {
        assert_eq!(split_timepoints(&[]), None);
        assert_eq!(assess_response(&[]), None);
    }
}
