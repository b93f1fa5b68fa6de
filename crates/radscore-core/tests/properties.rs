//! Property tests for the scoring invariants.

use chrono::NaiveDate;
use proptest::prelude::*;

use radscore_core::{calculate_recist, calculate_risk, overall_stage};
use radscore_model::{LesionKind, LesionMeasurement, M_CODES, N_CODES, T_CODES};

fn risk_factors() -> impl Strategy<Value = radscore_model::RiskFactors> {
    (
        30u32..=90,
        4.0..=30.0f64,
        any::<[bool; 5]>(),
        0.0..=60.0f64,
    )
        .prop_map(|(age, size, flags, pack_years)| radscore_model::RiskFactors {
            age,
            nodule_size_mm: size,
            upper_lobe: flags[0],
            spiculation: flags[1],
            part_solid: flags[2],
            family_history: flags[3],
            emphysema: flags[4],
            pack_years,
        })
}

fn targets(day: u32, sizes: &[f64]) -> Vec<LesionMeasurement> {
    let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
    sizes
        .iter()
        .enumerate()
        .map(|(index, size)| LesionMeasurement {
            id: format!("m{day}-{index}"),
            lesion_id: format!("L{index}"),
            location: "lung".to_string(),
            date,
            long_axis_mm: *size,
            short_axis_mm: size / 2.0,
            kind: LesionKind::Target,
        })
        .collect()
}

proptest! {
    #[test]
    fn score_stays_in_percent_range(factors in risk_factors()) {
        let result = calculate_risk(&factors);
        prop_assert!(result.score <= 100);
    }

    #[test]
    fn larger_nodule_never_lowers_score(factors in risk_factors(), growth in 0.0..=20.0f64) {
        let larger = radscore_model::RiskFactors {
            nodule_size_mm: factors.nodule_size_mm + growth,
            ..factors
        };
        prop_assert!(calculate_risk(&larger).score >= calculate_risk(&factors).score);
    }

    #[test]
    fn older_patient_never_lowers_score(factors in risk_factors(), years in 0u32..=30) {
        let older = radscore_model::RiskFactors {
            age: factors.age + years,
            ..factors
        };
        prop_assert!(calculate_risk(&older).score >= calculate_risk(&factors).score);
    }

    #[test]
    fn more_smoking_never_lowers_score(factors in risk_factors(), extra in 0.0..=40.0f64) {
        let heavier = radscore_model::RiskFactors {
            pack_years: factors.pack_years + extra,
            ..factors
        };
        prop_assert!(calculate_risk(&heavier).score >= calculate_risk(&factors).score);
    }

    #[test]
    fn setting_a_flag_never_lowers_score(factors in risk_factors(), flag in 0usize..5) {
        let mut flagged = factors;
        match flag {
            0 => flagged.upper_lobe = true,
            1 => flagged.spiculation = true,
            2 => flagged.part_solid = true,
            3 => flagged.family_history = true,
            _ => flagged.emphysema = true,
        }
        prop_assert!(calculate_risk(&flagged).score >= calculate_risk(&factors).score);
    }

    #[test]
    fn category_follows_score(factors in risk_factors()) {
        let result = calculate_risk(&factors);
        prop_assert_eq!(result.category, radscore_model::RiskCategory::from_score(result.score));
    }

    #[test]
    fn recist_is_never_nan(
        baseline in proptest::collection::vec(0.0..=80.0f64, 0..6),
        current in proptest::collection::vec(0.0..=80.0f64, 0..6),
    ) {
        let result = calculate_recist(&targets(1, &baseline), &targets(2, &current));
        let baseline_sum: f64 = baseline.iter().sum();
        if baseline_sum == 0.0 {
            prop_assert!(result.is_none());
        } else {
            let result = result.unwrap();
            prop_assert!(result.current_sum_mm.is_finite());
            prop_assert!(result.percent_change >= -100);
        }
    }

    #[test]
    fn staging_is_total_over_documented_codes(
        t in prop::sample::select(T_CODES.to_vec()),
        n in prop::sample::select(N_CODES.to_vec()),
        m in prop::sample::select(M_CODES.to_vec()),
    ) {
        let first = overall_stage(t, n, m);
        prop_assert_eq!(first, overall_stage(t, n, m));
    }
}
