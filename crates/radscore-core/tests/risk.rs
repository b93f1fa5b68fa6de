use radscore_core::{RiskModel, calculate_risk};
use radscore_model::{RiskCategory, RiskFactors};

fn factors(age: u32, size: f64) -> RiskFactors {
    RiskFactors {
        age,
        nodule_size_mm: size,
        ..RiskFactors::default()
    }
}

#[test]
fn small_nodule_in_younger_patient_is_very_low() {
    let result = calculate_risk(&factors(30, 4.0));
    assert_eq!(result.score, 2);
    assert_eq!(result.category, RiskCategory::VeryLow);
}

#[test]
fn typical_incidental_nodule_is_low() {
    let result = calculate_risk(&factors(60, 8.0));
    assert_eq!(result.score, 9);
    assert_eq!(result.category, RiskCategory::Low);
}

#[test]
fn part_solid_with_emphysema_is_intermediate() {
    let result = calculate_risk(&RiskFactors {
        part_solid: true,
        emphysema: true,
        pack_years: 20.0,
        ..factors(68, 9.0)
    });
    assert_eq!(result.score, 27);
    assert_eq!(result.category, RiskCategory::Intermediate);
}

#[test]
fn spiculated_upper_lobe_smoker_is_high() {
    let result = calculate_risk(&RiskFactors {
        upper_lobe: true,
        spiculation: true,
        pack_years: 40.0,
        ..factors(70, 20.0)
    });
    assert_eq!(result.score, 73);
    assert_eq!(result.category, RiskCategory::High);
    assert_eq!(
        result.recommendation(),
        "PET/CT and tissue sampling or surgical consultation"
    );
}

#[test]
fn every_flag_set_at_upper_bounds() {
    let result = calculate_risk(&RiskFactors {
        age: 90,
        nodule_size_mm: 30.0,
        upper_lobe: true,
        spiculation: true,
        part_solid: true,
        family_history: true,
        emphysema: true,
        pack_years: 60.0,
    });
    assert_eq!(result.score, 96);
}

#[test]
fn zero_pack_years_adds_nothing() {
    let model = RiskModel::default();
    let base = factors(55, 6.0);
    let expected = model.intercept + model.age * 55.0 + model.size * 7.0_f64.ln();
    assert!((model.logit(&base) - expected).abs() < 1e-12);
    assert_eq!(calculate_risk(&base).score, 6);
}

#[test]
fn custom_model_overrides_coefficients() {
    let model = RiskModel {
        intercept: 0.0,
        age: 0.0,
        size: 0.0,
        ..RiskModel::default()
    };
    let result = model.calculate(&factors(70, 10.0));
    assert_eq!(result.score, 50);
    assert_eq!(result.category, RiskCategory::High);
}

#[test]
fn partial_model_config_keeps_defaults() {
    let model: RiskModel = toml::from_str("intercept = -7.0\nsmoking_cap = 40.0\n").unwrap();
    assert!((model.intercept + 7.0).abs() < f64::EPSILON);
    assert!((model.smoking_cap - 40.0).abs() < f64::EPSILON);
    assert!((model.spiculation - RiskModel::default().spiculation).abs() < f64::EPSILON);
}

#[test]
fn unknown_model_keys_are_rejected() {
    let parsed: Result<RiskModel, _> = toml::from_str("intercept = -7.0\nlobe = 1.0\n");
    assert!(parsed.is_err());
}

#[test]
fn repeated_calls_are_identical() {
    let input = RiskFactors {
        family_history: true,
        pack_years: 12.5,
        ..factors(61, 11.0)
    };
    let first = serde_json::to_string(&calculate_risk(&input)).unwrap();
    let second = serde_json::to_string(&calculate_risk(&input)).unwrap();
    assert_eq!(first, second);
}
