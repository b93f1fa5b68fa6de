//! Tests for report building and rendering.

use std::fs;

use chrono::NaiveDate;
use serde_json::json;
use tempfile::TempDir;

use radscore_cli::summary::{
    RecistReport, RiskReport, StageReport, codes_table, recist_table, risk_table, stage_table,
};
use radscore_core::calculate_risk;
use radscore_ingest::read_measurements_csv;
use radscore_model::{ResponseCategory, RiskFactors, TnmCodes};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn intermediate_factors() -> RiskFactors {
    RiskFactors {
        age: 68,
        nodule_size_mm: 9.0,
        part_solid: true,
        emphysema: true,
        pack_years: 20.0,
        ..RiskFactors::default()
    }
}

#[test]
fn risk_report_snapshot() {
    let result = calculate_risk(&intermediate_factors());
    let report = RiskReport::new(&result, Some(date(2024, 1, 1)));
    insta::assert_json_snapshot!("risk_report_intermediate", report);
}

#[test]
fn risk_report_without_reference_date_omits_due_date() {
    let result = calculate_risk(&RiskFactors {
        age: 30,
        nodule_size_mm: 4.0,
        ..RiskFactors::default()
    });
    let report = RiskReport::new(&result, None);
    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({
            "score": 2,
            "category": "Very Low",
            "recommendation": "Optional CT at 12 months",
            "interval": "12 months",
        })
    );
}

#[test]
fn stage_report_snapshot() {
    let codes = TnmCodes::parse("t1", "n3", "m0").unwrap();
    let report = StageReport::new(codes);
    insta::assert_json_snapshot!("stage_report_iiic", report);
}

#[test]
fn recist_report_from_csv() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("measurements.csv");
    fs::write(
        &path,
        "id,lesion_id,location,date,long_axis,short_axis,type\n\
         1,L1,Liver,2024-01-05,12,8,target\n\
         2,L2,Lung,2024-01-05,8,5,target\n\
         3,L3,Node,2024-01-05,15,11,non-target\n\
         4,L1,Liver,2024-03-05,8,6,target\n\
         5,L2,Lung,2024-03-05,6,4,target\n",
    )
    .expect("write csv");

    let measurements = read_measurements_csv(&path).expect("read measurements");
    let report = RecistReport::from_measurements(&measurements);
    assert_eq!(report.measurement_count, 5);

    let assessment = report.assessment.expect("assessment");
    assert_eq!(assessment.baseline_date, date(2024, 1, 5));
    assert_eq!(assessment.current_date, date(2024, 3, 5));
    assert_eq!(
        assessment.result.category,
        ResponseCategory::PartialResponse
    );
    assert_eq!(assessment.result.percent_change, -30);

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["assessment"]["category"], json!("Partial Response"));
    assert_eq!(value["assessment"]["baseline_date"], json!("2024-01-05"));
    assert_eq!(value["assessment"]["new_lesions"], json!(0));
}

#[test]
fn recist_report_with_single_date_has_no_assessment() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("single.csv");
    fs::write(
        &path,
        "lesion_id,location,date,long_axis,short_axis,type\nL1,Liver,2024-01-05,12,8,target\n",
    )
    .expect("write csv");

    let measurements = read_measurements_csv(&path).expect("read measurements");
    let report = RecistReport::from_measurements(&measurements);
    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({ "measurement_count": 1, "assessment": null })
    );
}

#[test]
fn tables_render_key_values() {
    let result = calculate_risk(&intermediate_factors());
    let risk = risk_table(&RiskReport::new(&result, Some(date(2024, 1, 1)))).to_string();
    assert!(risk.contains("27%"));
    assert!(risk.contains("Intermediate"));
    assert!(risk.contains("2024-03-31"));

    let stage = stage_table(&StageReport::new(
        TnmCodes::parse("T4", "N0", "M0").unwrap(),
    ))
    .to_string();
    assert!(stage.contains("IIIA"));

    let codes = codes_table().to_string();
    for code in ["Tis", "NX", "M1c"] {
        assert!(codes.contains(code), "missing {code}");
    }
}

#[test]
fn recist_table_shows_signed_change() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("progression.csv");
    fs::write(
        &path,
        "lesion_id,location,date,long_axis,short_axis,type\n\
         L1,Liver,2024-01-05,20,10,target\n\
         L1,Liver,2024-04-05,24,12,target\n\
         L9,Bone,2024-04-05,7,5,new\n",
    )
    .expect("write csv");

    let measurements = read_measurements_csv(&path).expect("read measurements");
    let report = RecistReport::from_measurements(&measurements);
    let assessment = report.assessment.expect("assessment");
    let rendered = recist_table(&assessment).to_string();
    assert!(rendered.contains("+20%"));
    assert!(rendered.contains("Progressive Disease (PD)"));
}
