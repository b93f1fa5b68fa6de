use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, info_span};

use radscore_cli::logging::redact_value;
use radscore_cli::summary::{
    INSUFFICIENT_DATA, RecistReport, RiskReport, StageReport, codes_table, recist_table,
    risk_table, stage_table,
};
use radscore_ingest::{load_configured_risk_model, read_measurements_csv, read_risk_factors_json};
use radscore_model::{RiskFactors, TnmCodes};

use crate::cli::{RecistArgs, RiskArgs, StageArgs};

pub fn run_risk(args: &RiskArgs) -> Result<()> {
    let _span = info_span!("risk").entered();
    let factors = risk_factors(args)?;
    let model =
        load_configured_risk_model(args.model.as_deref()).context("load risk model")?;
    let result = model.calculate(&factors);
    info!(score = result.score, category = %result.category, "risk scored");

    let report = RiskReport::new(&result, args.reference_date);
    if args.json {
        print_json(&report)
    } else {
        println!("{}", risk_table(&report));
        Ok(())
    }
}

/// Merge the optional JSON input with the flags; flags win.
fn risk_factors(args: &RiskArgs) -> Result<RiskFactors> {
    let base = match &args.input {
        Some(path) => Some(
            read_risk_factors_json(path)
                .with_context(|| format!("read risk factors from {}", path.display()))?,
        ),
        None => None,
    };
    args.factors.apply(base).context("invalid risk factors")
}

pub fn run_recist(args: &RecistArgs) -> Result<()> {
    let _span = info_span!("recist").entered();
    let measurements = read_measurements_csv(&args.measurements).with_context(|| {
        format!("read measurements from {}", args.measurements.display())
    })?;
    for measurement in &measurements {
        debug!(
            lesion = redact_value(&measurement.lesion_id),
            location = redact_value(&measurement.location),
            date = %measurement.date,
            kind = %measurement.kind,
            long_axis_mm = measurement.long_axis_mm,
            "measurement"
        );
    }

    let report = RecistReport::from_measurements(&measurements);
    if args.json {
        return print_json(&report);
    }
    match &report.assessment {
        Some(assessment) => {
            info!(category = %assessment.result.category, "response classified");
            println!("{}", recist_table(assessment));
        }
        None => println!("{INSUFFICIENT_DATA}"),
    }
    Ok(())
}

pub fn run_stage(args: &StageArgs) -> Result<()> {
    let codes = TnmCodes::parse(&args.t, &args.n, &args.m).context("parse TNM codes")?;
    let report = StageReport::new(codes);
    info!(stage = %report.stage, "stage derived");
    if args.json {
        print_json(&report)
    } else {
        println!("{}", stage_table(&report));
        Ok(())
    }
}

pub fn run_codes() {
    println!("{}", codes_table());
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize report")?;
    println!("{json}");
    Ok(())
}
