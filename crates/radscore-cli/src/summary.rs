//! Result reports and their table rendering.

use chrono::NaiveDate;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use radscore_core::{StageExt, assess_response, recommend_follow_up};
use radscore_model::{
    LesionMeasurement, M_CODES, N_CODES, OverallStage, ResponseCategory, RiskCategory,
    RiskResult, T_CODES, TimepointAssessment, TnmCodes,
};

/// Rendered outcome of `radscore risk`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskReport {
    pub score: u8,
    pub category: RiskCategory,
    pub recommendation: String,
    /// Follow-up interval, e.g. `6-12 months`.
    pub interval: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl RiskReport {
    /// Build a report, scheduling the follow-up when a reference date is known.
    pub fn new(result: &RiskResult, reference_date: Option<NaiveDate>) -> Self {
        let due_date =
            reference_date.map(|reference| recommend_follow_up(result, reference).due_date);
        Self {
            score: result.score,
            category: result.category,
            recommendation: result.recommendation().to_string(),
            interval: result.category.follow_up_interval().to_string(),
            due_date,
        }
    }
}

/// Rendered outcome of `radscore recist`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecistReport {
    pub measurement_count: usize,
    /// `None` when there is not enough data for a trend.
    pub assessment: Option<TimepointAssessment>,
}

impl RecistReport {
    pub fn from_measurements(measurements: &[LesionMeasurement]) -> Self {
        Self {
            measurement_count: measurements.len(),
            assessment: assess_response(measurements),
        }
    }
}

/// Rendered outcome of `radscore stage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageReport {
    pub t: String,
    pub n: String,
    pub m: String,
    pub stage: OverallStage,
}

impl StageReport {
    pub fn new(codes: TnmCodes) -> Self {
        let stage = codes.overall_stage();
        let TnmCodes { t, n, m } = codes;
        Self { t, n, m, stage }
    }
}

/// Message shown when a measurement history has no computable response.
pub const INSUFFICIENT_DATA: &str = "insufficient data for trend";

pub fn risk_table(report: &RiskReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("Malignancy risk"),
        Cell::new(format!("{}%", report.score)).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Category"),
        Cell::new(report.category.as_str()).fg(risk_color(report.category)),
    ]);
    table.add_row(vec![
        Cell::new("Recommendation"),
        Cell::new(&report.recommendation),
    ]);
    table.add_row(vec![Cell::new("Interval"), Cell::new(&report.interval)]);
    table.add_row(vec![
        Cell::new("Due date"),
        match report.due_date {
            Some(date) => Cell::new(date),
            None => dim_cell("-"),
        },
    ]);
    table
}

pub fn recist_table(assessment: &TimepointAssessment) -> Table {
    let result = &assessment.result;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Baseline"),
        header_cell("Current"),
        header_cell("Baseline mm"),
        header_cell("Current mm"),
        header_cell("Change"),
        header_cell("Response"),
        header_cell("New"),
        header_cell("Non-target"),
    ]);
    apply_table_style(&mut table);
    for index in 2..8 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(assessment.baseline_date),
        Cell::new(assessment.current_date),
        Cell::new(format!("{:.1}", result.baseline_sum_mm)),
        Cell::new(format!("{:.1}", result.current_sum_mm)),
        Cell::new(format!("{:+}%", result.percent_change)),
        Cell::new(format!(
            "{} ({})",
            result.category,
            result.category.abbreviation()
        ))
        .fg(response_color(result.category))
        .add_attribute(Attribute::Bold),
        count_cell(assessment.new_lesions, Color::Red),
        count_cell(assessment.non_target_lesions, Color::Yellow),
    ]);
    table
}

pub fn stage_table(report: &StageReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("T"),
        header_cell("N"),
        header_cell("M"),
        header_cell("Stage"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(&report.t),
        Cell::new(&report.n),
        Cell::new(&report.m),
        Cell::new(report.stage)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

/// One column per axis listing every accepted code.
pub fn codes_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("T (tumor)"),
        header_cell("N (nodes)"),
        header_cell("M (metastasis)"),
    ]);
    apply_table_style(&mut table);
    let rows = T_CODES.len().max(N_CODES.len()).max(M_CODES.len());
    for index in 0..rows {
        table.add_row(
            [&T_CODES[..], &N_CODES[..], &M_CODES[..]]
                .iter()
                .map(|codes| codes.get(index).copied().unwrap_or(""))
                .collect::<Vec<_>>(),
        );
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn risk_color(category: RiskCategory) -> Color {
    match category {
        RiskCategory::VeryLow | RiskCategory::Low => Color::Green,
        RiskCategory::Intermediate => Color::Yellow,
        RiskCategory::High => Color::Red,
    }
}

fn response_color(category: ResponseCategory) -> Color {
    match category {
        ResponseCategory::CompleteResponse | ResponseCategory::PartialResponse => Color::Green,
        ResponseCategory::StableDisease => Color::Yellow,
        ResponseCategory::ProgressiveDisease => Color::Red,
    }
}
