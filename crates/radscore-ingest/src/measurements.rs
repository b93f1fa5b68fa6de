//! Lesion measurement CSV loading.
//!
//! Expected columns (header names are matched case-insensitively, with
//! spaces and hyphens treated as underscores):
//!
//! | column        | aliases                      | required |
//! |---------------|------------------------------|----------|
//! | `id`          | `measurement_id`             | no       |
//! | `lesion_id`   | `lesion`                     | yes      |
//! | `location`    | `site`                       | yes      |
//! | `date`        | `measurement_date`           | yes      |
//! | `long_axis`   | `long_axis_mm`               | yes      |
//! | `short_axis`  | `short_axis_mm`              | yes      |
//! | `type`        | `kind`, `measurement_type`   | yes      |
//!
//! Rows whose cells are all blank are skipped. When `id` is absent the
//! 1-based line number is used.

use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use radscore_model::{LesionKind, LesionMeasurement};

use crate::error::{IngestError, Result};

const ID: &[&str] = &["id", "measurement_id"];
const LESION_ID: &[&str] = &["lesion_id", "lesion"];
const LOCATION: &[&str] = &["location", "site"];
const DATE: &[&str] = &["date", "measurement_date"];
const LONG_AXIS: &[&str] = &["long_axis", "long_axis_mm"];
const SHORT_AXIS: &[&str] = &["short_axis", "short_axis_mm"];
const KIND: &[&str] = &["type", "kind", "measurement_type"];

fn normalize_header(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .trim()
        .to_lowercase()
        .replace([' ', '-'], "_")
}

fn normalize_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

/// Column positions resolved from the header row.
struct Columns {
    id: Option<usize>,
    lesion_id: usize,
    location: usize,
    date: usize,
    long_axis: usize,
    short_axis: usize,
    kind: usize,
}

impl Columns {
    fn resolve(path: &Path, headers: &StringRecord) -> Result<Self> {
        let names: Vec<String> = headers.iter().map(normalize_header).collect();
        let find = |aliases: &[&str]| {
            names
                .iter()
                .position(|name| aliases.iter().any(|alias| *alias == name.as_str()))
        };
        let require = |aliases: &[&str]| {
            find(aliases).ok_or_else(|| IngestError::MissingColumn {
                path: path.to_path_buf(),
                column: aliases[0].to_string(),
            })
        };
        Ok(Self {
            id: find(ID),
            lesion_id: require(LESION_ID)?,
            location: require(LOCATION)?,
            date: require(DATE)?,
            long_axis: require(LONG_AXIS)?,
            short_axis: require(SHORT_AXIS)?,
            kind: require(KIND)?,
        })
    }
}

struct RowReader<'a> {
    path: &'a Path,
    record: &'a StringRecord,
    row: usize,
}

impl RowReader<'_> {
    fn text(&self, index: usize) -> &str {
        self.record.get(index).map(normalize_cell).unwrap_or("")
    }

    fn invalid(&self, column: &str, message: impl Into<String>) -> IngestError {
        IngestError::InvalidField {
            path: self.path.to_path_buf(),
            row: self.row,
            column: column.to_string(),
            message: message.into(),
        }
    }

    fn required(&self, index: usize, column: &str) -> Result<String> {
        let value = self.text(index);
        if value.is_empty() {
            return Err(self.invalid(column, "value is empty"));
        }
        Ok(value.to_string())
    }

    fn millimeters(&self, index: usize, column: &str) -> Result<f64> {
        let value = self.text(index);
        let parsed: f64 = value
            .parse()
            .map_err(|_| self.invalid(column, format!("expected a number, got {value:?}")))?;
        if !parsed.is_finite() || parsed < 0.0 {
            return Err(self.invalid(column, format!("expected a non-negative length, got {value}")));
        }
        Ok(parsed)
    }

    fn date(&self, index: usize) -> Result<NaiveDate> {
        let value = self.text(index);
        // Accept full timestamps by keeping only the calendar date.
        let date_part = value.split('T').next().unwrap_or(value);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map_err(|e| self.invalid("date", format!("expected YYYY-MM-DD, got {value:?} ({e})")))
    }
}

/// Read lesion measurements from a CSV file.
///
/// # Errors
///
/// Returns an error when the file cannot be read, a required column is
/// missing, or a row holds an unparseable value.
pub fn read_measurements_csv(path: &Path) -> Result<Vec<LesionMeasurement>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| csv_error(path, source))?;
    let headers = reader
        .headers()
        .map_err(|source| csv_error(path, source))?
        .clone();
    let columns = Columns::resolve(path, &headers)?;

    let mut measurements = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|source| csv_error(path, source))?;
        if record.iter().all(|value| normalize_cell(value).is_empty()) {
            continue;
        }
        let row = record
            .position()
            .map_or(index + 2, |position| position.line() as usize);
        let fields = RowReader {
            path,
            record: &record,
            row,
        };

        let id = match columns.id.map(|idx| fields.text(idx)) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => row.to_string(),
        };
        let kind_text = fields.text(columns.kind);
        let kind = kind_text
            .parse::<LesionKind>()
            .map_err(|e| fields.invalid("type", e.to_string()))?;

        measurements.push(LesionMeasurement {
            id,
            lesion_id: fields.required(columns.lesion_id, "lesion_id")?,
            location: fields.required(columns.location, "location")?,
            date: fields.date(columns.date)?,
            long_axis_mm: fields.millimeters(columns.long_axis, "long_axis")?,
            short_axis_mm: fields.millimeters(columns.short_axis, "short_axis")?,
            kind,
        });
        debug!(row, kind = %kind, "measurement row parsed");
    }

    info!(
        path = %path.display(),
        measurement_count = measurements.len(),
        "measurements loaded"
    );
    Ok(measurements)
}

fn csv_error(path: &Path, source: csv::Error) -> IngestError {
    IngestError::Csv {
        path: path.to_path_buf(),
        source,
    }
}
