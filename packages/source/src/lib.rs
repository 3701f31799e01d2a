#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Animal intake CSV loading.
//!
//! Reads the shelter's intake export once into an [`IntakeTable`]. Any
//! problem with the file (missing, malformed, unparsable date-time or
//! coordinate, no rows) is reported as a [`SourceError`] and is meant to be
//! fatal at startup.

pub mod parsing;
pub mod paths;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Deserialize;
use shelter_dash_intake_models::{DateRange, IntakeRecord};

/// Columns that must be present in the export header.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "Animal ID",
    "DateTime",
    "Animal Type",
    "Found Location",
    "Found Latitude",
    "Found Longitude",
    "Found Zipcode",
];

/// Errors that can occur while loading the intake table.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// I/O error (file open/read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the header row.
    #[error("Missing required column '{column}'")]
    MissingColumn {
        /// Name of the missing column.
        column: String,
    },

    /// The `DateTime` field could not be parsed.
    #[error("Line {line}: unparsable DateTime '{value}'")]
    DateTime {
        /// 1-based line in the file.
        line: u64,
        /// The raw field value.
        value: String,
    },

    /// A coordinate field was present but not a number.
    #[error("Line {line}: unparsable {column} '{value}'")]
    Coordinate {
        /// 1-based line in the file.
        line: u64,
        /// Which coordinate column.
        column: &'static str,
        /// The raw field value.
        value: String,
    },

    /// The file has a header but no records.
    #[error("Intake table contains no records")]
    Empty,
}

/// One CSV row as it appears in the export.
#[derive(Debug, Deserialize)]
struct RawIntakeRow {
    #[serde(rename = "Animal ID")]
    animal_id: String,
    #[serde(rename = "DateTime")]
    date_time: String,
    #[serde(rename = "Animal Type")]
    animal_type: String,
    #[serde(rename = "Found Location")]
    found_location: Option<String>,
    #[serde(rename = "Found Latitude")]
    found_latitude: Option<String>,
    #[serde(rename = "Found Longitude")]
    found_longitude: Option<String>,
    #[serde(rename = "Found Zipcode")]
    found_zipcode: Option<String>,
}

impl RawIntakeRow {
    fn into_record(self, line: u64) -> Result<IntakeRecord, SourceError> {
        let timestamp = parsing::parse_intake_datetime(&self.date_time).ok_or_else(|| {
            SourceError::DateTime {
                line,
                value: self.date_time.clone(),
            }
        })?;

        let found_latitude =
            parsing::parse_coordinate(self.found_latitude.as_deref()).map_err(|_| {
                SourceError::Coordinate {
                    line,
                    column: "Found Latitude",
                    value: self.found_latitude.clone().unwrap_or_default(),
                }
            })?;
        let found_longitude =
            parsing::parse_coordinate(self.found_longitude.as_deref()).map_err(|_| {
                SourceError::Coordinate {
                    line,
                    column: "Found Longitude",
                    value: self.found_longitude.clone().unwrap_or_default(),
                }
            })?;

        Ok(IntakeRecord {
            id: self.animal_id,
            timestamp,
            animal_type: self.animal_type,
            found_location: non_blank(self.found_location),
            found_latitude,
            found_longitude,
            found_zipcode: non_blank(self.found_zipcode),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// The full intake table, loaded once and shared read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeTable {
    records: Vec<IntakeRecord>,
    date_min: NaiveDateTime,
    date_max: NaiveDateTime,
}

impl IntakeTable {
    /// Builds a table from records, computing the observed timestamp bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Empty`] if `records` is empty, since there is
    /// no range to offer the date picker.
    pub fn new(records: Vec<IntakeRecord>) -> Result<Self, SourceError> {
        let mut timestamps = records.iter().map(|r| r.timestamp);
        let first = timestamps.next().ok_or(SourceError::Empty)?;
        let (date_min, date_max) =
            timestamps.fold((first, first), |(lo, hi), ts| (lo.min(ts), hi.max(ts)));

        Ok(Self {
            records,
            date_min,
            date_max,
        })
    }

    /// All records, in file order.
    #[must_use]
    pub fn records(&self) -> &[IntakeRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`; an empty table cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest intake timestamp.
    #[must_use]
    pub const fn date_min(&self) -> NaiveDateTime {
        self.date_min
    }

    /// Latest intake timestamp.
    #[must_use]
    pub const fn date_max(&self) -> NaiveDateTime {
        self.date_max
    }

    /// The full observed range `[date_min, date_max]`.
    #[must_use]
    pub const fn full_range(&self) -> DateRange {
        DateRange::new(self.date_min, self.date_max)
    }
}

/// Loads the intake table from a CSV file on disk.
///
/// # Errors
///
/// Returns [`SourceError`] if the file cannot be opened or any row fails to
/// parse.
pub fn load_csv(path: &Path) -> Result<IntakeTable, SourceError> {
    log::info!("Loading intake records from {}", path.display());
    let file = File::open(path)?;
    let table = read_csv(file)?;
    log::info!(
        "Loaded {} intake records spanning {} to {}",
        table.len(),
        table.date_min(),
        table.date_max()
    );
    Ok(table)
}

/// Reads the intake table from any CSV byte stream.
///
/// # Errors
///
/// Returns [`SourceError`] if the header lacks a required column, a row is
/// malformed, or the stream holds no records.
pub fn read_csv<R: Read>(reader: R) -> Result<IntakeTable, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(SourceError::MissingColumn {
            column: (*missing).to_string(),
        });
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let line = row.position().map_or(0, csv::Position::line);
        let raw: RawIntakeRow = row.deserialize(Some(&headers))?;
        records.push(raw.into_record(line)?);
    }

    log::debug!("Parsed {} CSV rows", records.len());

    IntakeTable::new(records)
}
