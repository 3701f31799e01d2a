//! Location of the intake CSV.
//!
//! The path comes from the `INTAKES_CSV` environment variable, falling back
//! to the export's name under the working directory's `data/` folder.

use std::path::PathBuf;

/// Environment variable that overrides the CSV location.
pub const INTAKES_CSV_ENV: &str = "INTAKES_CSV";

/// Default CSV location, relative to the working directory.
pub const DEFAULT_INTAKES_CSV: &str =
    "data/Austin_Animal_Center_Intakes_061521_with_location_details.csv";

/// Returns the configured intake CSV path.
#[must_use]
pub fn intakes_csv_path() -> PathBuf {
    std::env::var_os(INTAKES_CSV_ENV)
        .filter(|v| !v.is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_INTAKES_CSV), PathBuf::from)
}
