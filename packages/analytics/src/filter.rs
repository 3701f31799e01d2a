//! Inclusive date-range filtering over the intake table.

use chrono::NaiveDateTime;
use shelter_dash_intake_models::{DateRange, IntakeRecord};

/// Returns the records whose timestamp lies in `[range_min, range_max]`,
/// in their original order.
///
/// The input is only borrowed, so the full table is never touched. An empty
/// result (including when `range_min > range_max`) is valid.
#[must_use]
pub fn filter_by_range(
    records: &[IntakeRecord],
    range_min: NaiveDateTime,
    range_max: NaiveDateTime,
) -> Vec<&IntakeRecord> {
    let range = DateRange::new(range_min, range_max);
    records
        .iter()
        .filter(|r| range.contains(&r.timestamp))
        .collect()
}
