#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Date-range filtering and group-and-count aggregation over intake records.
//!
//! [`render`] is the whole dashboard pipeline as one pure function: filter
//! the full table to the picked range, run the aggregation for the picked
//! view, and wrap the result in a [`ChartSpec`]. Nothing is cached between
//! calls, so the shell can call it again on every input change.

pub mod aggregate;
pub mod chart;
pub mod filter;

#[cfg(test)]
mod fixtures;

use chrono::NaiveDateTime;
use shelter_dash_analytics_models::ChartSpec;
use shelter_dash_intake_models::{IntakeRecord, ViewSelector};

pub use aggregate::{aggregate_location_counts, aggregate_time_series, aggregate_type_counts};
pub use filter::filter_by_range;

/// Builds the chart for `view` over the records in `[range_min, range_max]`.
#[must_use]
pub fn render(
    records: &[IntakeRecord],
    range_min: NaiveDateTime,
    range_max: NaiveDateTime,
    view: ViewSelector,
) -> ChartSpec {
    let sub = filter_by_range(records, range_min, range_max);
    let total = sub.len() as u64;

    log::debug!(
        "Rendering {view} view over {range_min}..={range_max} ({total} of {} records)",
        records.len()
    );

    match view {
        ViewSelector::Type => chart::pie_chart(aggregate_type_counts(&sub), total),
        ViewSelector::Time => chart::line_chart(&aggregate_time_series(&sub), total),
        ViewSelector::Location => {
            chart::scatter_geo_chart(aggregate_location_counts(&sub), total)
        }
    }
}
