//! Group-and-count aggregations behind the three dashboard views.
//!
//! Each function takes a filtered sub-table and builds its summary from
//! scratch. None of them mutate their input.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use chrono::Datelike as _;
use shelter_dash_analytics_models::{LocationCount, MonthlyCount, TypeCount};
use shelter_dash_intake_models::{FoundPoint, IntakeRecord};

/// Bucket that rare animal types are merged into.
pub const OTHER_TYPE: &str = "Other";

/// Animal types merged into [`OTHER_TYPE`]. Matched exactly, case-sensitive.
pub const MERGED_TYPES: &[&str] = &["Bird", "Livestock"];

/// Maps a raw animal type to the bucket it is counted under.
#[must_use]
pub fn grouped_type(raw: &str) -> &str {
    if MERGED_TYPES.contains(&raw) {
        OTHER_TYPE
    } else {
        raw
    }
}

/// Counts intakes per animal type, after merging [`MERGED_TYPES`] into
/// [`OTHER_TYPE`].
///
/// Rows are ordered by descending count. Ties keep the order in which each
/// type first appears in `records`.
#[must_use]
pub fn aggregate_type_counts(records: &[&IntakeRecord]) -> Vec<TypeCount> {
    let mut counts: Vec<(&str, u64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let bucket = grouped_type(&record.animal_type);
        match index.get(bucket) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(bucket, counts.len());
                counts.push((bucket, 1));
            }
        }
    }

    // Stable sort: equal counts stay in first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .map(|(animal_type, count)| TypeCount {
            animal_type: animal_type.to_string(),
            count,
        })
        .collect()
}

/// Counts intakes per calendar (year, month).
///
/// Only months with at least one intake appear. Rows are ordered by year,
/// then month.
#[must_use]
pub fn aggregate_time_series(records: &[&IntakeRecord]) -> Vec<MonthlyCount> {
    let mut counts: BTreeMap<(i32, u32), u64> = BTreeMap::new();

    for record in records {
        let key = (record.timestamp.year(), record.timestamp.month());
        *counts.entry(key).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|((year, month), count)| MonthlyCount { year, month, count })
        .collect()
}

/// Counts intakes per exact (location, latitude, longitude) triple.
///
/// Records without a [`FoundPoint`] are dropped. Two location names that
/// share coordinates stay separate rows. Rows are ordered by location name,
/// then latitude, then longitude.
#[must_use]
pub fn aggregate_location_counts(records: &[&IntakeRecord]) -> Vec<LocationCount> {
    let mut points: Vec<FoundPoint<'_>> = records.iter().filter_map(|r| r.found_point()).collect();
    points.sort_by(compare_points);

    let mut out: Vec<LocationCount> = Vec::new();
    let mut current: Option<(FoundPoint<'_>, u64)> = None;

    for point in points {
        if let Some((group, count)) = current.as_mut()
            && compare_points(group, &point) == Ordering::Equal
        {
            *count += 1;
            continue;
        }
        if let Some((group, count)) = current.replace((point, 1)) {
            out.push(location_count(group, count));
        }
    }
    if let Some((group, count)) = current {
        out.push(location_count(group, count));
    }

    out
}

fn compare_points(a: &FoundPoint<'_>, b: &FoundPoint<'_>) -> Ordering {
    a.location
        .cmp(b.location)
        .then_with(|| a.latitude.total_cmp(&b.latitude))
        .then_with(|| a.longitude.total_cmp(&b.longitude))
}

fn location_count(point: FoundPoint<'_>, count: u64) -> LocationCount {
    LocationCount {
        location: point.location.to_string(),
        latitude: point.latitude,
        longitude: point.longitude,
        count,
    }
}
