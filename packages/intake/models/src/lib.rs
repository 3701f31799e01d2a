#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Animal intake record types and dashboard view definitions.
//!
//! An [`IntakeRecord`] is one row of the shelter's intake export. Records are
//! loaded once and never mutated; every dashboard view is derived from a
//! filtered copy of the full table.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// One logged event of an animal entering the shelter system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeRecord {
    /// Shelter-assigned animal ID (e.g. "A786884").
    pub id: String,
    /// When the intake happened, in the shelter's local wall time.
    pub timestamp: NaiveDateTime,
    /// Raw animal type ("Dog", "Cat", "Bird", "Livestock", ...).
    pub animal_type: String,
    /// Free-text description of where the animal was found.
    pub found_location: Option<String>,
    /// Geocoded latitude of the found location.
    pub found_latitude: Option<f64>,
    /// Geocoded longitude of the found location.
    pub found_longitude: Option<f64>,
    /// Zipcode of the found location. Only used to tell whether the
    /// location was geocoded at all.
    pub found_zipcode: Option<String>,
}

/// A geocoded found location borrowed from an [`IntakeRecord`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoundPoint<'a> {
    /// Found location text.
    pub location: &'a str,
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
}

impl IntakeRecord {
    /// Returns the geocoded found location, or `None` when the record was
    /// never geocoded (no zipcode) or any part of the location is missing.
    /// Non-finite coordinates count as missing.
    #[must_use]
    pub fn found_point(&self) -> Option<FoundPoint<'_>> {
        self.found_zipcode.as_ref()?;
        Some(FoundPoint {
            location: self.found_location.as_deref()?,
            latitude: self.found_latitude.filter(|v| v.is_finite())?,
            longitude: self.found_longitude.filter(|v| v.is_finite())?,
        })
    }
}

/// An inclusive timestamp range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First instant included in the range.
    pub start: NaiveDateTime,
    /// Last instant included in the range.
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Creates a range covering `start` through `end`, both inclusive.
    #[must_use]
    pub const fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Returns `true` if `timestamp` lies within the range.
    #[must_use]
    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        self.start <= *timestamp && *timestamp <= self.end
    }
}

/// First instant of `day`, for the start of a date-picker range.
#[must_use]
pub fn start_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::default())
}

/// Last representable instant of `day`, so a date-picker range includes
/// the whole of its final day.
#[must_use]
pub fn end_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or_default())
}

/// Which of the three dashboard summaries to render.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ViewSelector {
    /// Pie chart of intake types
    Type,
    /// Monthly intake counts, one line per year
    Time,
    /// Map of found locations
    Location,
}

impl ViewSelector {
    /// Heading shown above the chart for this view.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Type => "Types of Animal Intakes",
            Self::Time => "Animal Intakes Over Time",
            Self::Location => "Found Locations of Animals",
        }
    }

    /// Returns all variants of this enum, in selector order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Type, Self::Time, Self::Location]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> IntakeRecord {
        IntakeRecord {
            id: "A1".to_string(),
            timestamp: NaiveDate::from_ymd_opt(2019, 3, 4)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            animal_type: "Dog".to_string(),
            found_location: Some("Austin (TX)".to_string()),
            found_latitude: Some(30.27),
            found_longitude: Some(-97.74),
            found_zipcode: Some("78701".to_string()),
        }
    }

    #[test]
    fn found_point_requires_zipcode() {
        let mut rec = record();
        assert!(rec.found_point().is_some());
        rec.found_zipcode = None;
        assert!(rec.found_point().is_none());
    }

    #[test]
    fn found_point_requires_every_part() {
        let mut rec = record();
        rec.found_latitude = None;
        assert!(rec.found_point().is_none());

        let mut rec = record();
        rec.found_location = None;
        assert!(rec.found_point().is_none());

        let mut rec = record();
        rec.found_longitude = Some(f64::NAN);
        assert!(rec.found_point().is_none());
    }

    #[test]
    fn day_range_covers_whole_last_day() {
        let first = NaiveDate::from_ymd_opt(2019, 2, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(2019, 2, 28).unwrap();
        let range = DateRange::new(start_of_day(first), end_of_day(last));

        assert!(range.contains(&first.and_hms_opt(0, 0, 0).unwrap()));
        assert!(range.contains(&last.and_hms_opt(23, 59, 59).unwrap()));
        let next_day = NaiveDate::from_ymd_opt(2019, 3, 1).unwrap();
        assert!(!range.contains(&next_day.and_hms_opt(0, 0, 0).unwrap()));
    }

    #[test]
    fn view_selector_parses_case_insensitively() {
        assert_eq!("type".parse::<ViewSelector>().unwrap(), ViewSelector::Type);
        assert_eq!("TIME".parse::<ViewSelector>().unwrap(), ViewSelector::Time);
        assert_eq!(
            "Location".parse::<ViewSelector>().unwrap(),
            ViewSelector::Location
        );
        assert!("map".parse::<ViewSelector>().is_err());
    }

    #[test]
    fn view_selector_serializes_snake_case() {
        let json = serde_json::to_string(&ViewSelector::Location).unwrap();
        assert_eq!(json, "\"location\"");
        assert_eq!(ViewSelector::Time.to_string(), "time");
    }
}
