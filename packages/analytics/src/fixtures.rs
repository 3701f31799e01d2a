//! Intake records shared by the analytics unit tests.

use chrono::{NaiveDate, NaiveDateTime};
use shelter_dash_intake_models::IntakeRecord;

pub fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn record(id: &str, animal_type: &str, timestamp: NaiveDateTime) -> IntakeRecord {
    IntakeRecord {
        id: id.to_string(),
        timestamp,
        animal_type: animal_type.to_string(),
        found_location: None,
        found_latitude: None,
        found_longitude: None,
        found_zipcode: None,
    }
}

pub fn located(
    id: &str,
    timestamp: NaiveDateTime,
    location: &str,
    latitude: f64,
    longitude: f64,
) -> IntakeRecord {
    IntakeRecord {
        found_location: Some(location.to_string()),
        found_latitude: Some(latitude),
        found_longitude: Some(longitude),
        found_zipcode: Some("78701".to_string()),
        ..record(id, "Dog", timestamp)
    }
}

/// A mixed table spanning two years, with and without coordinates.
pub fn sample() -> Vec<IntakeRecord> {
    vec![
        record("A1", "Bird", at(2019, 1, 1)),
        record("A2", "Dog", at(2019, 2, 1)),
        record("A3", "Cat", at(2019, 2, 15)),
        located("A4", at(2019, 6, 3), "Austin (TX)", 30.27, -97.74),
        located("A5", at(2019, 6, 20), "Austin (TX)", 30.27, -97.74),
        record("A6", "Livestock", at(2020, 1, 9)),
        located("A7", at(2020, 2, 2), "Manor (TX)", 30.34, -97.55),
        record("A8", "Other", at(2020, 2, 28)),
    ]
}
