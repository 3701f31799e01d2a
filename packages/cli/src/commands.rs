//! Non-interactive subcommand bodies.

use chrono::NaiveDate;
use shelter_dash_analytics::render;
use shelter_dash_intake_models::{ViewSelector, end_of_day, start_of_day};
use shelter_dash_source::IntakeTable;

/// Formats the table's observed range and size for the terminal.
#[must_use]
pub fn describe_bounds(table: &IntakeTable) -> String {
    format!(
        "Records:  {}\nEarliest: {}\nLatest:   {}",
        table.len(),
        table.date_min(),
        table.date_max()
    )
}

/// Renders `view` over the whole days `from` through `to` and serializes
/// the chart spec. Missing days fall back to the table's bounds.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if the spec cannot be serialized.
pub fn chart_json(
    table: &IntakeTable,
    view: ViewSelector,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    pretty: bool,
) -> Result<String, serde_json::Error> {
    let full = table.full_range();
    let range_min = from.map_or(full.start, start_of_day);
    let range_max = to.map_or(full.end, end_of_day);

    let spec = render(table.records(), range_min, range_max, view);
    log::info!("{}: {} records in range", spec.title(), spec.total_records());

    if pretty {
        serde_json::to_string_pretty(&spec)
    } else {
        serde_json::to_string(&spec)
    }
}

#[cfg(test)]
mod tests {
    use shelter_dash_source::read_csv;

    use super::*;

    const CSV: &str = "\
Animal ID,DateTime,Animal Type,Found Location,Found Latitude,Found Longitude,Found Zipcode
A1,2019-01-01T00:00:00,Bird,,,,
A2,2019-02-01T00:00:00,Dog,,,,
A3,2019-02-15T00:00:00,Cat,,,,
";

    fn table() -> IntakeTable {
        read_csv(CSV.as_bytes()).unwrap()
    }

    #[test]
    fn describes_bounds() {
        let text = describe_bounds(&table());
        assert!(text.contains("Records:  3"));
        assert!(text.contains("2019-01-01 00:00:00"));
        assert!(text.contains("2019-02-15 00:00:00"));
    }

    #[test]
    fn chart_json_over_full_range() {
        let json = chart_json(&table(), ViewSelector::Type, None, None, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["kind"], "pie");
        assert_eq!(
            value["slices"],
            serde_json::json!([
                { "type": "Other", "count": 1 },
                { "type": "Dog", "count": 1 },
                { "type": "Cat", "count": 1 },
            ])
        );
    }

    #[test]
    fn chart_json_over_february() {
        let json = chart_json(
            &table(),
            ViewSelector::Type,
            NaiveDate::from_ymd_opt(2019, 2, 1),
            NaiveDate::from_ymd_opt(2019, 2, 28),
            true,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["totalRecords"], 2);
        assert_eq!(value["slices"][0]["type"], "Dog");
        assert_eq!(value["slices"][1]["type"], "Cat");
    }
}
