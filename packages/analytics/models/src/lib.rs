#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Intake aggregate row types and chart specifications.
//!
//! Aggregations produce the row types in this crate. A [`ChartSpec`] wraps
//! one aggregate together with the presentation details (titles, labels,
//! palette, map settings) that the external chart renderer needs. Specs are
//! serialized to JSON for the dashboard frontend.

use serde::{Deserialize, Serialize};

/// Plotly's "Pastel" qualitative palette, used for the intake type pie.
pub const PASTEL_PALETTE: &[&str] = &[
    "rgb(102, 197, 204)",
    "rgb(246, 207, 113)",
    "rgb(248, 156, 116)",
    "rgb(220, 176, 242)",
    "rgb(135, 197, 95)",
    "rgb(158, 185, 243)",
    "rgb(254, 136, 177)",
    "rgb(201, 219, 116)",
    "rgb(139, 224, 164)",
    "rgb(180, 151, 231)",
    "rgb(179, 179, 179)",
];

/// Y-axis label for the intakes-over-time chart.
pub const INTAKE_COUNT_LABEL: &str = "Number of Animal Intakes";

/// Initial map zoom for the found locations chart.
pub const LOCATION_MAP_ZOOM: u8 = 10;

/// Base map tile style for the found locations chart.
pub const LOCATION_MAP_STYLE: &str = "open-street-map";

/// Number of intakes for one animal type bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCount {
    /// Animal type, with rare types merged into "Other".
    #[serde(rename = "type")]
    pub animal_type: String,
    /// Number of intakes.
    pub count: u64,
}

/// Number of intakes in one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCount {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Number of intakes.
    pub count: u64,
}

/// Number of intakes found at one geocoded location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationCount {
    /// Found location text.
    pub location: String,
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
    /// Number of intakes.
    pub count: u64,
}

/// A chart ready to hand to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ChartSpec {
    /// Proportion chart of intake types.
    Pie(PieChart),
    /// Monthly counts, one line per year.
    Line(LineChart),
    /// Found locations on a map, sized and colored by count.
    ScatterGeo(ScatterGeoChart),
}

impl ChartSpec {
    /// Heading shown above the chart.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Pie(c) => &c.title,
            Self::Line(c) => &c.title,
            Self::ScatterGeo(c) => &c.title,
        }
    }

    /// Number of filtered records the chart was built from.
    #[must_use]
    pub const fn total_records(&self) -> u64 {
        match self {
            Self::Pie(c) => c.total_records,
            Self::Line(c) => c.total_records,
            Self::ScatterGeo(c) => c.total_records,
        }
    }
}

/// Pie chart of intake types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieChart {
    /// Chart heading.
    pub title: String,
    /// One slice per type bucket, largest first.
    pub slices: Vec<TypeCount>,
    /// Slice colors, cycled in slice order.
    pub palette: Vec<String>,
    /// Number of filtered records.
    pub total_records: u64,
}

/// Line chart of monthly intakes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChart {
    /// Chart heading.
    pub title: String,
    /// X-axis label.
    pub x_label: String,
    /// Y-axis label.
    pub y_label: String,
    /// One series per year, oldest first.
    pub series: Vec<YearSeries>,
    /// Number of filtered records.
    pub total_records: u64,
}

/// The monthly points of a single year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSeries {
    /// Calendar year.
    pub year: i32,
    /// Months with at least one intake, in month order.
    pub points: Vec<MonthPoint>,
}

/// One point on a year's line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthPoint {
    /// Calendar month (1-12).
    pub month: u32,
    /// Number of intakes.
    pub count: u64,
}

/// Geographic scatter of found locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterGeoChart {
    /// Chart heading.
    pub title: String,
    /// One marker per distinct location.
    pub points: Vec<LocationCount>,
    /// Initial map zoom.
    pub zoom: u8,
    /// Base map style.
    pub map_style: String,
    /// Number of filtered records.
    pub total_records: u64,
}
