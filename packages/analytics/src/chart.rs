//! Wraps aggregates into [`ChartSpec`]s for the renderer.

use shelter_dash_analytics_models::{
    ChartSpec, INTAKE_COUNT_LABEL, LOCATION_MAP_STYLE, LOCATION_MAP_ZOOM, LineChart,
    LocationCount, MonthPoint, MonthlyCount, PASTEL_PALETTE, PieChart, ScatterGeoChart,
    TypeCount, YearSeries,
};
use shelter_dash_intake_models::ViewSelector;

/// Builds the intake type pie.
#[must_use]
pub fn pie_chart(slices: Vec<TypeCount>, total_records: u64) -> ChartSpec {
    ChartSpec::Pie(PieChart {
        title: ViewSelector::Type.label().to_string(),
        slices,
        palette: PASTEL_PALETTE.iter().map(ToString::to_string).collect(),
        total_records,
    })
}

/// Builds the monthly line chart, splitting `months` into one series per
/// year. `months` must be ordered by (year, month).
#[must_use]
pub fn line_chart(months: &[MonthlyCount], total_records: u64) -> ChartSpec {
    let mut series: Vec<YearSeries> = Vec::new();

    for m in months {
        let point = MonthPoint {
            month: m.month,
            count: m.count,
        };
        match series.last_mut() {
            Some(last) if last.year == m.year => last.points.push(point),
            _ => series.push(YearSeries {
                year: m.year,
                points: vec![point],
            }),
        }
    }

    ChartSpec::Line(LineChart {
        title: ViewSelector::Time.label().to_string(),
        x_label: "Month".to_string(),
        y_label: INTAKE_COUNT_LABEL.to_string(),
        series,
        total_records,
    })
}

/// Builds the found locations map.
#[must_use]
pub fn scatter_geo_chart(points: Vec<LocationCount>, total_records: u64) -> ChartSpec {
    ChartSpec::ScatterGeo(ScatterGeoChart {
        title: ViewSelector::Location.label().to_string(),
        points,
        zoom: LOCATION_MAP_ZOOM,
        map_style: LOCATION_MAP_STYLE.to_string(),
        total_records,
    })
}
