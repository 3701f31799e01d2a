//! HTTP handler functions for the dashboard API.

use actix_web::{HttpResponse, web};
use chrono::{NaiveDate, NaiveDateTime};
use shelter_dash_analytics::render;
use shelter_dash_intake_models::{ViewSelector, end_of_day, start_of_day};
use shelter_dash_server_models::{ApiBounds, ApiError, ApiHealth, ChartQueryParams};
use shelter_dash_source::IntakeTable;

use crate::AppState;

/// Reasons a chart request is rejected.
#[derive(Debug, thiserror::Error)]
pub enum ParamError {
    /// A date parameter is not `YYYY-MM-DD`.
    #[error("Invalid {field} date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// Which parameter.
        field: &'static str,
        /// The raw value.
        value: String,
    },

    /// The view parameter names no known view.
    #[error("Unknown view '{value}': expected one of type, time, location")]
    InvalidView {
        /// The raw value.
        value: String,
    },
}

/// A chart request with defaults applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ChartRequest {
    range_min: NaiveDateTime,
    range_max: NaiveDateTime,
    view: ViewSelector,
}

impl ChartRequest {
    /// Missing or blank dates fall back to the table's observed bounds; a
    /// missing or blank view falls back to the first selector option.
    fn resolve(params: &ChartQueryParams, table: &IntakeTable) -> Result<Self, ParamError> {
        let full = table.full_range();
        let range_min = match non_blank(params.from.as_deref()) {
            Some(s) => start_of_day(parse_day("from", s)?),
            None => full.start,
        };
        let range_max = match non_blank(params.to.as_deref()) {
            Some(s) => end_of_day(parse_day("to", s)?),
            None => full.end,
        };
        let view = match non_blank(params.view.as_deref()) {
            Some(s) => s.parse().map_err(|_| ParamError::InvalidView {
                value: s.to_string(),
            })?,
            None => ViewSelector::Type,
        };

        Ok(Self {
            range_min,
            range_max,
            view,
        })
    }
}

/// A cleared form field arrives as `key=`; treat it like an absent key.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_day(field: &'static str, s: &str) -> Result<NaiveDate, ParamError> {
    NaiveDate::parse_from_str(s,"%Y-%m-%d").map_err(|_| ParamError::InvalidDate {
        field,
        value: s.to_string(),
    })
}

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/bounds`
///
/// Returns the date picker limits and the view selector options.
pub async fn bounds(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiBounds {
        date_min: state.table.date_min(),
        date_max: state.table.date_max(),
        total_records: state.table.len() as u64,
        views: ViewSelector::all().iter().copied().map(Into::into).collect(),
    })
}

/// `GET /api/chart`
///
/// Filters the table to `[from, to]` and returns the chart for `view`.
pub async fn chart(
    state: web::Data<AppState>,
    params: web::Query<ChartQueryParams>,
) -> HttpResponse {
    match ChartRequest::resolve(&params, &state.table) {
        Ok(req) => HttpResponse::Ok().json(render(
            state.table.records(),
            req.range_min,
            req.range_max,
            req.view,
        )),
        Err(e) => {
            log::error!("Rejected chart request: {e}");
            HttpResponse::BadRequest().json(ApiError {
                error: e.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test};
    use shelter_dash_analytics_models::ChartSpec;
    use shelter_dash_source::read_csv;

    use super::*;
    use crate::configure_api;

    const CSV: &str = "\
Animal ID,DateTime,Animal Type,Found Location,Found Latitude,Found Longitude,Found Zipcode
A1,01/01/2019 09:00:00 AM,Bird,,,,
A2,02/01/2019 10:00:00 AM,Dog,Austin (TX),30.27,-97.74,78701
A3,02/15/2019 04:30:00 PM,Cat,Austin (TX),30.27,-97.74,78701
A4,02/28/2019 11:59:00 PM,Livestock,Manor (TX),30.34,-97.55,
";

    fn state() -> web::Data<AppState> {
        web::Data::new(AppState {
            table: Arc::new(read_csv(CSV.as_bytes()).unwrap()),
        })
    }

    fn table() -> IntakeTable {
        read_csv(CSV.as_bytes()).unwrap()
    }

    #[::core::prelude::v1::test]
    fn resolve_defaults_to_full_range_and_type_view() {
        let table = table();
        let req = ChartRequest::resolve(&ChartQueryParams::default(), &table).unwrap();
        assert_eq!(req.range_min, table.date_min());
        assert_eq!(req.range_max, table.date_max());
        assert_eq!(req.view, ViewSelector::Type);
    }

    #[::core::prelude::v1::test]
    fn resolve_rejects_bad_input() {
        let table = table();
        let bad_date = ChartQueryParams {
            from: Some("02/01/2019".to_string()),
            ..ChartQueryParams::default()
        };
        assert!(matches!(
            ChartRequest::resolve(&bad_date, &table),
            Err(ParamError::InvalidDate { field: "from", .. })
        ));

        let bad_view = ChartQueryParams {
            view: Some("histogram".to_string()),
            ..ChartQueryParams::default()
        };
        assert!(matches!(
            ChartRequest::resolve(&bad_view, &table),
            Err(ParamError::InvalidView { .. })
        ));
    }

    #[::core::prelude::v1::test]
    fn resolve_treats_blank_fields_as_missing() {
        let table = table();
        let blank = ChartQueryParams {
            from: Some(String::new()),
            to: Some("  ".to_string()),
            view: Some(String::new()),
        };
        let req = ChartRequest::resolve(&blank, &table).unwrap();
        assert_eq!(req.range_min, table.date_min());
        assert_eq!(req.range_max, table.date_max());
        assert_eq!(req.view, ViewSelector::Type);
    }

    #[actix_web::test]
    async fn bounds_reports_picker_limits() {
        let app = test::init_service(App::new().app_data(state()).configure(configure_api)).await;
        let req = test::TestRequest::get().uri("/api/bounds").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["dateMin"], "2019-01-01T09:00:00");
        assert_eq!(body["dateMax"], "2019-02-28T23:59:00");
        assert_eq!(body["totalRecords"], 4);
        assert_eq!(body["views"][0]["id"], "type");
        assert_eq!(body["views"][2]["label"], "Found Locations of Animals");
    }

    #[actix_web::test]
    async fn chart_filters_by_whole_days() {
        let app = test::init_service(App::new().app_data(state()).configure(configure_api)).await;
        let req = test::TestRequest::get()
            .uri("/api/chart?from=2019-02-01&to=2019-02-28&view=type")
            .to_request();
        let spec: ChartSpec = test::call_and_read_body_json(&app, req).await;

        let ChartSpec::Pie(pie) = spec else {
            panic!("expected a pie chart");
        };
        // A4 at 23:59 on the last day is still inside the range.
        assert_eq!(pie.total_records, 3);
        let types: Vec<(&str, u64)> = pie
            .slices
            .iter()
            .map(|s| (s.animal_type.as_str(), s.count))
            .collect();
        assert_eq!(types, [("Dog", 1), ("Cat", 1), ("Other", 1)]);
    }

    #[actix_web::test]
    async fn cleared_date_pickers_chart_the_full_range() {
        let app = test::init_service(App::new().app_data(state()).configure(configure_api)).await;
        let req = test::TestRequest::get()
            .uri("/api/chart?from=&to=&view=type")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
        let spec: ChartSpec = test::read_body_json(resp).await;

        let ChartSpec::Pie(pie) = spec else {
            panic!("expected a pie chart");
        };
        assert_eq!(pie.total_records, 4);
        let total: u64 = pie.slices.iter().map(|s| s.count).sum();
        assert_eq!(total, 4);
    }

    #[actix_web::test]
    async fn location_chart_skips_ungeocoded_rows() {
        let app = test::init_service(App::new().app_data(state()).configure(configure_api)).await;
        let req = test::TestRequest::get()
            .uri("/api/chart?view=location")
            .to_request();
        let spec: ChartSpec = test::call_and_read_body_json(&app, req).await;

        let ChartSpec::ScatterGeo(map) = spec else {
            panic!("expected a map");
        };
        assert_eq!(map.points.len(), 1);
        assert_eq!(map.points[0].location, "Austin (TX)");
        assert_eq!(map.points[0].count, 2);
    }

    #[actix_web::test]
    async fn empty_range_is_not_an_error() {
        let app = test::init_service(App::new().app_data(state()).configure(configure_api)).await;
        let req = test::TestRequest::get()
            .uri("/api/chart?from=2019-01-10&to=2019-01-10&view=time")
            .to_request();
        let spec: ChartSpec = test::call_and_read_body_json(&app, req).await;

        let ChartSpec::Line(line) = spec else {
            panic!("expected a line chart");
        };
        assert!(line.series.is_empty());
        assert_eq!(line.total_records, 0);
    }

    #[actix_web::test]
    async fn bad_view_is_rejected() {
        let app = test::init_service(App::new().app_data(state()).configure(configure_api)).await;
        let req = test::TestRequest::get()
            .uri("/api/chart?view=pies")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
