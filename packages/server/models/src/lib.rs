#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the shelter dashboard server.
//!
//! Chart responses reuse `ChartSpec` from the analytics models directly;
//! the types here cover the query parameters and the picker metadata.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use shelter_dash_intake_models::ViewSelector;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// One option of the view selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiViewOption {
    /// Value to pass as `view` to the chart endpoint.
    pub id: ViewSelector,
    /// Human-readable label.
    pub label: String,
}

impl From<ViewSelector> for ApiViewOption {
    fn from(view: ViewSelector) -> Self {
        Self {
            id: view,
            label: view.label().to_string(),
        }
    }
}

/// Bounds for the date picker and the available views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiBounds {
    /// Earliest intake timestamp in the table.
    pub date_min: NaiveDateTime,
    /// Latest intake timestamp in the table.
    pub date_max: NaiveDateTime,
    /// Number of records in the full table.
    pub total_records: u64,
    /// View selector options, in display order.
    pub views: Vec<ApiViewOption>,
}

/// Query parameters for the chart endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartQueryParams {
    /// First day of the range (`YYYY-MM-DD`). Defaults to the earliest intake.
    pub from: Option<String>,
    /// Last day of the range (`YYYY-MM-DD`), inclusive. Defaults to the
    /// latest intake.
    pub to: Option<String>,
    /// Which view to render (`type`, `time` or `location`).
    pub view: Option<String>,
}

/// Error body for rejected requests.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// What was wrong with the request.
    pub error: String,
}
