//! HTTP handlers for the climate API.
//!
//! Each handler maps one route to a repository query and, for the two
//! temperature-summary routes, an aggregation step. Response shapes follow
//! the dataset's original API exactly, including the mapping shape's
//! last-write-wins behavior for duplicate dates and the asymmetric
//! empty-input handling between the start-date and date-range summaries.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use serde_json::{Map, Value};

use super::dto::{HealthResponse, PrecipitationRow, StationRow, TemperatureRow};
use super::error::AppError;
use super::state::AppState;
use crate::services::summary::{summarize, TobsSummary};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Station with the most observations in the dataset. Fixed as a constant;
/// it is not recomputed at request time.
pub const MOST_ACTIVE_STATION: &str = "USC00519281";

/// GET /
///
/// Route index, as HTML-ish plaintext.
pub async fn index() -> Html<&'static str> {
    Html(
        "This is an API for Hawaii climate data<br/>\
         - Specify desired date in paths marked '/*', in format yyyy-mm-dd<br/>\
         - Specify /start_date/end_date in paths marked '/*/*'<br/>\
         - Do not include * in url<br/><br/>\
         Available routes:<br/>\
         /api/v1.0/precipitation<br/>\
         /api/v1.0/prcp_by_date/*<query_date><br/>\
         /api/v1.0/stations<br/>\
         /api/v1.0/tobs_mostactivestation<br/>\
         /api/v1.0/tobs_start_date/*<start_date><br/>\
         /api/v1.0/tobs_date_range/*<start_date>/*<end_date>",
    )
}

/// GET /health
///
/// Health check endpoint to verify the service is running and the dataset
/// is readable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let database = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1.0".to_string(),
        database,
    }))
}

/// GET /api/v1.0/precipitation
///
/// All precipitation readings as a date -> prcp mapping. Rows are traversed
/// in ascending date order and inserted by date, so when a date has multiple
/// readings only the last-traversed value survives.
pub async fn precipitation(
    State(state): State<AppState>,
) -> HandlerResult<BTreeMap<String, Option<f64>>> {
    let rows = state.repository.all_precipitation().await?;

    let mut mapping = BTreeMap::new();
    for row in rows {
        mapping.insert(row.date, row.prcp);
    }

    Ok(Json(mapping))
}

/// GET /api/v1.0/prcp_by_date/{query_date}
///
/// Precipitation rows for one exact date, keyed by the queried date. An
/// unknown or malformed date yields an empty list, not an error.
pub async fn prcp_by_date(
    State(state): State<AppState>,
    Path(query_date): Path<String>,
) -> HandlerResult<Value> {
    let rows: Vec<PrecipitationRow> = state.repository.precipitation_on(&query_date).await?;

    let mut body = Map::new();
    body.insert(query_date, to_json(&rows)?);

    Ok(Json(Value::Object(body)))
}

/// GET /api/v1.0/stations
///
/// All weather stations as (station, name) objects.
pub async fn stations(State(state): State<AppState>) -> HandlerResult<Vec<StationRow>> {
    Ok(Json(state.repository.list_stations().await?))
}

/// GET /api/v1.0/tobs_mostactivestation
///
/// Temperature observations recorded at [`MOST_ACTIVE_STATION`].
pub async fn tobs_most_active_station(
    State(state): State<AppState>,
) -> HandlerResult<Vec<TemperatureRow>> {
    let rows = state
        .repository
        .temperatures_for_station(MOST_ACTIVE_STATION)
        .await?;
    Ok(Json(rows))
}

/// GET /api/v1.0/tobs_start_date/{start_date}
///
/// TMIN/TMAX/TAVG over all observations from `start_date` onward.
///
/// Deliberately does not guard against an empty result: a start date past
/// the dataset makes the aggregation fail and the route answer 500. The
/// date-range route below guards instead; the asymmetry is part of the
/// observable contract.
pub async fn tobs_start_date(
    State(state): State<AppState>,
    Path(start_date): Path<String>,
) -> HandlerResult<Value> {
    let temps = state.repository.temperatures_since(&start_date).await?;
    let summary = summarize(&temps)?;

    summary_body(format!("summary_since_{}", start_date), summary).map(Json)
}

/// GET /api/v1.0/tobs_date_range/{start_date}/{end_date}
///
/// TMIN/TMAX/TAVG over all observations between the two dates, inclusive.
/// Answers 404 with a structured error body when no rows match.
pub async fn tobs_date_range(
    State(state): State<AppState>,
    Path((start_date, end_date)): Path<(String, String)>,
) -> HandlerResult<Value> {
    let temps = state
        .repository
        .temperatures_between(&start_date, &end_date)
        .await?;

    if temps.is_empty() {
        return Err(AppError::NoData(
            "No data found for the given date range.".to_string(),
        ));
    }

    let summary = summarize(&temps)?;

    summary_body(
        format!("summary_from_{}_to_{}", start_date, end_date),
        summary,
    )
    .map(Json)
}

/// Wrap a summary in the single-key object the aggregate routes return.
fn summary_body(label: String, summary: TobsSummary) -> Result<Value, AppError> {
    let mut body = Map::new();
    body.insert(label, to_json(&summary)?);
    Ok(Value::Object(body))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, AppError> {
    serde_json::to_value(value).map_err(|e| AppError::Internal(e.to_string()))
}
