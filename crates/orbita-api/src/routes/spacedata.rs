use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use orbita_spacedata::{ApodSummary, AsteroidReport, PeopleInSpaceReport};

use crate::{error::ApiResult, state::AppState};

const DEFAULT_EVENT_WINDOW_DAYS: u32 = 7;

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DaysQuery {
    pub days: Option<u32>,
}

/// Asteroids approaching earth on a single date (default: today, UTC)
pub async fn asteroids_monitor(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DateQuery>,
) -> ApiResult<Json<AsteroidReport>> {
    let date = query
        .date
        .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string());

    let report = state.spacedata.asteroid_feed(&date).await?;
    Ok(Json(report))
}

/// Astronomy picture of the day (date optional)
pub async fn apod_gallery(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DateQuery>,
) -> ApiResult<Json<ApodSummary>> {
    let summary = state.spacedata.apod(query.date.as_deref()).await?;
    Ok(Json(summary))
}

/// Natural events still open, observed over the last N days (default 7)
pub async fn earth_events(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DaysQuery>,
) -> ApiResult<Response> {
    let days = query.days.unwrap_or(DEFAULT_EVENT_WINDOW_DAYS);
    let report = state.spacedata.earth_events(days).await?;

    if report.eventos.is_empty() {
        let body = Json(json!({
            "message": format!(
                "Nenhum evento natural registrado nos últimos {} dias.",
                days
            )
        }));
        return Ok(body.into_response());
    }

    Ok(Json(report).into_response())
}

/// Who is in space right now
///
/// This endpoint never fails: any upstream problem degrades to the fixed
/// fallback payload, still behind HTTP 200. The infallible signature is the
/// contract.
pub async fn people_in_space(State(state): State<Arc<AppState>>) -> Json<PeopleInSpaceReport> {
    match state.spacedata.people_in_space().await {
        Ok(report) => Json(report),
        Err(e) => {
            tracing::warn!("People-in-space upstreams unavailable, serving fallback: {}", e);
            Json(PeopleInSpaceReport::fallback())
        }
    }
}
