use crate::{error::Result, models::*, state::AppState};
use axum::{
    extract::{Path, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use tracing::{debug, info};

/// 列出面板的小时读数
pub async fn list_readings(
    State(state): State<AppState>,
    Path(panel_id): Path<String>,
) -> Result<Json<ReadingListResponse>> {
    debug!(panel_id = %panel_id, "Listing panel readings");

    let readings = state.analytics.list_readings(&panel_id).await?;

    let readings: Vec<ReadingResponse> = readings.into_iter().map(ReadingResponse::from).collect();

    Ok(Json(ReadingListResponse { readings }))
}

/// 获取面板的按日汇总
pub async fn daily_summaries(
    State(state): State<AppState>,
    Path(panel_id): Path<String>,
) -> Result<Json<Vec<DailySummaryResponse>>> {
    debug!(panel_id = %panel_id, "Getting daily summaries");

    let summaries = state.analytics.daily_summaries(&panel_id).await?;

    let response: Vec<DailySummaryResponse> =
        summaries.into_iter().map(DailySummaryResponse::from).collect();

    Ok(Json(response))
}

/// 获取单条读数
pub async fn get_reading(
    State(state): State<AppState>,
    Path((panel_id, reading_id)): Path<(String, i64)>,
) -> Result<Json<ReadingResponse>> {
    debug!(panel_id = %panel_id, reading_id = reading_id, "Getting panel reading");

    let reading = state.analytics.get_reading(&panel_id, reading_id).await?;

    Ok(Json(ReadingResponse::from(reading)))
}

/// 写入小时读数
pub async fn record_reading(
    State(state): State<AppState>,
    Path(panel_id): Path<String>,
    Json(req): Json<RecordReadingRequest>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<ReadingResponse>)> {
    info!(panel_id = %panel_id, reading_id = req.id, "Recording panel reading");

    let reading = state
        .analytics
        .record_reading(&panel_id, req.into_reading(&panel_id))
        .await?;

    let location = format!("/api/v1/panels/{}/analytics/{}", panel_id, reading.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ReadingResponse::from(reading)),
    ))
}
