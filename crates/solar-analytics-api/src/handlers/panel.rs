use crate::{error::Result, models::*, state::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

/// 登记面板
pub async fn register_panel(
    State(state): State<AppState>,
    Json(req): Json<RegisterPanelRequest>,
) -> Result<(StatusCode, Json<PanelResponse>)> {
    info!(serial = %req.serial, brand = %req.brand, "Registering panel");

    let panel = state.analytics.register_panel(req.into()).await?;

    Ok((StatusCode::CREATED, Json(PanelResponse::from(panel))))
}

/// 获取面板
pub async fn get_panel(
    State(state): State<AppState>,
    Path(panel_id): Path<String>,
) -> Result<Json<PanelResponse>> {
    debug!(panel_id = %panel_id, "Getting panel");

    let panel = state.analytics.get_panel(&panel_id).await?;

    Ok(Json(PanelResponse::from(panel)))
}
