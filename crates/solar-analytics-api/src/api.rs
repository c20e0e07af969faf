use crate::{handlers, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::TraceLayer,
};

/// 创建 API 路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // 健康检查
        .route("/health", get(health_check))

        // 面板 API
        .route("/api/v1/panels", post(handlers::register_panel))
        .route("/api/v1/panels/:panel_id", get(handlers::get_panel))

        // 发电分析 API
        .route(
            "/api/v1/panels/:panel_id/analytics",
            get(handlers::list_readings).post(handlers::record_reading),
        )
        .route("/api/v1/panels/:panel_id/analytics/day", get(handlers::daily_summaries))
        .route(
            "/api/v1/panels/:panel_id/analytics/:reading_id",
            get(handlers::get_reading),
        )

        // 添加中间件
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 健康检查
async fn health_check() -> &'static str {
    "OK"
}
