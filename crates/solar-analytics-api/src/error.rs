use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// API 错误类型
#[derive(Debug)]
pub enum ApiError {
    /// 面板未找到
    PanelNotFound(String),
    /// 读数未找到
    ReadingNotFound(String),
    /// 面板已存在
    PanelAlreadyExists(String),
    /// 验证错误
    ValidationError(String),
    /// 数据库错误
    DatabaseError(String),
    /// 内部错误
    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::PanelNotFound(id) => write!(f, "Panel not found: {}", id),
            ApiError::ReadingNotFound(id) => write!(f, "Reading not found: {}", id),
            ApiError::PanelAlreadyExists(id) => write!(f, "Panel already exists: {}", id),
            ApiError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ApiError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// 对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::PanelNotFound(_) | ApiError::ReadingNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PanelAlreadyExists(_) => StatusCode::CONFLICT,
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::DatabaseError(_) | ApiError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match self {
            ApiError::PanelNotFound(msg)
            | ApiError::ReadingNotFound(msg)
            | ApiError::PanelAlreadyExists(msg)
            | ApiError::ValidationError(msg)
            | ApiError::DatabaseError(msg)
            | ApiError::InternalError(msg) => msg,
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

// 从 solar_panel::AnalyticsError 转换
impl From<solar_panel::AnalyticsError> for ApiError {
    fn from(err: solar_panel::AnalyticsError) -> Self {
        use solar_panel::AnalyticsError;

        match err {
            AnalyticsError::PanelNotFound(id) => ApiError::PanelNotFound(id),
            AnalyticsError::ReadingNotFound(id) => ApiError::ReadingNotFound(id),
            AnalyticsError::PanelAlreadyExists(id) => ApiError::PanelAlreadyExists(id),
            AnalyticsError::ValidationError(msg) => ApiError::ValidationError(msg),
            AnalyticsError::DatabaseError(err) => ApiError::DatabaseError(err.to_string()),
            AnalyticsError::Other(err) => ApiError::InternalError(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
