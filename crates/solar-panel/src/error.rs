use thiserror::Error;

/// 光伏分析错误类型
#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// 面板未找到
    #[error("Panel not found: {0}")]
    PanelNotFound(String),

    /// 读数未找到
    #[error("Reading not found: {0}")]
    ReadingNotFound(String),

    /// 面板已存在
    #[error("Panel already exists: {0}")]
    PanelAlreadyExists(String),

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 数据库错误
    #[error("Database error: {0}")]
    DatabaseError(#[from] sea_orm::DbErr),

    /// 其他错误
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// 光伏分析结果类型
pub type Result<T> = std::result::Result<T, AnalyticsError>;

impl AnalyticsError {
    /// 创建验证错误
    pub fn validation(msg: impl Into<String>) -> Self {
        AnalyticsError::ValidationError(msg.into())
    }

    /// 是否为"未找到"类错误
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AnalyticsError::PanelNotFound(_) | AnalyticsError::ReadingNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AnalyticsError::PanelNotFound("ASAS3434DFDF1234".to_string());
        assert_eq!(err.to_string(), "Panel not found: ASAS3434DFDF1234");
        assert!(err.is_not_found());

        let err = AnalyticsError::validation("serial must be 16 characters");
        assert_eq!(err.to_string(), "Validation error: serial must be 16 characters");
        assert!(!err.is_not_found());
    }
}
