use crate::config::{StorageBackend, StorageConfig};
use sea_orm::Database;
use solar_panel::{
    setup_schema, AnalyticsService, DbPanelStore, DbReadingStore, MemoryPanelStore,
    MemoryReadingStore,
};
use std::sync::Arc;
use tracing::info;

/// API 应用状态
#[derive(Clone)]
pub struct AppState {
    /// 分析服务
    pub analytics: Arc<AnalyticsService>,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(analytics: Arc<AnalyticsService>) -> Self {
        Self { analytics }
    }

    /// 按存储配置创建应用状态
    pub async fn from_config(storage: &StorageConfig) -> anyhow::Result<Self> {
        let analytics = match storage.backend {
            StorageBackend::Memory => {
                info!("Using in-memory storage");
                AnalyticsService::new(
                    Arc::new(MemoryPanelStore::new()),
                    Arc::new(MemoryReadingStore::new()),
                )
            }
            StorageBackend::Database => {
                let db = Database::connect(storage.url.as_str()).await?;
                setup_schema(&db).await?;
                info!(url = %storage.url, "Connected to database");

                let db = Arc::new(db);
                AnalyticsService::new(
                    Arc::new(DbPanelStore::new(db.clone())),
                    Arc::new(DbReadingStore::new(db)),
                )
            }
        };

        Ok(Self::new(Arc::new(analytics)))
    }
}
