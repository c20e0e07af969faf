use super::{one_hour_electricity, panel};
use crate::store::{PanelStore, ReadingStore};
use crate::{AnalyticsError, HourlyReading, Panel, Result};
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Schema, SqlErr,
};
use std::sync::Arc;
use tracing::{debug, info};

/// 创建面板表和读数表（已存在时跳过）
pub async fn setup_schema(db: &DatabaseConnection) -> std::result::Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut panels = schema.create_table_from_entity(panel::Entity);
    panels.if_not_exists();
    db.execute(backend.build(&panels)).await?;

    let mut readings = schema.create_table_from_entity(one_hour_electricity::Entity);
    readings.if_not_exists();
    db.execute(backend.build(&readings)).await?;

    info!("Database schema created");
    Ok(())
}

/// 基于 SeaORM 的面板存储
pub struct DbPanelStore {
    db: Arc<DatabaseConnection>,
}

impl DbPanelStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PanelStore for DbPanelStore {
    async fn find_by_serial(&self, serial: &str) -> Result<Option<Panel>> {
        let model = panel::Entity::find_by_id(serial.to_string())
            .one(&*self.db)
            .await?;

        debug!(serial = %serial, found = model.is_some(), "Panel lookup");
        Ok(model.map(Panel::from))
    }

    async fn insert(&self, panel: Panel) -> Result<Panel> {
        let active_model: panel::ActiveModel = panel.clone().into();

        // 主键冲突即序列号已存在
        match panel::Entity::insert(active_model).exec(&*self.db).await {
            Ok(_) => Ok(panel),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(AnalyticsError::PanelAlreadyExists(panel.serial))
                }
                _ => Err(err.into()),
            },
        }
    }
}

/// 基于 SeaORM 的读数存储
pub struct DbReadingStore {
    db: Arc<DatabaseConnection>,
}

impl DbReadingStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReadingStore for DbReadingStore {
    async fn list_for_panel(&self, panel_id: &str) -> Result<Vec<HourlyReading>> {
        let models = one_hour_electricity::Entity::find()
            .filter(one_hour_electricity::Column::PanelId.eq(panel_id))
            .order_by_asc(one_hour_electricity::Column::DateTime)
            .order_by_asc(one_hour_electricity::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(models.into_iter().map(HourlyReading::from).collect())
    }

    async fn find(&self, panel_id: &str, reading_id: i64) -> Result<Option<HourlyReading>> {
        let model = one_hour_electricity::Entity::find_by_id(reading_id)
            .filter(one_hour_electricity::Column::PanelId.eq(panel_id))
            .one(&*self.db)
            .await?;

        Ok(model.map(HourlyReading::from))
    }

    async fn append(&self, panel_id: &str, mut reading: HourlyReading) -> Result<HourlyReading> {
        reading.panel_id = panel_id.to_string();

        let active_model: one_hour_electricity::ActiveModel = reading.clone().into();
        one_hour_electricity::Entity::insert(active_model)
            .exec(&*self.db)
            .await?;

        debug!(panel_id = %panel_id, reading_id = reading.id, "Reading stored");
        Ok(reading)
    }
}
