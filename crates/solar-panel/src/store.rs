use crate::{AnalyticsError, HourlyReading, Panel, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// 面板存储 trait
#[async_trait]
pub trait PanelStore: Send + Sync {
    /// 按序列号查找面板，不存在时返回 None
    async fn find_by_serial(&self, serial: &str) -> Result<Option<Panel>>;

    /// 新增面板
    async fn insert(&self, panel: Panel) -> Result<Panel>;
}

/// 发电读数存储 trait
#[async_trait]
pub trait ReadingStore: Send + Sync {
    /// 查询面板的全部读数
    async fn list_for_panel(&self, panel_id: &str) -> Result<Vec<HourlyReading>>;

    /// 按 ID 查找面板的一条读数
    async fn find(&self, panel_id: &str, reading_id: i64) -> Result<Option<HourlyReading>>;

    /// 追加一条读数
    async fn append(&self, panel_id: &str, reading: HourlyReading) -> Result<HourlyReading>;
}

/// 内存面板存储
#[derive(Default)]
pub struct MemoryPanelStore {
    panels: RwLock<HashMap<String, Panel>>,
}

impl MemoryPanelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用已有面板初始化
    pub fn with_panels(panels: impl IntoIterator<Item = Panel>) -> Self {
        let panels = panels
            .into_iter()
            .map(|p| (p.serial.clone(), p))
            .collect();
        Self {
            panels: RwLock::new(panels),
        }
    }
}

#[async_trait]
impl PanelStore for MemoryPanelStore {
    async fn find_by_serial(&self, serial: &str) -> Result<Option<Panel>> {
        let panels = self.panels.read().await;
        Ok(panels.get(serial).cloned())
    }

    async fn insert(&self, panel: Panel) -> Result<Panel> {
        let mut panels = self.panels.write().await;
        if panels.contains_key(&panel.serial) {
            return Err(AnalyticsError::PanelAlreadyExists(panel.serial));
        }
        panels.insert(panel.serial.clone(), panel.clone());
        Ok(panel)
    }
}

/// 内存读数存储
///
/// 按面板保存读数，保持插入顺序。
#[derive(Default)]
pub struct MemoryReadingStore {
    readings: RwLock<HashMap<String, Vec<HourlyReading>>>,
}

impl MemoryReadingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用已有读数初始化
    pub fn with_readings(readings: impl IntoIterator<Item = HourlyReading>) -> Self {
        let mut by_panel: HashMap<String, Vec<HourlyReading>> = HashMap::new();
        for reading in readings {
            by_panel
                .entry(reading.panel_id.clone())
                .or_default()
                .push(reading);
        }
        Self {
            readings: RwLock::new(by_panel),
        }
    }
}

#[async_trait]
impl ReadingStore for MemoryReadingStore {
    async fn list_for_panel(&self, panel_id: &str) -> Result<Vec<HourlyReading>> {
        let readings = self.readings.read().await;
        Ok(readings.get(panel_id).cloned().unwrap_or_default())
    }

    async fn find(&self, panel_id: &str, reading_id: i64) -> Result<Option<HourlyReading>> {
        let readings = self.readings.read().await;
        Ok(readings
            .get(panel_id)
            .and_then(|list| list.iter().rev().find(|r| r.id == reading_id))
            .cloned())
    }

    async fn append(&self, panel_id: &str, mut reading: HourlyReading) -> Result<HourlyReading> {
        reading.panel_id = panel_id.to_string();

        let mut readings = self.readings.write().await;
        let panel_readings = readings.entry(panel_id.to_string()).or_default();
        panel_readings.push(reading.clone());

        debug!(panel_id = %panel_id, count = panel_readings.len(), "Reading appended");
        Ok(reading)
    }
}
