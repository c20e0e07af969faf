use crate::model::SERIAL_LENGTH;
use crate::store::{PanelStore, ReadingStore};
use crate::{aggregate_by_day, AnalyticsError, DailySummary, HourlyReading, Panel, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// 光伏分析服务
///
/// 统一的分析入口：面板存在性检查、读数查询、按日汇总以及读数写入
pub struct AnalyticsService {
    /// 面板存储
    panels: Arc<dyn PanelStore>,

    /// 读数存储
    readings: Arc<dyn ReadingStore>,
}

impl AnalyticsService {
    /// 创建新的分析服务
    pub fn new(panels: Arc<dyn PanelStore>, readings: Arc<dyn ReadingStore>) -> Self {
        Self { panels, readings }
    }

    /// 面板是否存在
    ///
    /// 面板不存在不是错误，返回 `false` 由调用方决定如何处理。
    pub async fn panel_exists(&self, panel_id: &str) -> Result<bool> {
        Ok(self.panels.find_by_serial(panel_id).await?.is_some())
    }

    /// 获取面板信息
    ///
    /// # 错误
    /// * `PanelNotFound` - 面板不存在
    pub async fn get_panel(&self, panel_id: &str) -> Result<Panel> {
        self.panels
            .find_by_serial(panel_id)
            .await?
            .ok_or_else(|| AnalyticsError::PanelNotFound(panel_id.to_string()))
    }

    /// 登记面板
    ///
    /// # 错误
    /// * `ValidationError` - 面板信息验证失败
    /// * `PanelAlreadyExists` - 序列号已存在
    pub async fn register_panel(&self, panel: Panel) -> Result<Panel> {
        self.validate_panel(&panel)?;

        let panel = self.panels.insert(panel).await?;
        info!(serial = %panel.serial, brand = %panel.brand, "Panel registered");

        Ok(panel)
    }

    /// 查询面板的全部小时读数
    ///
    /// # 错误
    /// * `PanelNotFound` - 面板不存在，此时不会查询读数
    pub async fn list_readings(&self, panel_id: &str) -> Result<Vec<HourlyReading>> {
        self.ensure_panel(panel_id).await?;

        let readings = self.readings.list_for_panel(panel_id).await?;
        debug!(panel_id = %panel_id, count = readings.len(), "Readings loaded");

        Ok(readings)
    }

    /// 按日汇总面板读数
    ///
    /// # 错误
    /// * `PanelNotFound` - 面板不存在
    pub async fn daily_summaries(&self, panel_id: &str) -> Result<Vec<DailySummary>> {
        let readings = self.list_readings(panel_id).await?;
        Ok(aggregate_by_day(&readings))
    }

    /// 获取面板的一条读数
    ///
    /// 与写入一致，不要求面板已登记。
    ///
    /// # 错误
    /// * `ReadingNotFound` - 该面板下不存在此读数
    pub async fn get_reading(&self, panel_id: &str, reading_id: i64) -> Result<HourlyReading> {
        self.readings
            .find(panel_id, reading_id)
            .await?
            .ok_or_else(|| {
                AnalyticsError::ReadingNotFound(format!("{}/{}", panel_id, reading_id))
            })
    }

    /// 写入一条小时读数
    ///
    /// 不检查面板是否存在，读数 ID 由调用方提供。
    pub async fn record_reading(
        &self,
        panel_id: &str,
        reading: HourlyReading,
    ) -> Result<HourlyReading> {
        let reading = self.readings.append(panel_id, reading).await?;

        info!(
            panel_id = %panel_id,
            reading_id = reading.id,
            kilo_watt = reading.kilo_watt,
            "Reading recorded"
        );

        Ok(reading)
    }

    async fn ensure_panel(&self, panel_id: &str) -> Result<()> {
        if self.panel_exists(panel_id).await? {
            Ok(())
        } else {
            Err(AnalyticsError::PanelNotFound(panel_id.to_string()))
        }
    }

    /// 验证面板信息
    fn validate_panel(&self, panel: &Panel) -> Result<()> {
        if panel.serial.chars().count() != SERIAL_LENGTH {
            return Err(AnalyticsError::validation(format!(
                "serial must be exactly {} characters",
                SERIAL_LENGTH
            )));
        }

        if panel.brand.trim().is_empty() {
            return Err(AnalyticsError::validation("brand cannot be empty"));
        }

        if !(-90.0..=90.0).contains(&panel.latitude) {
            return Err(AnalyticsError::validation(format!(
                "latitude out of range: {}",
                panel.latitude
            )));
        }

        if !(-180.0..=180.0).contains(&panel.longitude) {
            return Err(AnalyticsError::validation(format!(
                "longitude out of range: {}",
                panel.longitude
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryPanelStore, MemoryReadingStore};
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// 记录查询次数的读数存储
    #[derive(Default)]
    struct CountingReadingStore {
        inner: MemoryReadingStore,
        lists: AtomicUsize,
    }

    #[async_trait]
    impl ReadingStore for CountingReadingStore {
        async fn list_for_panel(&self, panel_id: &str) -> Result<Vec<HourlyReading>> {
            self.lists.fetch_add(1, Ordering::SeqCst);
            self.inner.list_for_panel(panel_id).await
        }

        async fn find(&self, panel_id: &str, reading_id: i64) -> Result<Option<HourlyReading>> {
            self.inner.find(panel_id, reading_id).await
        }

        async fn append(&self, panel_id: &str, reading: HourlyReading) -> Result<HourlyReading> {
            self.inner.append(panel_id, reading).await
        }
    }

    fn tiktak() -> Panel {
        Panel::new("SSSS22225555TTTT", "TikTak", 22.345678, 58.7655432)
    }

    fn create_test_service() -> AnalyticsService {
        let now = Utc::now();
        let panels = MemoryPanelStore::with_panels(vec![tiktak()]);
        let readings = MemoryReadingStore::with_readings(vec![
            HourlyReading::new(1, "SSSS22225555TTTT", 240.0).with_timestamp(now),
            HourlyReading::new(2, "SSSS22225555TTTT", 2400.0)
                .with_timestamp(now + Duration::days(1)),
        ]);
        AnalyticsService::new(Arc::new(panels), Arc::new(readings))
    }

    #[tokio::test]
    async fn test_panel_exists() {
        let service = create_test_service();
        assert!(service.panel_exists("SSSS22225555TTTT").await.unwrap());
        assert!(!service.panel_exists("ASAS3434DFDF1234").await.unwrap());
    }

    #[tokio::test]
    async fn test_list_readings() {
        let service = create_test_service();
        let readings = service.list_readings("SSSS22225555TTTT").await.unwrap();
        assert_eq!(readings.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_panel_skips_fetch() {
        let readings = Arc::new(CountingReadingStore::default());
        let service = AnalyticsService::new(Arc::new(MemoryPanelStore::new()), readings.clone());

        let result = service.list_readings("ASAS3434DFDF1234").await;
        assert!(matches!(result.unwrap_err(), AnalyticsError::PanelNotFound(_)));

        let result = service.daily_summaries("ASAS3434DFDF1234").await;
        assert!(matches!(result.unwrap_err(), AnalyticsError::PanelNotFound(_)));

        assert_eq!(readings.lists.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_daily_summaries() {
        let service = create_test_service();
        let summaries = service.daily_summaries("SSSS22225555TTTT").await.unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].average, 10.0);
        assert_eq!(summaries[0].minimum, 240.0);
        assert_eq!(summaries[0].maximum, 240.0);
        assert_eq!(summaries[0].sum, 240.0);
    }

    #[tokio::test]
    async fn test_record_reading_for_unknown_panel() {
        let service = create_test_service();

        let reading = HourlyReading::new(1, "", 1240.0);
        let stored = service.record_reading("SSSS22225555TTYY", reading).await.unwrap();
        assert_eq!(stored.id, 1);
        assert_eq!(stored.panel_id, "SSSS22225555TTYY");

        // 写入不登记面板
        assert!(!service.panel_exists("SSSS22225555TTYY").await.unwrap());

        let found = service.get_reading("SSSS22225555TTYY", 1).await.unwrap();
        assert_eq!(found.kilo_watt, 1240.0);

        let missing = service.get_reading("SSSS22225555TTYY", 2).await;
        assert!(matches!(missing.unwrap_err(), AnalyticsError::ReadingNotFound(_)));
    }

    #[tokio::test]
    async fn test_register_panel_validation() {
        let service = create_test_service();

        let short = Panel::new("SHORT", "TikTak", 0.0, 0.0);
        assert!(matches!(
            service.register_panel(short).await.unwrap_err(),
            AnalyticsError::ValidationError(_)
        ));

        let bad_lat = Panel::new("AAAA11112222BBBB", "TikTak", 91.0, 0.0);
        assert!(matches!(
            service.register_panel(bad_lat).await.unwrap_err(),
            AnalyticsError::ValidationError(_)
        ));

        let bad_lon = Panel::new("AAAA11112222BBBB", "TikTak", 0.0, -180.5);
        assert!(matches!(
            service.register_panel(bad_lon).await.unwrap_err(),
            AnalyticsError::ValidationError(_)
        ));

        let no_brand = Panel::new("AAAA11112222BBBB", " ", 0.0, 0.0);
        assert!(matches!(
            service.register_panel(no_brand).await.unwrap_err(),
            AnalyticsError::ValidationError(_)
        ));
    }

    #[tokio::test]
    async fn test_register_and_get_panel() {
        let service = create_test_service();

        let panel = Panel::new("AAAA11112222BBBB", "Sunny", -33.8688, 151.2093);
        service.register_panel(panel.clone()).await.unwrap();
        assert_eq!(service.get_panel("AAAA11112222BBBB").await.unwrap(), panel);

        let duplicate = service.register_panel(tiktak()).await;
        assert!(matches!(duplicate.unwrap_err(), AnalyticsError::PanelAlreadyExists(_)));

        let missing = service.get_panel("ASAS3434DFDF1234").await;
        assert!(missing.unwrap_err().is_not_found());
    }
}
