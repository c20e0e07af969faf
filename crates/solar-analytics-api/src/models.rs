use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use solar_panel::{DailySummary, HourlyReading, Panel};

/// 面板登记请求
#[derive(Debug, Deserialize)]
pub struct RegisterPanelRequest {
    pub serial: String,
    pub brand: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<RegisterPanelRequest> for Panel {
    fn from(req: RegisterPanelRequest) -> Self {
        Panel::new(req.serial, req.brand, req.latitude, req.longitude)
    }
}

/// 面板响应
#[derive(Debug, Serialize)]
pub struct PanelResponse {
    pub serial: String,
    pub brand: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Panel> for PanelResponse {
    fn from(panel: Panel) -> Self {
        Self {
            serial: panel.serial,
            brand: panel.brand,
            latitude: panel.latitude,
            longitude: panel.longitude,
        }
    }
}

/// 读数写入请求
#[derive(Debug, Deserialize)]
pub struct RecordReadingRequest {
    pub id: i64,
    pub kilo_watt: f64,
    pub timestamp: DateTime<Utc>,
}

impl RecordReadingRequest {
    /// 转换为指定面板的读数
    pub fn into_reading(self, panel_id: &str) -> HourlyReading {
        HourlyReading::new(self.id, panel_id, self.kilo_watt).with_timestamp(self.timestamp)
    }
}

/// 读数响应
#[derive(Debug, Serialize)]
pub struct ReadingResponse {
    pub id: i64,
    pub panel_id: String,
    pub kilo_watt: f64,
    pub timestamp: DateTime<Utc>,
}

impl From<HourlyReading> for ReadingResponse {
    fn from(reading: HourlyReading) -> Self {
        Self {
            id: reading.id,
            panel_id: reading.panel_id,
            kilo_watt: reading.kilo_watt,
            timestamp: reading.timestamp,
        }
    }
}

/// 读数列表响应
#[derive(Debug, Serialize)]
pub struct ReadingListResponse {
    pub readings: Vec<ReadingResponse>,
}

/// 单日汇总响应
#[derive(Debug, Serialize)]
pub struct DailySummaryResponse {
    pub date: NaiveDate,
    pub minimum: f64,
    pub maximum: f64,
    pub sum: f64,
    pub average: f64,
}

impl From<DailySummary> for DailySummaryResponse {
    fn from(summary: DailySummary) -> Self {
        Self {
            date: summary.date,
            minimum: summary.minimum,
            maximum: summary.maximum,
            sum: summary.sum,
            average: summary.average,
        }
    }
}
