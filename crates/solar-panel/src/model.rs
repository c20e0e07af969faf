use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// 面板序列号长度
pub const SERIAL_LENGTH: usize = 16;

/// 光伏面板
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// 序列号（全局唯一）
    pub serial: String,

    /// 品牌
    pub brand: String,

    /// 纬度
    pub latitude: f64,

    /// 经度
    pub longitude: f64,
}

impl Panel {
    /// 创建新面板
    pub fn new(
        serial: impl Into<String>,
        brand: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            serial: serial.into(),
            brand: brand.into(),
            latitude,
            longitude,
        }
    }
}

/// 一小时发电读数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyReading {
    /// 读数 ID（由调用方提供）
    pub id: i64,

    /// 所属面板序列号
    pub panel_id: String,

    /// 采集时间
    pub timestamp: DateTime<Utc>,

    /// 发电功率（kW）
    pub kilo_watt: f64,
}

impl HourlyReading {
    pub fn new(id: i64, panel_id: impl Into<String>, kilo_watt: f64) -> Self {
        Self {
            id,
            panel_id: panel_id.into(),
            timestamp: Utc::now(),
            kilo_watt,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// 读数所在的日历日（UTC）
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// 单日汇总统计
///
/// 由同一天的读数计算得出，不做持久化。
/// `average` 固定除以 24，读数不足 24 条时可能小于 `minimum`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub minimum: f64,
    pub maximum: f64,
    pub sum: f64,
    pub average: f64,
}
