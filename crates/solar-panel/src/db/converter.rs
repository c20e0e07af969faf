use crate::{HourlyReading, Panel};
use sea_orm::ActiveValue::Set;

/// Panel 模型与数据库实体的转换
impl From<Panel> for super::panel::ActiveModel {
    fn from(panel: Panel) -> Self {
        Self {
            serial: Set(panel.serial),
            brand: Set(panel.brand),
            latitude: Set(panel.latitude),
            longitude: Set(panel.longitude),
        }
    }
}

impl From<super::panel::Model> for Panel {
    fn from(model: super::panel::Model) -> Self {
        Self {
            serial: model.serial,
            brand: model.brand,
            latitude: model.latitude,
            longitude: model.longitude,
        }
    }
}

/// HourlyReading 模型与数据库实体的转换
impl From<HourlyReading> for super::one_hour_electricity::ActiveModel {
    fn from(reading: HourlyReading) -> Self {
        Self {
            id: Set(reading.id),
            panel_id: Set(reading.panel_id),
            kilo_watt: Set(reading.kilo_watt),
            date_time: Set(reading.timestamp),
        }
    }
}

impl From<super::one_hour_electricity::Model> for HourlyReading {
    fn from(model: super::one_hour_electricity::Model) -> Self {
        Self {
            id: model.id,
            panel_id: model.panel_id,
            timestamp: model.date_time,
            kilo_watt: model.kilo_watt,
        }
    }
}
