pub mod aggregate;
pub mod analytics;
pub mod db;
pub mod error;
pub mod model;
pub mod store;

pub use aggregate::{aggregate_by_day, HOURS_PER_DAY};
pub use analytics::AnalyticsService;
pub use db::{one_hour_electricity, panel, setup_schema, DbPanelStore, DbReadingStore};
pub use error::{AnalyticsError, Result};
pub use model::{DailySummary, HourlyReading, Panel};
pub use store::{MemoryPanelStore, MemoryReadingStore, PanelStore, ReadingStore};
