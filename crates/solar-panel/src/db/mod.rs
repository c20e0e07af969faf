mod converter;
mod entity;
mod store;

pub use entity::{one_hour_electricity, panel};
pub use store::{setup_schema, DbPanelStore, DbReadingStore};
