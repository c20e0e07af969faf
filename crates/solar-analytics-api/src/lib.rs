pub mod api;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

pub use api::create_router;
pub use config::AppConfig;
pub use error::{ApiError, Result};
pub use state::AppState;
