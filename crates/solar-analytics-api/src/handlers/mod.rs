pub mod analytics;
pub mod panel;

pub use analytics::*;
pub use panel::*;
