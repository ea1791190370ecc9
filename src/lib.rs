// Kirchenjahr Library
// Bible references, the liturgical calendar feed and service run-sheets

pub mod bible;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod utils;

// Re-export commonly used types
pub use models::*;
pub use calendar::{parse_calendar, read_calendar_file, HymnIndex, LiturgicalColorClass};
pub use service::{Celebration, ComponentTypeConfig, DurationSummary};
pub use error::{AppError, AppResult};
