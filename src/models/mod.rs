//! Data models for parsed log files
//!
//! - [`LogRecord`] - One parsed line (date, time, level, message)
//! - [`LevelCounts`] - Level to occurrence count, in first-seen order

pub mod counts;
pub mod record;

pub use counts::LevelCounts;
pub use record::LogRecord;
