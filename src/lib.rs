//! Log Level Analyzer - Count and inspect severity levels in plain-text log files
//!
//! This library parses whitespace-delimited log files where every line has the shape
//! `<date> <time> <level> [message...]`. It supports:
//!
//! - Parsing lines into [`LogRecord`]s, skipping malformed lines without aborting
//! - Counting records per level in first-seen order
//! - Selecting the records of one level
//! - Rendering the results as a text table or JSON
//!
//! # Example
//!
//! ```no_run
//! use log_level_analyzer::{count_by_level, load_logs};
//! use std::path::Path;
//!
//! let store = load_logs(Path::new("app.log"), &mut std::io::stdout())?;
//! for (level, count) in count_by_level(&store).iter() {
//!     println!("{level}: {count}");
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod aggregate;
pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod parsers;
pub mod report;
pub mod store;

// Re-export commonly used types
pub use aggregate::{count_by_level, filter_by_level, normalize_level};
pub use error::{LoadError, ParseError};
pub use models::{LevelCounts, LogRecord};
pub use parsers::{load_logs, parse_log_line};
pub use store::LogStore;
