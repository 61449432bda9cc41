//! Parsers for whitespace-delimited, line-oriented log files
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach suitable for CLI tools:
//!
//! - **Individual line failures**: A line with fewer than three fields yields a
//!   [`ParseError`](crate::error::ParseError). The ingestion pass writes a diagnostic to the
//!   output stream, logs a warning, and moves on. One bad line never stops the rest of the file.
//!
//! - **File-level failures**: A missing or unreadable file is a
//!   [`LoadError`](crate::error::LoadError). Nothing is parsed in that case.
//!
//! Every readable file is processed to completion, however many of its lines are malformed.

pub mod line;
pub mod log_file;

pub use line::parse_log_line;
pub use log_file::{MALFORMED_LINE_DIAGNOSTIC, ingest_lines, load_logs, read_log_lines};
