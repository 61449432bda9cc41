//! Rendering of level statistics and per-level details
//!
//! The text renderers only format; they never filter or count.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::{LevelCounts, LogRecord};

const LEVEL_COLUMN_WIDTH: usize = 16;
const COUNT_RULE_WIDTH: usize = 11;

/// Two-column table of levels and counts, in the mapping's order
///
/// ```
/// use log_level_analyzer::models::LevelCounts;
/// use log_level_analyzer::report::render_counts;
///
/// let mut counts = LevelCounts::new();
/// counts.increment("INFO");
/// assert!(render_counts(&counts).contains("INFO             | 1"));
/// ```
pub fn render_counts(counts: &LevelCounts) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<width$} | Count", "Level", width = LEVEL_COLUMN_WIDTH);
    let _ =
        writeln!(out, "{} | {}", "-".repeat(LEVEL_COLUMN_WIDTH), "-".repeat(COUNT_RULE_WIDTH));
    for (level, count) in counts.iter() {
        let _ = writeln!(out, "{:<width$} | {}", level, count, width = LEVEL_COLUMN_WIDTH);
    }
    out
}

/// Header naming the level followed by one `date time - message` line per record
pub fn render_details(records: &[&LogRecord], level: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "Log details for level '{}'", level);
    for record in records {
        let _ = writeln!(out, "{} {} - {}", record.date, record.time, record.message);
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    counts: &'a LevelCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a [&'a LogRecord]>,
}

/// Pretty-printed JSON with the counts and, when a level was requested, its records
pub fn render_json(counts: &LevelCounts, details: Option<(&str, &[&LogRecord])>) -> Result<String> {
    let report = JsonReport {
        counts,
        level: details.map(|(level, _)| level),
        details: details.map(|(_, records)| records),
    };

    let mut json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    json.push('\n');
    Ok(json)
}
