use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::{info, warn};

use super::line::parse_log_line;
use crate::error::{LoadError, ParseError};
use crate::store::LogStore;

/// Diagnostic written to the output stream for every malformed line
pub const MALFORMED_LINE_DIAGNOSTIC: &str = "Error: The log line format is incorrect.";

/// Read a log file into its raw lines
///
/// The whole file is read up front as UTF-8. Both `\n` and `\r\n` terminate a
/// line, and a trailing newline does not produce an extra empty line.
///
/// # Errors
///
/// - [`LoadError::NotFound`] if the file does not exist
/// - [`LoadError::Io`] for any other read failure, including invalid UTF-8
pub fn read_log_lines(path: &Path) -> Result<Vec<String>, LoadError> {
    let content = fs::read_to_string(path).map_err(|e| LoadError::from_io(path, e))?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Parse every line in order, keeping the records that parse
///
/// A malformed line never stops ingestion: its diagnostic is written to
/// `diagnostics` and the next line is processed. The only error returned is a
/// failure to write that diagnostic.
pub fn ingest_lines<I, S, W>(lines: I, diagnostics: &mut W) -> io::Result<LogStore>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write + ?Sized,
{
    let mut store = LogStore::new();

    for (line_num, line) in lines.into_iter().enumerate() {
        match parse_log_line(line.as_ref()) {
            Ok(record) => store.push(record),
            Err(ParseError::TooFewFields { found }) => {
                warn!(line = line_num + 1, fields = found, "skipping malformed log line");
                writeln!(diagnostics, "{}", MALFORMED_LINE_DIAGNOSTIC)?;
            }
        }
    }

    Ok(store)
}

/// Load and parse a log file
///
/// File-level failures are fatal and returned as [`LoadError::NotFound`] or
/// [`LoadError::Io`]; line-level failures are reported to `diagnostics` and skipped.
/// A write failure on `diagnostics` is [`LoadError::Diagnostics`].
pub fn load_logs<W>(path: &Path, diagnostics: &mut W) -> Result<LogStore, LoadError>
where
    W: Write + ?Sized,
{
    info!(path = %path.display(), "loading log file");

    let lines = read_log_lines(path)?;
    let total_lines = lines.len();
    let store = ingest_lines(&lines, diagnostics).map_err(LoadError::Diagnostics)?;

    info!(
        path = %path.display(),
        records = store.len(),
        skipped = total_lines - store.len(),
        "log file loaded"
    );

    Ok(store)
}
