//! Command-line surface: argument parsing, wiring and exit codes

pub mod commands;

pub use commands::{Cli, OutputFormat, execute, run};
