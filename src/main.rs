use std::process::ExitCode;

fn main() -> ExitCode {
    log_level_analyzer::cli::run()
}
