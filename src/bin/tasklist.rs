//! Interactive task list manager.
//!
//! Usage:
//!
//! ```text
//! tasklist [--format text|json] [--prompt <text>] [--log-filter <directive>]
//! ```
//!
//! Commands are read from stdin, one per line, until `quit` or end of input.
//! Logs go to stderr.

use clap::Parser;
use std::io;
use std::process::ExitCode;
use tasklist::cli::{CliConfig, CliError, Session, logging::init_tracing};
use tracing::error;

fn main() -> ExitCode {
    let config = CliConfig::parse();
    if let Err(err) = init_tracing(&config.log_filter) {
        return report_startup_failure(&err);
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "session aborted");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &CliConfig) -> Result<(), CliError> {
    let session = Session::in_memory(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    session.run(stdin.lock(), &mut stdout)?;
    Ok(())
}

fn report_startup_failure(err: &CliError) -> ExitCode {
    use std::io::Write;
    // Logging is unavailable at this point.
    let _ignored = writeln!(io::stderr(), "tasklist: {err}");
    ExitCode::FAILURE
}
