//! Interactive command-line front end.
//!
//! Reads one command per line, dispatches it to a planning use case, and
//! prints the outcome. Use-case failures are reported and the session
//! carries on.

pub mod command;
pub mod config;
pub mod display;
pub mod logging;
pub mod session;

pub use command::{Command, CommandParseError};
pub use config::CliConfig;
pub use display::OutputFormat;
pub use session::{Flow, Session};

use thiserror::Error;

/// Errors that end the command-line process.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading input or writing output failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The tracing filter directive could not be parsed.
    #[error("invalid log filter '{filter}': {reason}")]
    LogFilter {
        /// Directive as supplied.
        filter: String,
        /// Parser message.
        reason: String,
    },

    /// A global tracing subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
