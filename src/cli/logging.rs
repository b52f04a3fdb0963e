//! Tracing subscriber installation for the binary.

use super::CliError;
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber writing to stderr, keeping stdout for command
/// output.
///
/// # Errors
///
/// Returns [`CliError::LogFilter`] when the filter directive is invalid and
/// [`CliError::Logging`] when a global subscriber is already installed.
pub fn init_tracing(filter: &str) -> Result<(), CliError> {
    let env_filter = EnvFilter::try_new(filter).map_err(|err| CliError::LogFilter {
        filter: filter.to_owned(),
        reason: err.to_string(),
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| CliError::Logging(err.to_string()))
}
