//! Command-line configuration for the interactive session.

use super::display::OutputFormat;
use clap::Parser;

/// Default log filter when neither the flag nor `TASKLIST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Interactive task list manager.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "tasklist", version, about)]
pub struct CliConfig {
    /// Tracing filter directive, e.g. `info` or `tasklist=debug`.
    #[arg(long, env = "TASKLIST_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,

    /// Rendering used by the `show` command.
    #[arg(long, env = "TASKLIST_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Prompt printed before each command.
    #[arg(long, env = "TASKLIST_PROMPT", default_value = "> ")]
    pub prompt: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            format: OutputFormat::Text,
            prompt: "> ".to_owned(),
        }
    }
}
