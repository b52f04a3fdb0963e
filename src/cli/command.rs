//! Parsing of interactive command lines.

use thiserror::Error;

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the command reference.
    Help,
    /// List every project with its tasks.
    Show,
    /// Create a project.
    Project {
        /// Project name; may contain spaces.
        name: String,
    },
    /// Add a task to a project.
    Add {
        /// Single-word project name.
        project: String,
        /// Task description; may contain spaces.
        description: String,
    },
    /// Mark a task as completed.
    Check {
        /// Single-word project name.
        project: String,
        /// Task id as typed.
        task_id: i64,
    },
    /// Mark a task as pending.
    Uncheck {
        /// Single-word project name.
        project: String,
        /// Task id as typed.
        task_id: i64,
    },
    /// End the session.
    Quit,
}

/// Errors returned while parsing a command line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandParseError {
    /// The line was blank.
    #[error("Command cannot be empty")]
    Empty,

    /// The command word is not recognised.
    #[error("Unknown command: {0}")]
    Unknown(String),

    /// Required arguments are missing.
    #[error("{0} command requires: {1}")]
    MissingArguments(&'static str, &'static str),

    /// The task id is not an integer.
    #[error("Task ID must be a number")]
    InvalidTaskId(String),
}

impl Command {
    /// Parses one input line.
    ///
    /// The command word is case-insensitive and arguments are separated by
    /// runs of whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`CommandParseError`] when the line is blank, the command is
    /// unknown, arguments are missing, or a task id is not numeric.
    pub fn parse(line: &str) -> Result<Self, CommandParseError> {
        let mut words = line.split_whitespace();
        let verb = words
            .next()
            .ok_or(CommandParseError::Empty)?
            .to_lowercase();
        let rest: Vec<&str> = words.collect();

        match verb.as_str() {
            "help" => Ok(Self::Help),
            "show" => Ok(Self::Show),
            "quit" => Ok(Self::Quit),
            "project" => {
                if rest.is_empty() {
                    return Err(CommandParseError::MissingArguments(
                        "project",
                        "project <project name>",
                    ));
                }
                Ok(Self::Project {
                    name: rest.join(" "),
                })
            }
            "add" => {
                let Some((project, description)) = rest.split_first().filter(|(_, d)| !d.is_empty())
                else {
                    return Err(CommandParseError::MissingArguments(
                        "add",
                        "add <project> <task description>",
                    ));
                };
                Ok(Self::Add {
                    project: (*project).to_owned(),
                    description: description.join(" "),
                })
            }
            "check" => {
                let (project, task_id) = project_and_id(&rest, "check", "check <project> <task_id>")?;
                Ok(Self::Check { project, task_id })
            }
            "uncheck" => {
                let (project, task_id) =
                    project_and_id(&rest, "uncheck", "uncheck <project> <task_id>")?;
                Ok(Self::Uncheck { project, task_id })
            }
            _ => Err(CommandParseError::Unknown(verb)),
        }
    }
}

fn project_and_id(
    rest: &[&str],
    verb: &'static str,
    usage: &'static str,
) -> Result<(String, i64), CommandParseError> {
    let [project, raw_id, ..] = rest else {
        return Err(CommandParseError::MissingArguments(verb, usage));
    };
    let task_id = raw_id
        .parse::<i64>()
        .map_err(|_| CommandParseError::InvalidTaskId((*raw_id).to_owned()))?;
    Ok(((*project).to_owned(), task_id))
}
