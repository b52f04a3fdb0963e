//! Interactive read–dispatch–print loop over the planning services.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use super::{
    command::Command,
    config::CliConfig,
    display::{OutputFormat, render_projects},
};
use crate::planning::{
    adapters::memory::{InMemoryProjectRepository, InMemoryTaskRepository},
    ports::{ProjectRepository, TaskRepository},
    services::{
        ChangeTaskStatusRequest, ChangeTaskStatusService, CreateProjectRequest,
        CreateProjectService, CreateTaskRequest, CreateTaskService, PlanningServiceError,
        ViewAllProjectsService,
    },
};
use tracing::{debug, warn};

const HELP: &str = "
Available commands:
  show                     # Show all projects and tasks
  project <project name>   # Create a new project
  add <project> <task>     # Add a task to a project
  check <project> <task>   # Mark a task as done
  uncheck <project> <task> # Mark a task as not done
  help                     # Show this help message
  quit                     # Exit the application
";

/// Whether the loop should keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop the session.
    Quit,
}

/// An interactive session bound to one pair of stores.
pub struct Session<P, T>
where
    P: ProjectRepository,
    T: TaskRepository,
{
    create_project: CreateProjectService<P>,
    create_task: CreateTaskService<P, T>,
    status: ChangeTaskStatusService<P, T>,
    view: ViewAllProjectsService<P, T>,
    format: OutputFormat,
    prompt: String,
}

impl Session<InMemoryProjectRepository, InMemoryTaskRepository> {
    /// Creates a session over fresh in-memory stores.
    #[must_use]
    pub fn in_memory(config: &CliConfig) -> Self {
        Self::new(
            Arc::new(InMemoryProjectRepository::new()),
            Arc::new(InMemoryTaskRepository::new()),
            config,
        )
    }
}

impl<P, T> Session<P, T>
where
    P: ProjectRepository,
    T: TaskRepository,
{
    /// Wires the use-case services to the given stores.
    #[must_use]
    pub fn new(projects: Arc<P>, tasks: Arc<T>, config: &CliConfig) -> Self {
        Self {
            create_project: CreateProjectService::new(Arc::clone(&projects)),
            create_task: CreateTaskService::new(Arc::clone(&projects), Arc::clone(&tasks)),
            status: ChangeTaskStatusService::new(Arc::clone(&projects), Arc::clone(&tasks)),
            view: ViewAllProjectsService::new(projects, tasks),
            format: config.format,
            prompt: config.prompt.clone(),
        }
    }

    /// Runs the session until `quit` or end of input.
    ///
    /// Failed commands are reported on `output` and do not end the session.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when reading input or writing output fails.
    pub fn run(&self, mut input: impl BufRead, output: &mut impl Write) -> io::Result<()> {
        writeln!(output, "Welcome to Task List Manager!")?;
        writeln!(
            output,
            "Type 'help' for available commands or 'quit' to exit."
        )?;

        let mut line = String::new();
        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            if self.handle_line(&line, output)? == Flow::Quit {
                break;
            }
        }

        writeln!(output, "Goodbye!")
    }

    /// Parses and executes one input line.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when writing output fails.
    pub fn handle_line(&self, line: &str, output: &mut impl Write) -> io::Result<Flow> {
        match Command::parse(line) {
            Ok(command) => self.execute(command, output),
            Err(err) => {
                debug!(error = %err, "rejected command line");
                writeln!(output, "Error: {err}")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Executes a parsed command.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when writing output fails.
    pub fn execute(&self, command: Command, output: &mut impl Write) -> io::Result<Flow> {
        let context = failure_context(&command);
        let outcome = match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => Ok(writeln!(output, "{HELP}")),
            Command::Show => self.show(output),
            Command::Project { name } => self
                .create_project
                .create_project(CreateProjectRequest::new(name.as_str()))
                .map(|_| writeln!(output, "Created project: {}", name.trim())),
            Command::Add {
                project,
                description,
            } => self
                .create_task
                .create_task(CreateTaskRequest::new(project.as_str(), description.as_str()))
                .map(|_| {
                    writeln!(
                        output,
                        "Added task \"{}\" to project \"{}\"",
                        description.trim(),
                        project.trim()
                    )
                }),
            Command::Check { project, task_id } => self.set_status(&project, task_id, true, output),
            Command::Uncheck { project, task_id } => {
                self.set_status(&project, task_id, false, output)
            }
        };

        match outcome {
            Ok(written) => written?,
            Err(err) => report(context, &err, output)?,
        }
        Ok(Flow::Continue)
    }

    fn show(&self, output: &mut impl Write) -> Result<io::Result<()>, PlanningServiceError> {
        self.view
            .view_all()
            .map(|projects| render_projects(output, &projects, self.format))
    }

    fn set_status(
        &self,
        project: &str,
        task_id: i64,
        completed: bool,
        output: &mut impl Write,
    ) -> Result<io::Result<()>, PlanningServiceError> {
        let label = if completed { "completed" } else { "uncompleted" };
        self.status
            .change_status(ChangeTaskStatusRequest::new(project, task_id, completed))
            .map(|_| writeln!(output, "Marked task {task_id} as {label}"))
    }
}

/// What the command was doing, shown after `Error` when a use case fails.
const fn failure_context(command: &Command) -> Option<&'static str> {
    match command {
        Command::Project { .. } => Some("creating project"),
        Command::Add { .. } => Some("adding task"),
        Command::Check { .. } | Command::Uncheck { .. } => Some("updating task status"),
        Command::Help | Command::Show | Command::Quit => None,
    }
}

fn report(
    context: Option<&'static str>,
    err: &PlanningServiceError,
    output: &mut impl Write,
) -> io::Result<()> {
    warn!(kind = ?err.kind(), context, error = %err, "command failed");
    let prefix = context.map_or_else(|| "Error".to_owned(), |action| format!("Error {action}"));
    writeln!(output, "{prefix}: {err}")
}
