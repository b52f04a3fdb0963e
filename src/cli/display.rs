//! Rendering of project views for the terminal.

use crate::planning::services::{ProjectView, TaskView};
use clap::ValueEnum;
use std::io::{self, Write};

/// Output format for the `show` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Indented checklist.
    #[default]
    Text,
    /// Pretty-printed JSON array of project views.
    Json,
}

/// Writes the project list in the requested format.
///
/// # Errors
///
/// Returns an I/O error when writing fails or JSON encoding fails.
pub fn render_projects(
    out: &mut impl Write,
    projects: &[ProjectView],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_text(out, projects),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, projects).map_err(io::Error::other)?;
            writeln!(out)
        }
    }
}

fn render_text(out: &mut impl Write, projects: &[ProjectView]) -> io::Result<()> {
    if projects.is_empty() {
        return writeln!(out, "No projects found.");
    }

    writeln!(out)?;
    for project in projects {
        writeln!(out, "{}", project.name)?;
        if project.tasks.is_empty() {
            writeln!(out, "    No tasks")?;
        }
        for task in &project.tasks {
            writeln!(out, "    {}", task_line(task))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Formats one task as `[x] <id>: <description>` or `[ ] <id>: <description>`.
#[must_use]
pub fn task_line(task: &TaskView) -> String {
    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    format!("{checkbox} {}: {}", task.id, task.description)
}
