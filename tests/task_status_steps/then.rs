//! Then steps for task status BDD scenarios.

use super::world::TaskStatusWorld;
use eyre::eyre;
use rstest_bdd_macros::then;
use tasklist::planning::{domain::TaskId, ports::TaskRepository, services::ErrorKind};

fn expect_failure(world: &TaskStatusWorld, expected: ErrorKind) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre!("missing status change result"))?;

    match result {
        Err(err) if err.kind() == expected => Ok(()),
        other => Err(eyre!("expected {expected:?} error, got {other:?}")),
    }
}

#[then("the status change succeeds")]
fn status_change_succeeds(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(_)) => Ok(()),
        other => Err(eyre!("expected a successful status change, got {other:?}")),
    }
}

#[then("the status change fails with an invalid state error")]
fn fails_with_invalid_state(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    expect_failure(world, ErrorKind::InvalidState)
}

#[then("the status change fails with a task not found error")]
fn fails_with_task_not_found(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    expect_failure(world, ErrorKind::TaskNotFound)
}

#[then("the status change fails with a project not found error")]
fn fails_with_project_not_found(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    expect_failure(world, ErrorKind::ProjectNotFound)
}

#[then(r#"task {task_id:i64} is {status}"#)]
fn task_has_status(
    world: &TaskStatusWorld,
    task_id: i64,
    status: String,
) -> Result<(), eyre::Report> {
    let task = world
        .tasks
        .find_by_id(TaskId::new(task_id)?)?
        .ok_or_else(|| eyre!("task {task_id} is not stored"))?;

    if task.status().as_str() != status {
        return Err(eyre!(
            "expected task {task_id} to be {status}, found {}",
            task.status().as_str()
        ));
    }
    Ok(())
}
