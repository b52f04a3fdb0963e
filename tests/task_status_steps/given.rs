//! Given steps for task status BDD scenarios.

use super::world::TaskStatusWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasklist::planning::services::{
    ChangeTaskStatusRequest, CreateProjectRequest, CreateTaskRequest,
};

#[given(r#"a project named "{name}""#)]
fn project_named(world: &mut TaskStatusWorld, name: String) -> Result<(), eyre::Report> {
    world
        .create_project
        .create_project(CreateProjectRequest::new(name))
        .wrap_err("create project for scenario")?;
    Ok(())
}

#[given(r#"the project "{project}" has a task "{description}""#)]
fn project_has_task(
    world: &mut TaskStatusWorld,
    project: String,
    description: String,
) -> Result<(), eyre::Report> {
    world
        .create_task
        .create_task(CreateTaskRequest::new(project, description))
        .wrap_err("create task for scenario")?;
    Ok(())
}

#[given(r#"task {task_id:i64} in project "{project}" has been checked"#)]
fn task_has_been_checked(
    world: &mut TaskStatusWorld,
    task_id: i64,
    project: String,
) -> Result<(), eyre::Report> {
    world
        .status
        .change_status(ChangeTaskStatusRequest::new(project, task_id, true))
        .wrap_err("check task in scenario setup")?;
    Ok(())
}
