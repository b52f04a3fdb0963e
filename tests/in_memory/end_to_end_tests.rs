//! End-to-end flows through all four use cases.

use super::helpers::{App, app};
use eyre::{bail, ensure};
use rstest::rstest;
use tasklist::planning::{
    domain::TaskStatus,
    ports::TaskRepository,
    services::{
        ChangeTaskStatusRequest, CreateProjectRequest, CreateTaskRequest, ErrorKind, TaskView,
    },
};

#[rstest]
fn reading_list_scenario(app: App) -> eyre::Result<()> {
    app.create_project
        .create_project(CreateProjectRequest::new("Reading"))?;

    let buy = app
        .create_task
        .create_task(CreateTaskRequest::new("Reading", "Buy book"))?;
    ensure!(buy.value() == 1);
    let stored = app.tasks.find_by_id(buy)?;
    ensure!(stored.is_some_and(|task| task.status() == TaskStatus::Pending));

    let read = app
        .create_task
        .create_task(CreateTaskRequest::new("Reading", "Read chapter 1"))?;
    ensure!(read.value() == 2);

    app.status
        .change_status(ChangeTaskStatusRequest::new("Reading", 1, true))?;

    let views = app.view.view_all()?;
    let [project] = views.as_slice() else {
        bail!("expected exactly one project, got {views:?}");
    };
    ensure!(project.name == "Reading");
    ensure!(
        project.tasks
            == [
                TaskView {
                    id: 1,
                    description: "Buy book".to_owned(),
                    completed: true,
                },
                TaskView {
                    id: 2,
                    description: "Read chapter 1".to_owned(),
                    completed: false,
                },
            ]
    );
    Ok(())
}

#[rstest]
fn duplicate_project_scenario(app: App) -> eyre::Result<()> {
    app.create_project
        .create_project(CreateProjectRequest::new("A"))?;

    let second = app
        .create_project
        .create_project(CreateProjectRequest::new("A"));
    ensure!(second.is_err_and(|err| err.kind() == ErrorKind::DuplicateName));

    let views = app.view.view_all()?;
    let [project] = views.as_slice() else {
        bail!("expected exactly one project, got {views:?}");
    };
    ensure!(project.name == "A");
    ensure!(project.tasks.is_empty());
    Ok(())
}

#[rstest]
fn unknown_task_id_scenario(app: App) -> eyre::Result<()> {
    app.create_project
        .create_project(CreateProjectRequest::new("A"))?;

    let result = app
        .status
        .change_status(ChangeTaskStatusRequest::new("A", 999, true));

    ensure!(result.is_err_and(|err| err.kind() == ErrorKind::TaskNotFound));
    Ok(())
}

#[rstest]
fn projects_are_listed_in_creation_order(app: App) -> eyre::Result<()> {
    let names = ["Zeta", "Alpha", "Mid", "Beta", "Omega", "Delta", "Kappa", "Iota", "Eta", "Nu", "Pi"];
    for name in names {
        app.create_project
            .create_project(CreateProjectRequest::new(name))?;
    }

    let listed: Vec<String> = app.view.view_all()?.into_iter().map(|p| p.name).collect();
    ensure!(listed == names);
    Ok(())
}

#[rstest]
fn tasks_are_grouped_under_their_own_project(app: App) -> eyre::Result<()> {
    for name in ["Home", "Work"] {
        app.create_project
            .create_project(CreateProjectRequest::new(name))?;
    }
    app.create_task
        .create_task(CreateTaskRequest::new("Home", "Dishes"))?;
    app.create_task
        .create_task(CreateTaskRequest::new("Work", "Report"))?;
    app.create_task
        .create_task(CreateTaskRequest::new("Home", "Laundry"))?;

    let views = app.view.view_all()?;
    let grouped: Vec<(String, Vec<u64>)> = views
        .into_iter()
        .map(|p| (p.name, p.tasks.into_iter().map(|t| t.id).collect()))
        .collect();
    ensure!(
        grouped
            == vec![
                ("Home".to_owned(), vec![1, 3]),
                ("Work".to_owned(), vec![2]),
            ]
    );

    let home = app.view.load_project("Home")?;
    ensure!(home.total_count() == 2);
    ensure!(app.tasks.count_by_project_id(home.id())? == 2);
    Ok(())
}
