//! Concurrent use of shared stores from several threads.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use super::helpers::{App, app};
use eyre::{ensure, eyre};
use rstest::rstest;
use tasklist::planning::{
    adapters::memory::InMemoryTaskRepository,
    ports::TaskRepository,
    services::{CreateProjectRequest, CreateTaskRequest, ErrorKind},
};

const THREADS: usize = 8;
const PER_THREAD: usize = 200;

#[rstest]
fn task_ids_increase_strictly_within_each_thread() -> eyre::Result<()> {
    let repo = Arc::new(InMemoryTaskRepository::new());
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let shared = Arc::clone(&repo);
            thread::spawn(move || {
                (0..PER_THREAD)
                    .map(|_| shared.next_id().map(|id| id.value()))
                    .collect::<Result<Vec<_>, _>>()
            })
        })
        .collect();

    let mut all = HashSet::new();
    for handle in handles {
        let issued = handle
            .join()
            .map_err(|_| eyre!("id issuing thread panicked"))??;
        ensure!(issued.windows(2).all(|pair| pair.first() < pair.last()));
        all.extend(issued);
    }

    ensure!(all.len() == THREADS * PER_THREAD);
    ensure!(all.contains(&1));
    ensure!(all.contains(&u64::try_from(THREADS * PER_THREAD)?));
    Ok(())
}

#[rstest]
fn racing_creators_of_one_name_produce_one_project(app: App) -> eyre::Result<()> {
    let app = Arc::new(app);
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let shared = Arc::clone(&app);
            thread::spawn(move || {
                shared
                    .create_project
                    .create_project(CreateProjectRequest::new("Shared"))
                    .map_err(|err| err.kind())
            })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        match handle.join().map_err(|_| eyre!("creator thread panicked"))? {
            Ok(_) => created += 1,
            Err(kind) => ensure!(kind == ErrorKind::DuplicateName, "unexpected {kind:?}"),
        }
    }

    ensure!(created == 1);
    ensure!(app.projects.len()? == 1);
    Ok(())
}

#[rstest]
fn concurrent_task_creation_keeps_every_task(app: App) -> eyre::Result<()> {
    app.create_project
        .create_project(CreateProjectRequest::new("Busy"))?;
    let app = Arc::new(app);

    let handles: Vec<_> = (0..THREADS)
        .map(|worker| {
            let shared = Arc::clone(&app);
            thread::spawn(move || {
                (0..PER_THREAD)
                    .map(|n| {
                        shared
                            .create_task
                            .create_task(CreateTaskRequest::new("Busy", format!("job {worker}-{n}")))
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
        })
        .collect();

    for handle in handles {
        handle
            .join()
            .map_err(|_| eyre!("task creator thread panicked"))??;
    }

    let views = app.view.view_all()?;
    let total: usize = views.iter().map(|p| p.tasks.len()).sum();
    ensure!(total == THREADS * PER_THREAD);
    ensure!(app.tasks.len()? == THREADS * PER_THREAD);
    Ok(())
}
