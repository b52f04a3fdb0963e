//! When steps for task status BDD scenarios.

use super::world::TaskStatusWorld;
use rstest_bdd_macros::when;

#[when(r#"task {task_id:i64} in project "{project}" is checked"#)]
fn task_is_checked(world: &mut TaskStatusWorld, task_id: i64, project: String) {
    world.change(&project, task_id, true);
}

#[when(r#"task {task_id:i64} in project "{project}" is unchecked"#)]
fn task_is_unchecked(world: &mut TaskStatusWorld, task_id: i64, project: String) {
    world.change(&project, task_id, false);
}
