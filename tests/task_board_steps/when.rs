//! When steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, run_async};
use chrono::{Duration, Utc};
use rstest_bdd_macros::when;
use taskboard::task::domain::{NewTask, Priority, TaskId, TaskPatch};

#[when(r#"the client adds a task titled "{title}" with priority "{priority}""#)]
fn add_task(
    world: &mut TaskBoardWorld,
    title: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let level = Priority::try_from(priority.as_str())
        .map_err(|err| eyre::eyre!("invalid priority in scenario: {err}"))?;
    let due = Utc::now().date_naive() + Duration::days(7);
    let draft = NewTask::new(title, "Added from a scenario", level, due);

    world.last_failure = run_async(world.client.add(draft)).err();
    Ok(())
}

#[when(r#"the client renames task "{id}" to "{title}""#)]
fn rename_task(world: &mut TaskBoardWorld, id: String, title: String) {
    let patch = TaskPatch::new().with_title(title);
    world.last_failure = run_async(world.client.update(&TaskId::new(id), patch)).err();
}

#[when(r#"the client deletes task "{id}""#)]
fn delete_task(world: &mut TaskBoardWorld, id: String) {
    world.last_failure = run_async(world.client.delete(&TaskId::new(id))).err();
}
