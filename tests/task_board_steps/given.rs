//! Given steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::services::default_tasks;

#[given("an empty task store")]
fn empty_store(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service.list()).wrap_err("list tasks in empty store")?;
    eyre::ensure!(tasks.is_empty(), "expected an empty store, found {}", tasks.len());
    Ok(())
}

#[given("a task store seeded with the demo tasks")]
fn seeded_store(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    run_async(world.service.seed(default_tasks())).wrap_err("seed demo tasks")?;
    Ok(())
}

#[given("the client has fetched the task list")]
fn client_fetched(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    run_async(world.client.fetch()).wrap_err("fetch tasks into client")?;
    Ok(())
}
