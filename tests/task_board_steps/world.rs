//! Shared world state for task board BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::client::{adapters::LocalTaskApi, ports::TaskApiError, services::TaskClient};
use taskboard::task::{adapters::memory::InMemoryTaskRepository, services::TaskService};

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository, DefaultClock>;

/// Client type used by the BDD world.
pub type TestClient = TaskClient<LocalTaskApi<InMemoryTaskRepository, DefaultClock>>;

/// Scenario world for task board behaviour tests.
pub struct TaskBoardWorld {
    pub service: TestTaskService,
    pub client: TestClient,
    pub last_failure: Option<TaskApiError>,
}

impl TaskBoardWorld {
    /// Creates a world whose client talks to an empty in-process store.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        );
        let client = TaskClient::new(Arc::new(LocalTaskApi::new(service.clone())));

        Self {
            service,
            client,
            last_failure: None,
        }
    }
}

impl Default for TaskBoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskBoardWorld {
    TaskBoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
