//! The client state container and its four intents.

use crate::client::{
    ClientState, IntentKind, TaskAction,
    ports::{TaskApi, TaskApiError, TaskApiResult},
};
use crate::task::domain::{NewTask, Task, TaskId, TaskPatch};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error};

/// What a successful update did to the client list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The task was replaced in place.
    Replaced(Task),
    /// The server accepted the update but the task was not in the client
    /// list, so the list was left unchanged.
    NotInList(Task),
}

impl UpdateOutcome {
    /// Returns the task as stored by the server.
    #[must_use]
    pub const fn task(&self) -> &Task {
        match self {
            Self::Replaced(task) | Self::NotInList(task) => task,
        }
    }
}

/// Presentation-facing task cache driven by asynchronous intents.
///
/// Every intent marks the state as loading, awaits the API, then records
/// either the server's answer or the failure message. Intents do not queue:
/// several may be in flight at once and their completions apply in whatever
/// order they arrive. Each transition is applied atomically, so concurrent
/// completions never lose each other's effects.
pub struct TaskClient<A: TaskApi> {
    api: Arc<A>,
    state: watch::Sender<ClientState>,
}

impl<A: TaskApi> Clone for TaskClient<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            state: self.state.clone(),
        }
    }
}

impl<A: TaskApi> TaskClient<A> {
    /// Creates a container with an empty list.
    #[must_use]
    pub fn new(api: Arc<A>) -> Self {
        let (state, _) = watch::channel(ClientState::new());
        Self { api, state }
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> ClientState {
        self.state.borrow().clone()
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ClientState> {
        self.state.subscribe()
    }

    /// Dismisses the current error notification.
    pub fn clear_error(&self) {
        self.dispatch(TaskAction::ErrorDismissed);
    }

    /// Reloads the list from the server.
    ///
    /// # Errors
    ///
    /// Returns the API failure after recording it in the state.
    pub async fn fetch(&self) -> TaskApiResult<()> {
        self.dispatch(TaskAction::Requested(IntentKind::Fetch));
        let tasks = self.settle(IntentKind::Fetch, self.api.fetch_tasks().await)?;
        self.dispatch(TaskAction::Fetched(tasks));
        Ok(())
    }

    /// Creates a task and appends the stored record to the list.
    ///
    /// # Errors
    ///
    /// Returns the API failure after recording it in the state.
    pub async fn add(&self, draft: NewTask) -> TaskApiResult<Task> {
        self.dispatch(TaskAction::Requested(IntentKind::Add));
        let task = self.settle(IntentKind::Add, self.api.create_task(&draft).await)?;
        self.dispatch(TaskAction::Added(task.clone()));
        Ok(task)
    }

    /// Updates a task and replaces it in the list.
    ///
    /// # Errors
    ///
    /// Returns the API failure after recording it in the state.
    pub async fn update(&self, id: &TaskId, patch: TaskPatch) -> TaskApiResult<UpdateOutcome> {
        self.dispatch(TaskAction::Requested(IntentKind::Update));
        let task = self.settle(IntentKind::Update, self.api.update_task(id, &patch).await)?;
        if self.dispatch(TaskAction::Updated(task.clone())) {
            Ok(UpdateOutcome::Replaced(task))
        } else {
            Ok(UpdateOutcome::NotInList(task))
        }
    }

    /// Deletes a task and removes it from the list.
    ///
    /// # Errors
    ///
    /// Returns the API failure after recording it in the state.
    pub async fn delete(&self, id: &TaskId) -> TaskApiResult<()> {
        self.dispatch(TaskAction::Requested(IntentKind::Delete));
        self.settle(IntentKind::Delete, self.api.delete_task(id).await)?;
        self.dispatch(TaskAction::Deleted(id.clone()));
        Ok(())
    }

    /// Records a failed call and passes the result through.
    fn settle<T>(&self, intent: IntentKind, result: TaskApiResult<T>) -> TaskApiResult<T> {
        result.inspect_err(|err: &TaskApiError| {
            error!(%intent, error = %err, "task intent failed");
            self.dispatch(TaskAction::Failed {
                intent,
                message: err.to_string(),
            });
        })
    }

    fn dispatch(&self, action: TaskAction) -> bool {
        debug!(?action, "dispatching");
        let mut applied = true;
        self.state.send_modify(|state| applied = state.apply(action));
        applied
    }
}
