//! Client-visible task state and the reducer that evolves it.
//!
//! State only changes through [`ClientState::apply`]. Each intent moves
//! through three phases: it is requested, then it either succeeds or fails.
//! Success actions carry the server's answer; failure actions carry the
//! message shown to the user.

use crate::task::domain::{Task, TaskId};
use std::fmt;
use tracing::{debug, warn};

/// The four operations a presentation layer can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentKind {
    /// Load the whole list.
    Fetch,
    /// Create a task.
    Add,
    /// Modify a task.
    Update,
    /// Remove a task.
    Delete,
}

impl IntentKind {
    /// Returns a short lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Add => "add",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of one intent kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum IntentPhase {
    /// Never requested.
    #[default]
    Idle,
    /// Waiting on the server.
    InFlight,
    /// Finished, with the failure message when it failed.
    Settled(Result<(), String>),
}

impl IntentPhase {
    /// Returns `true` while a request is outstanding.
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }
}

/// Phase of one intent kind plus how many of its requests are outstanding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct IntentSlot {
    phase: IntentPhase,
    outstanding: usize,
}

impl IntentSlot {
    fn begin(&mut self) {
        self.outstanding += 1;
        self.phase = IntentPhase::InFlight;
    }

    fn finish(&mut self, outcome: Result<(), String>) {
        self.outstanding = self.outstanding.saturating_sub(1);
        if self.outstanding == 0 {
            self.phase = IntentPhase::Settled(outcome);
        }
    }
}

/// Phase of every intent kind.
///
/// A kind stays [`IntentPhase::InFlight`] while any of its requests is
/// outstanding. Once the last one finishes it becomes
/// [`IntentPhase::Settled`] with the outcome of that last request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentPhases {
    fetch: IntentSlot,
    add: IntentSlot,
    update: IntentSlot,
    delete: IntentSlot,
}

impl IntentPhases {
    /// Returns the phase of `kind`.
    #[must_use]
    pub const fn get(&self, kind: IntentKind) -> &IntentPhase {
        &self.slot(kind).phase
    }

    /// Returns how many requests of `kind` are awaiting the server.
    #[must_use]
    pub const fn outstanding(&self, kind: IntentKind) -> usize {
        self.slot(kind).outstanding
    }

    const fn slot(&self, kind: IntentKind) -> &IntentSlot {
        match kind {
            IntentKind::Fetch => &self.fetch,
            IntentKind::Add => &self.add,
            IntentKind::Update => &self.update,
            IntentKind::Delete => &self.delete,
        }
    }

    fn slot_mut(&mut self, kind: IntentKind) -> &mut IntentSlot {
        match kind {
            IntentKind::Fetch => &mut self.fetch,
            IntentKind::Add => &mut self.add,
            IntentKind::Update => &mut self.update,
            IntentKind::Delete => &mut self.delete,
        }
    }
}

/// A state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    /// Phase one of any intent.
    Requested(IntentKind),
    /// The fetched list.
    Fetched(Vec<Task>),
    /// The created task as stored by the server.
    Added(Task),
    /// The updated task as stored by the server.
    Updated(Task),
    /// The identifier of a deleted task.
    Deleted(TaskId),
    /// Phase three of any intent.
    Failed {
        /// The intent that failed.
        intent: IntentKind,
        /// Message to surface.
        message: String,
    },
    /// The user dismissed the error notification.
    ErrorDismissed,
}

/// Presentation-facing cache of tasks plus loading and error flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientState {
    list: Vec<Task>,
    loading: bool,
    error: Option<String>,
    in_flight: usize,
    intents: IntentPhases,
}

impl ClientState {
    /// Creates an empty, idle state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks in server order.
    #[must_use]
    pub fn list(&self) -> &[Task] {
        &self.list
    }

    /// `true` while any intent is in flight.
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    /// The latest failure message, until dismissed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Number of outstanding requests.
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Phase of each intent kind.
    #[must_use]
    pub const fn intents(&self) -> &IntentPhases {
        &self.intents
    }

    /// Finds a task in the list by identifier.
    #[must_use]
    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.list.iter().find(|task| task.id() == id)
    }

    /// Applies one transition.
    ///
    /// Returns `false` when an update names a task that is not in the list;
    /// the list is left alone in that case and the intent still settles.
    pub fn apply(&mut self, action: TaskAction) -> bool {
        match action {
            TaskAction::Requested(kind) => {
                self.in_flight += 1;
                self.loading = true;
                self.error = None;
                self.intents.slot_mut(kind).begin();
                true
            }
            TaskAction::Fetched(tasks) => {
                debug!(count = tasks.len(), "task list replaced");
                self.list = tasks;
                self.settle(IntentKind::Fetch, Ok(()));
                true
            }
            TaskAction::Added(task) => {
                self.list.push(task);
                self.settle(IntentKind::Add, Ok(()));
                true
            }
            TaskAction::Updated(task) => {
                let replaced = match self.list.iter_mut().find(|slot| slot.id() == task.id()) {
                    Some(slot) => {
                        *slot = task;
                        true
                    }
                    None => {
                        warn!(task_id = %task.id(), "updated task is not in the client list");
                        false
                    }
                };
                self.settle(IntentKind::Update, Ok(()));
                replaced
            }
            TaskAction::Deleted(id) => {
                let before = self.list.len();
                self.list.retain(|task| task.id() != &id);
                debug!(task_id = %id, before, after = self.list.len(), "task removed");
                self.settle(IntentKind::Delete, Ok(()));
                true
            }
            TaskAction::Failed { intent, message } => {
                self.error = Some(message.clone());
                self.settle(intent, Err(message));
                true
            }
            TaskAction::ErrorDismissed => {
                self.error = None;
                true
            }
        }
    }

    fn settle(&mut self, kind: IntentKind, outcome: Result<(), String>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.loading = self.in_flight > 0;
        self.intents.slot_mut(kind).finish(outcome);
    }
}
