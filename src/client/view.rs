//! Read-only selectors over client state for presentation layers.

use super::ClientState;
use crate::task::domain::{Priority, Task, TaskStatus};

/// Search text plus an optional priority restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    query: String,
    priority: Option<Priority>,
}

impl TaskFilter {
    /// A filter that matches every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Matches tasks whose title or description contains `query`, ignoring
    /// case.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into().to_lowercase();
        self
    }

    /// Matches only tasks of `priority`.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns `true` when `task` passes the filter.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let matches_query = self.query.is_empty()
            || task.title().to_lowercase().contains(&self.query)
            || task.description().to_lowercase().contains(&self.query);
        let matches_priority = self
            .priority
            .is_none_or(|priority| task.priority() == priority);
        matches_query && matches_priority
    }
}

/// One board column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumn<'a> {
    /// Status shown in the column.
    pub status: TaskStatus,
    /// Matching tasks in list order.
    pub tasks: Vec<&'a Task>,
}

impl ClientState {
    /// Tasks passing `filter`, in list order.
    #[must_use]
    pub fn visible(&self, filter: &TaskFilter) -> Vec<&Task> {
        self.list().iter().filter(|task| filter.matches(task)).collect()
    }

    /// Visible tasks grouped by status in [`TaskStatus::BOARD_ORDER`].
    /// Empty columns are kept.
    #[must_use]
    pub fn board(&self, filter: &TaskFilter) -> Vec<BoardColumn<'_>> {
        let visible = self.visible(filter);
        TaskStatus::BOARD_ORDER
            .into_iter()
            .map(|status| BoardColumn {
                status,
                tasks: visible
                    .iter()
                    .copied()
                    .filter(|task| task.status() == status)
                    .collect(),
            })
            .collect()
    }
}
