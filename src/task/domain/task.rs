//! Task record and its lifecycle status.

use super::{NewTask, ParseTaskStatusError, Priority, TaskDomainError, TaskId, TaskPatch};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workflow status of a task.
///
/// Legacy labels written by earlier clients (`incomplete`, `draft`,
/// `review`) are accepted on input and mapped to their current variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started.
    #[default]
    #[serde(alias = "incomplete")]
    Todo,
    /// Being written up.
    #[serde(alias = "draft")]
    Drafting,
    /// Waiting on a reviewer.
    #[serde(alias = "review", alias = "in_review")]
    InReview,
    /// Signed off, not yet finished.
    Approved,
    /// Finished.
    Done,
}

impl TaskStatus {
    /// Board column order used by presentation layers.
    pub const BOARD_ORDER: [Self; 5] = [
        Self::Todo,
        Self::Approved,
        Self::InReview,
        Self::Drafting,
        Self::Done,
    ];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Drafting => "drafting",
            Self::InReview => "in-review",
            Self::Approved => "approved",
            Self::Done => "done",
        }
    }

    /// Returns the human-readable column label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::Drafting => "Drafting",
            Self::InReview => "In Review",
            Self::Approved => "Approved",
            Self::Done => "Done",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" | "incomplete" => Ok(Self::Todo),
            "drafting" | "draft" => Ok(Self::Drafting),
            "in-review" | "in_review" | "review" => Ok(Self::InReview),
            "approved" => Ok(Self::Approved),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = ParseTaskStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit of work tracked by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    priority: Priority,
    due_date: NaiveDate,
    #[serde(default)]
    status: TaskStatus,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a task record from a draft under the given identifier.
    ///
    /// The status defaults to [`TaskStatus::Todo`] when the draft leaves it
    /// unset.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn create(id: TaskId, draft: NewTask, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let title = non_empty_title(&draft.title)?;

        Ok(Self {
            id,
            title,
            description: draft.description,
            priority: draft.priority,
            due_date: draft.due_date,
            status: draft.status.unwrap_or_default(),
            created_at: clock.utc(),
            updated_at: None,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the latest update, if any.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Merges the provided fields over this record and refreshes
    /// `updated_at`. The identifier and creation timestamp never change.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the patch carries a
    /// blank title. The record is left untouched in that case.
    pub fn apply(&mut self, patch: TaskPatch, clock: &impl Clock) -> Result<(), TaskDomainError> {
        let title = patch.title.as_deref().map(non_empty_title).transpose()?;

        if let Some(value) = title {
            self.title = value;
        }
        if let Some(value) = patch.description {
            self.description = value;
        }
        if let Some(value) = patch.priority {
            self.priority = value;
        }
        if let Some(value) = patch.due_date {
            self.due_date = value;
        }
        if let Some(value) = patch.status {
            self.status = value;
        }
        self.touch(clock);
        Ok(())
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = Some(clock.utc());
    }
}

fn non_empty_title(raw: &str) -> Result<String, TaskDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    Ok(trimmed.to_owned())
}
