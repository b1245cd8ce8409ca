//! Client-side validation of task form input.
//!
//! Checks run before any intent is dispatched; a form that fails them never
//! reaches the server.

use crate::task::domain::{NewTask, Priority, TaskPatch, TaskStatus};
use chrono::NaiveDate;
use mockable::Clock;
use std::fmt;
use thiserror::Error;

/// A form field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// The task name.
    Title,
    /// The description.
    Description,
    /// The priority.
    Priority,
    /// The due date.
    DueDate,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Priority => "priority",
            Self::DueDate => "dueDate",
        })
    }
}

/// One failed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Offending field.
    pub field: FormField,
    /// Message for the user.
    pub message: &'static str,
}

/// Every failed check of a form, in field order.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{}", render(.0))]
pub struct ValidationError(pub Vec<FieldError>);

impl ValidationError {
    /// Returns the message for `field`, if that field failed.
    #[must_use]
    pub fn message_for(&self, field: FormField) -> Option<&'static str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }
}

fn render(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|error| error.message)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Raw values collected by an add or edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    /// Task name.
    pub title: String,
    /// Description.
    pub description: String,
    /// Selected priority.
    pub priority: Option<Priority>,
    /// Selected due date.
    pub due_date: Option<NaiveDate>,
    /// Selected status; the server default applies when unset.
    pub status: Option<TaskStatus>,
}

impl TaskForm {
    /// Checks the form and produces a creation payload.
    ///
    /// The due date may be today or later, judged on the local calendar of
    /// `clock`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every failed field.
    pub fn validate(&self, clock: &impl Clock) -> Result<NewTask, ValidationError> {
        let mut errors = Vec::new();
        let mut fail = |field, message| errors.push(FieldError { field, message });

        if self.title.trim().is_empty() {
            fail(FormField::Title, "Task name is required");
        }
        if self.priority.is_none() {
            fail(FormField::Priority, "Priority is required");
        }
        match self.due_date {
            None => fail(FormField::DueDate, "Due date is required"),
            Some(date) if date < clock.local().date_naive() => {
                fail(FormField::DueDate, "Due date cannot be in the past");
            }
            Some(_) => {}
        }
        if self.description.trim().is_empty() {
            fail(FormField::Description, "Description is required");
        }

        match (self.priority, self.due_date) {
            (Some(priority), Some(due_date)) if errors.is_empty() => {
                let draft = NewTask::new(self.title.trim(), &self.description, priority, due_date);
                Ok(match self.status {
                    Some(status) => draft.with_status(status),
                    None => draft,
                })
            }
            _ => Err(ValidationError(errors)),
        }
    }

    /// Checks the form and produces an update payload covering every field.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every failed field.
    pub fn validate_edit(&self, clock: &impl Clock) -> Result<TaskPatch, ValidationError> {
        self.validate(clock).map(TaskPatch::from)
    }
}
