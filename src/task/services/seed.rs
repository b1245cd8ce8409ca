//! Demo tasks loaded into a fresh store.

use crate::task::domain::{NewTask, Priority, TaskStatus};
use chrono::NaiveDate;

/// Returns the demo tasks a new server starts with.
///
/// The records keep the short numeric identifiers `1` and `2`.
#[must_use]
pub fn default_tasks() -> Vec<NewTask> {
    let drafts = [
        (
            "1",
            "Complete Project Proposal",
            "Write and finalize the project proposal for Q1",
            Priority::High,
            NaiveDate::from_ymd_opt(2025, 8, 15),
        ),
        (
            "2",
            "Review Code Changes",
            "Review pull requests from team members",
            Priority::Medium,
            NaiveDate::from_ymd_opt(2025, 8, 10),
        ),
    ];

    drafts
        .into_iter()
        .filter_map(|(id, title, description, priority, due_date)| {
            due_date.map(|date| {
                NewTask::new(title, description, priority, date)
                    .with_status(TaskStatus::Drafting)
                    .with_id(id)
            })
        })
        .collect()
}
