//! Task fixtures for client tests.

use crate::task::domain::{NewTask, Priority, Task, TaskId, TaskStatus};
use crate::task::tests::support::ManualClock;
use chrono::NaiveDate;

pub fn task(id: &str, title: &str) -> Task {
    task_with(id, title, "details", Priority::Medium, TaskStatus::Todo)
}

pub fn task_with(
    id: &str,
    title: &str,
    description: &str,
    priority: Priority,
    status: TaskStatus,
) -> Task {
    let due = NaiveDate::from_ymd_opt(2030, 3, 1).expect("valid calendar date");
    Task::create(
        TaskId::new(id),
        NewTask::new(title, description, priority, due).with_status(status),
        &ManualClock::new(),
    )
    .expect("valid task")
}

pub fn draft(title: &str) -> NewTask {
    let due = NaiveDate::from_ymd_opt(2030, 3, 1).expect("valid calendar date");
    NewTask::new(title, "details", Priority::High, due)
}
