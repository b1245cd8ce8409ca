//! Command-line client for a running Taskboard server.
//!
//! ```text
//! taskctl [--server URL] [--timeout-secs N] list [--query TEXT] [--priority P]
//! taskctl add --title T --description D --priority P --due YYYY-MM-DD [--status S]
//! taskctl update ID [--title T] [--description D] [--priority P] [--due DATE] [--status S]
//! taskctl delete ID
//! ```

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use eyre::WrapErr;
use mockable::DefaultClock;
use std::io::{self, Write};
use std::sync::Arc;
use taskboard::client::{
    ClientState, TaskFilter, TaskForm, adapters::HttpTaskApi, services::TaskClient,
};
use taskboard::config::ClientConfig;
use taskboard::task::domain::{Priority, Task, TaskId, TaskPatch, TaskStatus};
use taskboard::telemetry;

#[derive(Debug, Parser)]
#[command(name = "taskctl")]
#[command(version, about = "Manage tasks on a Taskboard server", long_about = None)]
struct Cli {
    #[command(flatten)]
    client: ClientConfig,

    /// Log filter
    #[arg(long, env = "TASKBOARD_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show tasks grouped by status
    List {
        /// Only tasks whose title or description contains this text
        #[arg(long)]
        query: Option<String>,
        /// Only tasks of this priority
        #[arg(long)]
        priority: Option<Priority>,
    },
    /// Create a task
    Add {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        priority: Option<Priority>,
        /// Due date as YYYY-MM-DD
        #[arg(long = "due")]
        due_date: Option<NaiveDate>,
        #[arg(long)]
        status: Option<TaskStatus>,
    },
    /// Change fields of a task
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<Priority>,
        #[arg(long = "due")]
        due_date: Option<NaiveDate>,
        #[arg(long)]
        status: Option<TaskStatus>,
    },
    /// Delete a task
    Delete { id: String },
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level).wrap_err("failed to install log subscriber")?;

    let api = HttpTaskApi::new(&cli.client).wrap_err("failed to build HTTP client")?;
    let client = TaskClient::new(Arc::new(api));
    let mut out = io::stdout().lock();

    match cli.command {
        Command::List { query, priority } => {
            client.fetch().await.wrap_err("failed to fetch tasks")?;
            let mut filter = TaskFilter::new();
            if let Some(text) = query {
                filter = filter.with_query(text);
            }
            if let Some(level) = priority {
                filter = filter.with_priority(level);
            }
            print_board(&mut out, &client.snapshot(), &filter)?;
        }
        Command::Add {
            title,
            description,
            priority,
            due_date,
            status,
        } => {
            let form = TaskForm {
                title,
                description,
                priority,
                due_date,
                status,
            };
            let draft = form.validate(&DefaultClock)?;
            let task = client.add(draft).await.wrap_err("failed to add task")?;
            writeln!(out, "created {}", describe(&task))?;
        }
        Command::Update {
            id,
            title,
            description,
            priority,
            due_date,
            status,
        } => {
            let patch = patch_from(title, description, priority, due_date, status);
            if patch.is_empty() {
                eyre::bail!("nothing to update; pass at least one field");
            }
            client.fetch().await.wrap_err("failed to fetch tasks")?;
            let outcome = client
                .update(&TaskId::new(id), patch)
                .await
                .wrap_err("failed to update task")?;
            writeln!(out, "updated {}", describe(outcome.task()))?;
        }
        Command::Delete { id } => {
            let id = TaskId::new(id);
            client.delete(&id).await.wrap_err("failed to delete task")?;
            writeln!(out, "deleted {id}")?;
        }
    }
    Ok(())
}

fn patch_from(
    title: Option<String>,
    description: Option<String>,
    priority: Option<Priority>,
    due_date: Option<NaiveDate>,
    status: Option<TaskStatus>,
) -> TaskPatch {
    let mut patch = TaskPatch::new();
    if let Some(value) = title {
        patch = patch.with_title(value);
    }
    if let Some(value) = description {
        patch = patch.with_description(value);
    }
    if let Some(value) = priority {
        patch = patch.with_priority(value);
    }
    if let Some(value) = due_date {
        patch = patch.with_due_date(value);
    }
    if let Some(value) = status {
        patch = patch.with_status(value);
    }
    patch
}

fn describe(task: &Task) -> String {
    format!(
        "[{}] {} ({}, due {})",
        task.id(),
        task.title(),
        task.priority(),
        task.due_date()
    )
}

fn print_board(out: &mut impl Write, state: &ClientState, filter: &TaskFilter) -> io::Result<()> {
    for column in state.board(filter) {
        writeln!(out, "{} ({})", column.status.label(), column.tasks.len())?;
        for task in column.tasks {
            writeln!(out, "  {}", describe(task))?;
        }
    }
    Ok(())
}
