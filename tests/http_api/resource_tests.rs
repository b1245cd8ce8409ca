//! Happy-path tests for the task resources.

use super::helpers::{app, seeded_app, send, write_spec};
use axum::{
    Router,
    http::{Method, StatusCode},
};
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[tokio::test]
async fn empty_store_lists_nothing(app: Router) -> Result<(), eyre::Report> {
    let (status, body) = send(&app, Method::GET, "/tasks", None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn seeded_store_lists_demo_tasks_in_order() -> Result<(), eyre::Report> {
    let app = seeded_app().await?;

    let (status, body) = send(&app, Method::GET, "/tasks", None).await?;

    assert_eq!(status, StatusCode::OK);
    let tasks = body.as_array().ok_or_else(|| eyre::eyre!("expected array"))?;
    let ids: Vec<&Value> = tasks.iter().map(|task| &task["id"]).collect();
    assert_eq!(ids, vec![&json!("1"), &json!("2")]);
    assert_eq!(tasks.first().map(|task| &task["status"]), Some(&json!("drafting")));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn create_assigns_id_and_default_status(app: Router) -> Result<(), eyre::Report> {
    let (status, created) = send(&app, Method::POST, "/tasks", Some(write_spec())).await?;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["title"], "Write spec");
    assert_eq!(created["priority"], "High");
    assert_eq!(created["dueDate"], "2030-01-01");
    assert_eq!(created["status"], "todo");
    assert!(created["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(created["createdAt"].is_string());
    assert!(created.get("updatedAt").is_none());

    let (_, listed) = send(&app, Method::GET, "/tasks", None).await?;
    assert_eq!(listed, json!([created]));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn create_ignores_client_supplied_id(app: Router) -> Result<(), eyre::Report> {
    let mut payload = write_spec();
    payload["id"] = json!("chosen-by-client");

    let (status, created) = send(&app, Method::POST, "/tasks", Some(payload)).await?;

    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(created["id"], "chosen-by-client");
    Ok(())
}

#[rstest]
#[tokio::test]
async fn get_returns_single_task() -> Result<(), eyre::Report> {
    let app = seeded_app().await?;

    let (status, task) = send(&app, Method::GET, "/tasks/2", None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(task["title"], "Review Code Changes");
    Ok(())
}

#[rstest]
#[tokio::test]
async fn update_merges_fields_and_keeps_id() -> Result<(), eyre::Report> {
    let app = seeded_app().await?;

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/tasks/1",
        Some(json!({ "status": "in-review", "id": "ignored" })),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], "1");
    assert_eq!(updated["status"], "in-review");
    assert_eq!(updated["title"], "Complete Project Proposal");
    assert!(updated["updatedAt"].is_string());

    let (_, fetched) = send(&app, Method::GET, "/tasks/1", None).await?;
    assert_eq!(fetched, updated);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn update_accepts_legacy_status_labels() -> Result<(), eyre::Report> {
    let app = seeded_app().await?;

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/tasks/2",
        Some(json!({ "status": "incomplete" })),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "todo");
    Ok(())
}

#[rstest]
#[tokio::test]
async fn delete_confirms_and_removes() -> Result<(), eyre::Report> {
    let app = seeded_app().await?;

    let (status, body) = send(&app, Method::DELETE, "/tasks/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Task deleted successfully" }));

    let (_, listed) = send(&app, Method::GET, "/tasks", None).await?;
    let remaining: Vec<&Value> = listed
        .as_array()
        .map(|tasks| tasks.iter().map(|task| &task["id"]).collect())
        .unwrap_or_default();
    assert_eq!(remaining, vec![&json!("2")]);
    Ok(())
}
