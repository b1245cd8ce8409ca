//! Rejection tests for the task resources.

use super::helpers::{app, seeded_app, send, send_request, write_spec};
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Method::GET)]
#[case(Method::DELETE)]
#[tokio::test]
async fn missing_task_is_not_found(app: Router, #[case] method: Method) -> Result<(), eyre::Report> {
    let (status, body) = send(&app, method, "/tasks/absent", None).await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Task not found" }));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn update_of_missing_task_is_not_found(app: Router) -> Result<(), eyre::Report> {
    let (status, body) = send(
        &app,
        Method::PUT,
        "/tasks/nonexistent",
        Some(json!({ "title": "x" })),
    )
    .await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Task not found" }));
    Ok(())
}

#[rstest]
#[case::no_body(None)]
#[case::unknown_priority(Some(r#"{"priority":"Urgent"}"#))]
#[case::wrong_field_type(Some(r#"{"title":5}"#))]
#[tokio::test]
async fn update_of_missing_task_is_not_found_whatever_the_body(
    app: Router,
    #[case] body: Option<&str>,
) -> Result<(), eyre::Report> {
    let builder = Request::builder().method(Method::PUT).uri("/tasks/missing-id");
    let request = match body {
        Some(raw) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(raw.to_owned()))?,
        None => builder.body(Body::empty())?,
    };

    let (status, response) = send_request(&app, request).await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response, json!({ "message": "Task not found" }));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn bad_update_body_for_existing_task_is_bad_request() -> Result<(), eyre::Report> {
    let app = seeded_app().await?;
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/tasks/1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"priority":"Urgent"}"#))?;

    let (status, body) = send_request(&app, request).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["message"]
            .as_str()
            .is_some_and(|message| message.starts_with("Invalid task payload"))
    );
    Ok(())
}

#[rstest]
#[case(Method::PATCH, "/tasks")]
#[case(Method::DELETE, "/tasks")]
#[case(Method::POST, "/tasks/1")]
#[case(Method::PATCH, "/tasks/1")]
#[tokio::test]
async fn unsupported_methods_are_rejected(
    app: Router,
    #[case] method: Method,
    #[case] uri: &str,
) -> Result<(), eyre::Report> {
    let (status, body) = send(&app, method, uri, None).await?;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({ "message": "Method not allowed" }));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn unknown_path_is_not_found(app: Router) -> Result<(), eyre::Report> {
    let (status, body) = send(&app, Method::GET, "/projects", None).await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Not found" }));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn malformed_json_is_bad_request(app: Router) -> Result<(), eyre::Report> {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/tasks")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))?;

    let (status, body) = send_request(&app, request).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["message"]
            .as_str()
            .is_some_and(|message| message.starts_with("Invalid task payload"))
    );
    Ok(())
}

#[rstest]
#[tokio::test]
async fn missing_fields_are_bad_request(app: Router) -> Result<(), eyre::Report> {
    let (status, _) = send(&app, Method::POST, "/tasks", Some(json!({ "title": "x" }))).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn blank_title_is_bad_request(app: Router) -> Result<(), eyre::Report> {
    let mut payload = write_spec();
    payload["title"] = json!("   ");

    let (status, _) = send(&app, Method::POST, "/tasks", Some(payload)).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, listed) = send(&app, Method::GET, "/tasks", None).await?;
    assert_eq!(listed, json!([]));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn blank_title_update_leaves_task_unchanged() -> Result<(), eyre::Report> {
    let app = seeded_app().await?;

    let (status, _) = send(&app, Method::PUT, "/tasks/1", Some(json!({ "title": "" }))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, task) = send(&app, Method::GET, "/tasks/1", None).await?;
    assert_eq!(task["title"], "Complete Project Proposal");
    Ok(())
}
