//! End-to-end tests for the full mycommunityd stack.
//!
//! Each test wires the real JSON file registry (in a temporary directory),
//! the real service and the real axum router, and exercises the HTTP layer
//! via `tower::ServiceExt::oneshot` — no TCP port is bound.

use std::path::Path;

use axum::body::Body;
use axum::http::{HeaderValue, Request, StatusCode};
use chrono::Days;
use http_body_util::BodyExt;
use mycommunity_adapter_http_axum::router;
use mycommunity_adapter_http_axum::state::AppState;
use mycommunity_adapter_storage_json::Config;
use mycommunity_app::services::event_service::EventService;
use mycommunity_domain::time;
use tower::ServiceExt;

/// Build a fully-wired router backed by the event document at `path`.
async fn app(path: &Path) -> axum::Router {
    let registry = Config {
        path: path.to_path_buf(),
    }
    .build()
    .await
    .expect("storage should initialise");

    router::build(
        AppState::new(EventService::new(registry)),
        HeaderValue::from_static("http://localhost:5173"),
    )
}

fn tomorrow() -> String {
    time::today()
        .checked_add_days(Days::new(1))
        .unwrap()
        .format("%Y-%m-%d")
        .to_string()
}

fn taller() -> serde_json::Value {
    serde_json::json!({
        "name": "Taller",
        "description": "Reciclaje en barrio!",
        "date": tomorrow(),
        "time": "18:00",
        "location": "Centro X",
        "address": "Calle 1",
        "organizer": "Grupo",
        "contactEmail": "a@b.com",
        "contactPhone": "+12345678",
        "category": "social",
        "capacity": "50"
    })
}

fn post(body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/registros")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get() -> Request<Body> {
    Request::builder()
        .uri("/registros")
        .body(Body::empty())
        .unwrap()
}

async fn json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_empty_registry_before_any_submission() {
    let dir = tempfile::tempdir().unwrap();
    let resp = app(&dir.path().join("events.json")).await.oneshot(get()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json(resp).await, serde_json::json!([]));
}

#[tokio::test]
async fn should_return_500_when_document_is_corrupted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json");
    std::fs::write(&path, "[{\"name\": ").unwrap();

    let resp = app(&path).await.oneshot(get()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json(resp).await["message"],
        "Failed to process stored event data."
    );
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_accept_boundary_submission_and_persist_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json");
    let app = app(&path).await;

    let resp = app.clone().oneshot(post(&taller())).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json(resp).await["message"], "Event registered successfully.");

    let resp = app.oneshot(get()).await.unwrap();
    let listed = json(resp).await;
    assert_eq!(
        listed,
        serde_json::json!([{
            "name": "Taller",
            "description": "Reciclaje en barrio!",
            "date": tomorrow(),
            "time": "18:00",
            "location": "Centro X",
            "address": "Calle 1",
            "organizer": "Grupo",
            "contactEmail": "a@b.com",
            "contactPhone": "+12345678",
            "category": "social",
            "capacity": 50,
            "free": false,
            "featured": false
        }])
    );

    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk, listed);
}

#[tokio::test]
async fn should_reject_hour_twenty_five_and_store_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json");
    let app = app(&path).await;

    let mut body = taller();
    body["time"] = "25:00".into();
    let resp = app.clone().oneshot(post(&body)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let errors = json(resp).await["errors"].clone();
    assert_eq!(
        errors,
        serde_json::json!([{ "field": "time", "message": "invalid time format (HH:MM)" }])
    );
    assert!(!path.exists());

    let resp = app.oneshot(get()).await.unwrap();
    assert_eq!(json(resp).await, serde_json::json!([]));
}

#[tokio::test]
async fn should_report_all_violations_together() {
    let dir = tempfile::tempdir().unwrap();
    let mut body = taller();
    body["name"] = "abc".into();
    body["description"] = "0123456789".into();
    body["contactEmail"] = "nope".into();

    let resp = app(&dir.path().join("events.json"))
        .await
        .oneshot(post(&body))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let errors = json(resp).await["errors"].as_array().unwrap().len();
    assert!(errors >= 3);
}

#[tokio::test]
async fn should_reject_date_in_the_past() {
    let dir = tempfile::tempdir().unwrap();
    let mut body = taller();
    body["date"] = "2001-01-01".into();

    let resp = app(&dir.path().join("events.json"))
        .await
        .oneshot(post(&body))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json(resp).await["errors"][0]["field"], "date");
}

#[tokio::test]
async fn should_not_overwrite_corrupted_document_on_submit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json");
    std::fs::write(&path, "not json at all").unwrap();

    let resp = app(&path).await.oneshot(post(&taller())).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "not json at all");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn should_keep_every_concurrent_submission() {
    const N: usize = 25;

    let dir = tempfile::tempdir().unwrap();
    let app = app(&dir.path().join("events.json")).await;

    let handles: Vec<_> = (0..N)
        .map(|i| {
            let app = app.clone();
            let mut body = taller();
            body["name"] = format!("Taller numero {i}").into();
            tokio::spawn(async move { app.oneshot(post(&body)).await.unwrap().status() })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }

    let listed = json(app.oneshot(get()).await.unwrap()).await;
    let mut names: Vec<String> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names.len(), N);
    names.sort();
    names.dedup();
    assert_eq!(names.len(), N);
}
