//! Integration tests for the guide HTTP endpoints.
//!
//! These tests drive the full router end to end:
//! 1. A complete questionnaire walk through the network engineering path
//! 2. The not-applicable path and its empty final view
//! 3. Bundle assembly, including the any-fails-all-fails join

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use portal_guide::adapters::http::{guide_router, GuideAppState};
use portal_guide::adapters::storage::{InMemorySessionStore, LocalModuleStore};
use portal_guide::domain::graph::captive_portal_graph;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Builds the app with module files for modules 0, 2, and 4.
fn build_app() -> (Router, TempDir) {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("Module0.md"), "setup").unwrap();
    std::fs::write(temp.path().join("Module2.md"), "switches").unwrap();
    std::fs::write(temp.path().join("Module4.md"), "web").unwrap();

    let state = GuideAppState::new(
        Arc::new(InMemorySessionStore::new()),
        Arc::new(LocalModuleStore::new(temp.path())),
        Arc::new(captive_portal_graph()),
    );
    (guide_router().with_state(state), temp)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn send_raw(app: &Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, disposition, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn answer(app: &Router, session_id: &str, answer: &str) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        &format!("/api/sessions/{}/answer", session_id),
        Some(json!({ "answer": answer })),
    )
    .await
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn full_walk_recommends_modules_zero_two_and_four() {
    let (app, _temp) = build_app();

    // Start: first question is the start node.
    let (status, body) = send(&app, "POST", "/api/sessions", None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["state"], "question");
    assert_eq!(body["key"], "start");
    let session_id = body["session_id"].as_str().unwrap().to_string();

    // yes at start, no at tcp (queues int_dns), yes at switch.
    let (_, body) = answer(&app, &session_id, "yes").await;
    assert_eq!(body["key"], "tcp");
    let (_, body) = answer(&app, &session_id, "no").await;
    assert_eq!(body["key"], "switch");
    let (_, body) = answer(&app, &session_id, "yes").await;
    // module 2 recorded, queued int_dns presented next.
    assert_eq!(body["key"], "int_dns");

    // no at int_dns falls through its default to int_web; yes records module 4.
    let (_, body) = answer(&app, &session_id, "no").await;
    assert_eq!(body["key"], "int_web");
    let (status, body) = answer(&app, &session_id, "yes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "finished");

    let numbers: Vec<u64> = body["recommendations"]["modules"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["number"].as_u64().unwrap())
        .collect();
    assert_eq!(numbers, vec![0, 2, 4]);

    // The standalone recommendations endpoint shows the same view.
    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/sessions/{}/recommendations", session_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["applicable"], true);
    assert_eq!(body["bundle"], "Captive Protal Guidelines.md");
    assert_eq!(body["modules"][1]["detail"], "Module 2: Switch Implementation");
    assert_eq!(body["modules"][2]["resource"], "Module4.md");

    // Bundle: texts joined in order with single newlines, typo'd file name.
    let (status, disposition, content) =
        send_raw(&app, &format!("/api/sessions/{}/bundle", session_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        disposition.as_deref(),
        Some("attachment; filename=\"Captive Protal Guidelines.md\"")
    );
    assert_eq!(content, "setup\nswitches\nweb");

    // Answering after the final view is a conflict.
    let (status, _) = answer(&app, &session_id, "yes").await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn all_no_walk_ends_not_applicable_without_download() {
    let (app, _temp) = build_app();

    let (_, body) = send(&app, "POST", "/api/sessions", None).await;
    let session_id = body["session_id"].as_str().unwrap().to_string();

    // no all the way: start -> exper_dns -> exper_web (twice, via its
    // queued default) -> finished with only the seed.
    let mut last = Value::Null;
    for _ in 0..4 {
        let (_, body) = answer(&app, &session_id, "no").await;
        last = body;
    }
    assert_eq!(last["state"], "finished");
    assert_eq!(last["recommendations"]["applicable"], false);
    assert_eq!(
        last["recommendations"]["message"],
        "Unfortunately, this tutorial is not for you at the moment"
    );
    assert!(last["recommendations"]["bundle"].is_null());

    // Nothing to download.
    let (status, _, _) =
        send_raw(&app, &format!("/api/sessions/{}/bundle", session_id)).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn recommendations_before_finish_are_a_conflict() {
    let (app, _temp) = build_app();

    let (_, body) = send(&app, "POST", "/api/sessions", None).await;
    let session_id = body["session_id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/sessions/{}/recommendations", session_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");
}

#[tokio::test]
async fn bundle_fails_whole_when_any_module_file_is_missing() {
    let (app, temp) = build_app();

    // Walk to a finished session recommending [0, 2, 4], then remove one file.
    let (_, body) = send(&app, "POST", "/api/sessions", None).await;
    let session_id = body["session_id"].as_str().unwrap().to_string();
    for a in ["yes", "no", "yes", "no", "yes"] {
        answer(&app, &session_id, a).await;
    }
    std::fs::remove_file(temp.path().join("Module2.md")).unwrap();

    let (status, _, content) =
        send_raw(&app, &format!("/api/sessions/{}/bundle", session_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    // No partial bundle in the error body.
    assert!(!content.contains("setup"));
}

#[tokio::test]
async fn reset_returns_session_to_the_first_question() {
    let (app, _temp) = build_app();

    let (_, body) = send(&app, "POST", "/api/sessions", None).await;
    let session_id = body["session_id"].as_str().unwrap().to_string();
    answer(&app, &session_id, "yes").await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/sessions/{}/reset", session_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["key"], "start");

    // Current state reflects the reset.
    let (_, body) = send(&app, "GET", &format!("/api/sessions/{}", session_id), None).await;
    assert_eq!(body["key"], "start");
}

#[tokio::test]
async fn single_module_download_names_the_resource() {
    let (app, _temp) = build_app();

    let (status, disposition, content) = send_raw(&app, "/api/modules/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(disposition.as_deref(), Some("attachment; filename=\"Module4.md\""));
    assert_eq!(content, "web");
}

#[tokio::test]
async fn missing_module_download_is_a_404() {
    let (app, _temp) = build_app();

    let (status, _, _) = send_raw(&app, "/api/modules/9").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
