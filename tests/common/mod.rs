// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{Method, Request},
    response::Response,
};
use mergington_activities::routes::create_router;
use mergington_activities::services::ActivityRegistry;
use mergington_activities::AppState;
use std::sync::Arc;
use tower::ServiceExt;

#[allow(dead_code)]
pub const CHESS_CLUB: &str = "Chess Club";
#[allow(dead_code)]
pub const MICHAEL: &str = "michael@mergington.edu";

/// Small fixed catalog so tests don't depend on the shipped data file.
const TEST_CATALOG: &str = r#"[
    {
        "name": "Chess Club",
        "description": "Learn strategies and compete in chess tournaments",
        "schedule": "Fridays, 3:30 PM - 5:00 PM",
        "max_participants": 12,
        "participants": ["michael@mergington.edu"]
    },
    {
        "name": "Programming Class",
        "description": "Learn programming fundamentals and build software projects",
        "schedule": "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        "max_participants": 20,
        "participants": ["emma@mergington.edu", "sophia@mergington.edu"]
    }
]"#;

/// Registry seeded with the test catalog.
#[allow(dead_code)]
pub fn test_registry() -> ActivityRegistry {
    ActivityRegistry::load_from_json(TEST_CATALOG).expect("Failed to load test catalog")
}

/// Create a test app backed by a fresh test catalog.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        registry: test_registry(),
    });

    (create_router(state.clone()), state)
}

/// URI for a signup/unregister call with both parts percent-encoded.
#[allow(dead_code)]
pub fn roster_uri(activity: &str, action: &str, email: &str) -> String {
    format!(
        "/activities/{}/{}?email={}",
        urlencoding::encode(activity),
        action,
        urlencoding::encode(email)
    )
}

/// Send a bodiless request through the router.
#[allow(dead_code)]
pub async fn send(app: &axum::Router, method: Method, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn json_body(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).expect("Response body should be JSON")
}
