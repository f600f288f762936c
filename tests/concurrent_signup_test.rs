// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Roster mutations from many tasks at once must keep emails unique.

use axum::http::{Method, StatusCode};
use futures_util::future::join_all;
use mergington_activities::services::RegistryError;
use std::sync::Arc;

mod common;
use common::{create_test_app, roster_uri, send, test_registry, CHESS_CLUB, MICHAEL};

const NUM_CONCURRENT_REQUESTS: usize = 64;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicate_joins_only_one_succeeds() {
    let registry = Arc::new(test_registry());

    let handles = (0..NUM_CONCURRENT_REQUESTS).map(|_| {
        let registry = registry.clone();
        tokio::spawn(async move { registry.join(CHESS_CLUB, "race@mergington.edu") })
    });

    let results: Vec<_> = join_all(handles)
        .await
        .into_iter()
        .map(|r| r.expect("Task join failed"))
        .collect();

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one join should win");
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| matches!(e, RegistryError::AlreadySignedUp { .. })));

    let roster = registry.get(CHESS_CLUB).unwrap().participants;
    assert_eq!(roster, vec![MICHAEL, "race@mergington.edu"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_distinct_signups_are_all_kept() {
    let (app, state) = create_test_app();

    let requests = (0..NUM_CONCURRENT_REQUESTS).map(|i| {
        let app = app.clone();
        async move {
            let email = format!("student{}@mergington.edu", i);
            send(&app, Method::POST, &roster_uri(CHESS_CLUB, "signup", &email))
                .await
                .status()
        }
    });

    let statuses = join_all(requests).await;
    assert!(statuses.iter().all(|s| *s == StatusCode::OK));

    let roster = state.registry.get(CHESS_CLUB).unwrap().participants;
    assert_eq!(roster.len(), NUM_CONCURRENT_REQUESTS + 1);
    assert_eq!(roster[0], MICHAEL);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicate_unregisters_only_one_succeeds() {
    let registry = Arc::new(test_registry());

    let handles = (0..NUM_CONCURRENT_REQUESTS).map(|_| {
        let registry = registry.clone();
        tokio::spawn(async move { registry.leave(CHESS_CLUB, MICHAEL) })
    });

    let successes = join_all(handles)
        .await
        .into_iter()
        .map(|r| r.expect("Task join failed"))
        .filter(|r| r.is_ok())
        .count();

    assert_eq!(successes, 1);
    assert!(registry.get(CHESS_CLUB).unwrap().participants.is_empty());
}
