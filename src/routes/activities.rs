// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity listing, signup and unregister routes.

use crate::error::{AppError, Result};
use crate::models::{ActivityCatalog, MessageResponse};
use crate::AppState;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/{name}/signup", post(signup))
        .route("/activities/{name}/unregister", delete(unregister))
}

/// `?email=` query shared by signup and unregister.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    /// Opaque identifier; only its presence is required
    pub email: String,
}

/// Extract the email, mapping a missing parameter to our `{detail}` error body.
fn require_email(query: std::result::Result<Query<EmailQuery>, QueryRejection>) -> Result<String> {
    let Query(query) = query.map_err(|rejection| {
        AppError::BadRequest(format!(
            "Invalid email parameter: {}",
            rejection.body_text()
        ))
    })?;

    Ok(query.email)
}

/// List every activity with its current roster.
async fn list_activities(State(state): State<Arc<AppState>>) -> Json<ActivityCatalog> {
    Json(state.registry.list())
}

/// Sign a student up for an activity.
async fn signup(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    query: std::result::Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>> {
    let email = require_email(query)?;
    let message = state.registry.join(&name, &email)?;
    Ok(Json(MessageResponse { message }))
}

/// Remove a student from an activity.
async fn unregister(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    query: std::result::Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>> {
    let email = require_email(query)?;
    let message = state.registry.leave(&name, &email)?;
    Ok(Json(MessageResponse { message }))
}
