// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mergington High School activities: an HTTP API for browsing
//! extracurricular activities and managing student signups.
//!
//! State lives in memory for the life of the process.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use services::ActivityRegistry;

/// Shared application state.
pub struct AppState {
    pub registry: ActivityRegistry,
}
