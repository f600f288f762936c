// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mergington Activities API Server

use anyhow::Context;
use mergington_activities::{config::Config, services::ActivityRegistry, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(port = config.port, "Starting Mergington Activities API");

    let registry = match &config.activities_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading activity catalog");
            ActivityRegistry::load_from_file(path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?
        }
        None => {
            tracing::info!("Loading embedded activity catalog");
            ActivityRegistry::default_catalog().context("Failed to load embedded catalog")?
        }
    };
    tracing::info!(count = registry.len(), "Activity catalog loaded");

    let addr = config.bind_addr();
    let state = Arc::new(AppState { registry });
    let app = mergington_activities::routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mergington_activities=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .try_init()?;
    Ok(())
}
