// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava Activity Updater server
//!
//! Serves the `update-activity` tool over HTTP. The Strava access token is
//! read from `STRAVA_ACCESS_TOKEN` on every call.

use std::sync::Arc;
use strava_activity_updater::{
    config::Config,
    services::{EnvCredentials, StravaClient},
    tools::UpdateActivityHandler,
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = Config::from_env()?;
    tracing::info!(
        port = config.port,
        api_url = %config.strava_api_url,
        "Starting Strava Activity Updater"
    );

    let client = StravaClient::from_config(&config)?;
    let update_activity =
        UpdateActivityHandler::new(Arc::new(client), Arc::new(EnvCredentials::default()));

    let state = Arc::new(AppState {
        config: config.clone(),
        update_activity,
    });

    let app = strava_activity_updater::routes::create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("strava_activity_updater=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}
