// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity updater: a tool handler that applies partial updates
//! to a single Strava activity and reports the result as readable text.
//!
//! The handler can be driven directly (see [`tools::UpdateActivityHandler`])
//! or over HTTP through the router in [`routes`].

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;
pub mod tools;

use config::Config;
use tools::UpdateActivityHandler;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub update_activity: UpdateActivityHandler,
}
