// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use strava_activity_updater::config::Config;
use strava_activity_updater::error::AppError;
use strava_activity_updater::models::{StravaActivity, UpdatableActivity};
use strava_activity_updater::routes::create_router;
use strava_activity_updater::services::{ActivityUpdater, StaticCredentials};
use strava_activity_updater::tools::UpdateActivityHandler;
use strava_activity_updater::AppState;

/// One recorded call to the mock updater.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub access_token: String,
    pub activity_id: u64,
    pub payload: Value,
}

/// Updater double that records every call and answers with a fixed outcome.
pub struct MockUpdater {
    outcome: Box<dyn Fn(u64) -> Result<StravaActivity, AppError> + Send + Sync>,
    calls: Mutex<Vec<RecordedCall>>,
}

#[allow(dead_code)]
impl MockUpdater {
    pub fn returning(activity: StravaActivity) -> Arc<Self> {
        Arc::new(Self {
            outcome: Box::new(move |_| Ok(activity.clone())),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &'static str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Box::new(move |_| Err(AppError::StravaApi(message.to_string()))),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn not_found() -> Arc<Self> {
        Arc::new(Self {
            outcome: Box::new(|id| Err(AppError::NotFound(format!("Activity {}", id)))),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ActivityUpdater for MockUpdater {
    async fn update_activity(
        &self,
        access_token: &str,
        activity_id: u64,
        update: &UpdatableActivity,
    ) -> Result<StravaActivity, AppError> {
        self.calls.lock().unwrap().push(RecordedCall {
            access_token: access_token.to_string(),
            activity_id,
            payload: serde_json::to_value(update).unwrap(),
        });
        (self.outcome)(activity_id)
    }
}

/// Activity as Strava would return it after an update.
#[allow(dead_code)]
pub fn sample_activity(id: u64, name: &str) -> StravaActivity {
    StravaActivity {
        id,
        name: name.to_string(),
        activity_type: Some("Ride".to_string()),
        sport_type: Some("Ride".to_string()),
        start_date_local: Some("2024-03-09T08:15:00Z".to_string()),
        distance: Some(42_195.0),
        total_elevation_gain: Some(350.4),
        description: Some("Updated description".to_string()),
        private: true,
        commute: false,
        gear_id: Some("bike-123".to_string()),
    }
}

/// Handler wired to the mock updater and a fixed token (or none).
#[allow(dead_code)]
pub fn handler_with(updater: Arc<MockUpdater>, token: Option<&str>) -> UpdateActivityHandler {
    let credentials = match token {
        Some(t) => StaticCredentials::new(t),
        None => StaticCredentials::none(),
    };
    UpdateActivityHandler::new(updater, Arc::new(credentials))
}

/// Create a test app backed by the mock updater.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(
    updater: Arc<MockUpdater>,
    token: Option<&str>,
) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        update_activity: handler_with(updater, token),
    });

    (create_router(state.clone()), state)
}
