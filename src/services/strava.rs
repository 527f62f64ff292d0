// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client for updating activities.
//!
//! Handles:
//! - Partial activity updates (`PUT /activities/{id}`)
//! - Mapping Strava's HTTP status codes to [`AppError`] variants
//!
//! Rate limits are reported, never retried.

use crate::config::Config;
use crate::error::AppError;
use crate::models::{StravaActivity, UpdatableActivity};
use async_trait::async_trait;
use serde::Deserialize;

/// Something that can apply an update to a Strava activity.
#[async_trait]
pub trait ActivityUpdater: Send + Sync {
    /// Apply `update` to the activity and return the resulting record.
    async fn update_activity(
        &self,
        access_token: &str,
        activity_id: u64,
        update: &UpdatableActivity,
    ) -> Result<StravaActivity, AppError>;
}

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    base_url: String,
}

impl StravaClient {
    /// Create a client for the given API base URL.
    pub fn new(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Create a client from application config.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::new(config.strava_api_url.clone(), http))
    }

    /// Check response and parse JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
        activity_id: u64,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 404 {
                return Err(AppError::NotFound(format!(
                    "Activity {}: {}",
                    activity_id,
                    strava_message(&body)
                )));
            }

            if status.as_u16() == 429 {
                tracing::warn!("Strava rate limit hit (429)");
                return Err(AppError::StravaApi(AppError::STRAVA_RATE_LIMIT.to_string()));
            }

            if status.as_u16() == 401 {
                return Err(AppError::StravaApi(
                    AppError::STRAVA_TOKEN_ERROR.to_string(),
                ));
            }

            return Err(AppError::StravaApi(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::StravaApi(format!("JSON parse error: {}", e)))
    }
}

#[async_trait]
impl ActivityUpdater for StravaClient {
    async fn update_activity(
        &self,
        access_token: &str,
        activity_id: u64,
        update: &UpdatableActivity,
    ) -> Result<StravaActivity, AppError> {
        let url = format!("{}/activities/{}", self.base_url, activity_id);

        let response = self
            .http
            .put(&url)
            .bearer_auth(access_token)
            .json(update)
            .send()
            .await
            .map_err(|e| AppError::StravaApi(e.to_string()))?;

        self.check_response_json(response, activity_id).await
    }
}

/// Fault body Strava attaches to error responses.
#[derive(Debug, Deserialize)]
struct StravaFault {
    message: String,
}

/// Extract Strava's `message` from an error body, falling back to the raw body.
fn strava_message(body: &str) -> String {
    serde_json::from_str::<StravaFault>(body)
        .map(|fault| fault.message)
        .unwrap_or_else(|_| body.to_string())
}
