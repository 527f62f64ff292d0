// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! `update-activity` tool.
//!
//! Workflow:
//! 1. Validate arguments into an [`UpdateActivityInput`]
//! 2. Look up the access token (fail fast if missing)
//! 3. Send only the supplied fields to Strava
//! 4. Render the updated activity, or classify the failure

use crate::error::{AppError, Result};
use crate::models::UpdateActivityInput;
use crate::services::activity::{describe_update_failure, format_update_success};
use crate::services::{ActivityUpdater, CredentialSource};
use crate::tools::{ToolDefinition, ToolResponse};
use serde_json::{json, Value};
use std::sync::Arc;
use validator::Validate;

/// Handler for the `update-activity` tool.
#[derive(Clone)]
pub struct UpdateActivityHandler {
    updater: Arc<dyn ActivityUpdater>,
    credentials: Arc<dyn CredentialSource>,
}

impl UpdateActivityHandler {
    pub const NAME: &'static str = "update-activity";

    pub fn new(updater: Arc<dyn ActivityUpdater>, credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            updater,
            credentials,
        }
    }

    pub fn definition() -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: "Update an existing Strava activity. Accepted keys: activityId, name, \
                          type, sportType, description, private, commute, gearId. Only the \
                          fields provided are changed; pass gearId: null to remove the gear \
                          association."
                .to_string(),
            input_schema: input_schema(),
        }
    }

    /// Parse and validate raw tool arguments.
    pub fn parse_input(arguments: Value) -> Result<UpdateActivityInput> {
        let ignored = ignored_keys(&arguments);
        if !ignored.is_empty() {
            tracing::warn!(
                tool = Self::NAME,
                ignored = ?ignored,
                "Ignoring unrecognized tool arguments"
            );
        }
        let input: UpdateActivityInput =
            serde_json::from_value(arguments).map_err(|e| AppError::Validation(e.to_string()))?;
        input
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(input)
    }

    /// Validate raw arguments, then run the update.
    ///
    /// Invalid arguments are rejected without reading the token or calling
    /// Strava.
    pub async fn call(&self, arguments: Value) -> ToolResponse {
        match Self::parse_input(arguments) {
            Ok(input) => self.handle(input).await,
            Err(e) => {
                tracing::warn!(error = %e, tool = Self::NAME, "Rejected tool arguments");
                ToolResponse::error(format!("❌ {}", e))
            }
        }
    }

    /// Run the update for already-validated input.
    pub async fn handle(&self, input: UpdateActivityInput) -> ToolResponse {
        let activity_id = input.activity_id;

        let Some(access_token) = self
            .credentials
            .access_token()
            .filter(|t| !t.trim().is_empty())
        else {
            tracing::error!(activity_id, "Strava access token is not configured");
            return ToolResponse::error(format!("❌ {}", AppError::MissingCredential));
        };

        let payload = input.to_payload();
        if payload.is_empty() {
            tracing::debug!(activity_id, "No fields supplied, sending empty update");
        }
        tracing::info!(
            activity_id,
            fields = ?payload.field_names(),
            "Updating activity"
        );

        match self
            .updater
            .update_activity(access_token.trim(), activity_id, &payload)
            .await
        {
            Ok(activity) => {
                tracing::info!(activity_id, name = %activity.name, "Activity updated");
                ToolResponse::text(format_update_success(&activity))
            }
            Err(e) => {
                tracing::error!(
                    activity_id,
                    error = %e,
                    not_found = e.is_not_found(),
                    "Activity update failed"
                );
                ToolResponse::error(describe_update_failure(activity_id, &e))
            }
        }
    }
}

const ARGUMENT_KEYS: [&str; 8] = [
    "activityId",
    "name",
    "type",
    "sportType",
    "description",
    "private",
    "commute",
    "gearId",
];

/// Argument keys that are not part of the input schema.
fn ignored_keys(arguments: &Value) -> Vec<String> {
    arguments
        .as_object()
        .map(|object| {
            object
                .keys()
                .filter(|key| !ARGUMENT_KEYS.contains(&key.as_str()))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "activityId": {
                "type": "integer",
                "exclusiveMinimum": 0,
                "description": "ID of the activity to update"
            },
            "name": { "type": "string", "description": "New activity name" },
            "type": {
                "type": "string",
                "description": "Activity type (e.g. Ride, Run)"
            },
            "sportType": {
                "type": "string",
                "description": "Sport type (e.g. MountainBikeRide, TrailRun)"
            },
            "description": { "type": "string", "description": "New description" },
            "private": {
                "type": "boolean",
                "description": "Whether the activity is private"
            },
            "commute": {
                "type": "boolean",
                "description": "Whether the activity is a commute"
            },
            "gearId": {
                "type": ["string", "null"],
                "description": "Gear ID to associate, or null to remove the association"
            }
        },
        "required": ["activityId"]
    })
}
