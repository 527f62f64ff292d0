// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tool listing and invocation routes.

use crate::error::{AppError, Result};
use crate::tools::{self, ToolDefinition, ToolResponse, UpdateActivityHandler};
use crate::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tools", get(list_tools))
        .route("/tools/call", post(call_tool))
}

#[derive(Serialize)]
pub struct ToolListResponse {
    pub tools: Vec<ToolDefinition>,
}

async fn list_tools() -> Json<ToolListResponse> {
    Json(ToolListResponse {
        tools: tools::definitions(),
    })
}

/// Body of `POST /tools/call`.
#[derive(Deserialize)]
pub struct ToolCallRequest {
    pub name: String,
    #[serde(default)]
    pub arguments: Option<Value>,
}

/// Invoke a tool by name. Tool-level failures come back as a 200 with
/// `isError: true`; only an unknown tool name is an HTTP error.
async fn call_tool(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ToolCallRequest>,
) -> Result<Json<ToolResponse>> {
    let arguments = request.arguments.unwrap_or_else(|| json!({}));

    match request.name.as_str() {
        UpdateActivityHandler::NAME => Ok(Json(state.update_activity.call(arguments).await)),
        other => {
            tracing::warn!(tool = other, "Call to unknown tool");
            Err(AppError::UnknownTool(other.to_string()))
        }
    }
}
