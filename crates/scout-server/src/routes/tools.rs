// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Tool listing and invocation HTTP handlers.

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use scout_common_core::ToolDefinition;

use crate::api::AppState;
use crate::error::tool_error_response;

/// GET /tools - List registered tool definitions.
pub async fn list_tools(State(state): State<AppState>) -> Json<Vec<ToolDefinition>> {
	Json(state.registry.definitions())
}

/// POST /tools/{name} - Invoke a tool with a JSON argument object.
pub async fn invoke_tool(
	State(state): State<AppState>,
	Path(name): Path<String>,
	Json(args): Json<serde_json::Value>,
) -> Response {
	match state.registry.invoke(&name, args).await {
		Ok(value) => (StatusCode::OK, Json(value)).into_response(),
		Err(err) => {
			tracing::warn!(tool = %name, error = %err, kind = err.kind(), "tool invocation failed");
			tool_error_response(err).into_response()
		}
	}
}
