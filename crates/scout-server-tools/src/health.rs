// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health reporting for the search tool surface.

use std::sync::Arc;

use async_trait::async_trait;
use scout_common_core::ToolError;
use scout_server_search_google_cse::CredentialMode;
use serde::Serialize;

use crate::context::SearchContext;
use crate::registry::Tool;

/// Overall health of the search surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
	Healthy,
	Degraded,
}

/// Computed fresh on every call; nothing here is cached.
///
/// Only presence booleans are reported for configuration, never the
/// configured values themselves.
#[derive(Clone, Debug, Serialize)]
pub struct HealthReport {
	pub status: HealthStatus,
	pub credentials_available: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub credential_mode: Option<CredentialMode>,
	pub search_engine_id_set: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub detail: Option<String>,
}

/// The `get_search_health` tool. Always succeeds as a call; a broken
/// credential setup is reported as degraded status, not as an error.
pub struct SearchHealthTool {
	context: Arc<SearchContext>,
}

impl SearchHealthTool {
	pub fn new(context: Arc<SearchContext>) -> Self {
		Self { context }
	}
}

#[async_trait]
impl Tool for SearchHealthTool {
	fn name(&self) -> &str {
		"get_search_health"
	}

	fn description(&self) -> &str {
		"Check the health and credential configuration of the Google search tools"
	}

	fn input_schema(&self) -> serde_json::Value {
		serde_json::json!({
				"type": "object",
				"properties": {}
		})
	}

	async fn invoke(&self, _args: serde_json::Value) -> Result<serde_json::Value, ToolError> {
		let report = self.context.health();
		serde_json::to_value(report).map_err(|e| ToolError::Serialization(e.to_string()))
	}
}
