// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health HTTP handler.

use axum::{extract::State, Json};
use scout_server_tools::HealthReport;

use crate::api::AppState;

/// GET /health - Credential health check.
///
/// Always returns 200; a degraded credential setup is reported in the
/// body, never as a transport-level failure.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthReport> {
	let report = state.context.health();
	tracing::debug!(status = ?report.status, "health check");
	Json(report)
}
