// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP error mapping for the tool surface.

use axum::{http::StatusCode, Json};
use scout_common_core::ToolError;
use serde::Serialize;

/// Response body for failed tool invocations.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

/// Maps a [`ToolError`] onto an HTTP status and a structured body.
///
/// Every tool failure leaves this boundary as a well-formed JSON response;
/// nothing propagates as an unhandled fault.
pub fn tool_error_response(err: ToolError) -> (StatusCode, Json<ErrorResponse>) {
	let status = match &err {
		ToolError::NotFound(_) => StatusCode::NOT_FOUND,
		ToolError::InvalidArguments(_) => StatusCode::BAD_REQUEST,
		ToolError::CredentialsUnavailable(_) | ToolError::InvalidCredentialFormat(_) => {
			StatusCode::SERVICE_UNAVAILABLE
		}
		ToolError::QuotaExceeded(_) => StatusCode::TOO_MANY_REQUESTS,
		ToolError::UpstreamFailed(_) => StatusCode::BAD_GATEWAY,
		ToolError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
	};

	(
		status,
		Json(ErrorResponse {
			error: err.kind().to_string(),
			message: err.to_string(),
		}),
	)
}
