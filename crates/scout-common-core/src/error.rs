// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Errors surfaced by tool invocations.
///
/// Every variant carries a stable machine-readable [`kind`](ToolError::kind)
/// tag so callers can dispatch on the failure class without parsing
/// messages. Errors never escape the tool boundary as panics; the
/// dispatcher returns them as structured results.
#[derive(Clone, Error, Debug)]
pub enum ToolError {
	/// No tool is registered under the requested name.
	#[error("Tool not found: {0}")]
	NotFound(String),

	/// The arguments did not validate (empty query, malformed JSON, ...).
	#[error("Invalid arguments: {0}")]
	InvalidArguments(String),

	/// No usable search credentials are configured.
	#[error("Credentials unavailable: {0}")]
	CredentialsUnavailable(String),

	/// Credential material exists but cannot be parsed.
	#[error("Invalid credential format: {0}")]
	InvalidCredentialFormat(String),

	/// The upstream API reported quota or rate-limit exhaustion.
	#[error("Upstream quota exceeded: {0}")]
	QuotaExceeded(String),

	/// The upstream request failed (network, timeout, non-2xx, bad body).
	#[error("Upstream request failed: {0}")]
	UpstreamFailed(String),

	/// A result could not be serialized for the caller.
	#[error("Serialization error: {0}")]
	Serialization(String),
}

impl ToolError {
	/// Stable wire-level tag for the error class.
	pub fn kind(&self) -> &'static str {
		match self {
			ToolError::NotFound(_) => "tool_not_found",
			ToolError::InvalidArguments(_) => "invalid_argument",
			ToolError::CredentialsUnavailable(_) => "credentials_unavailable",
			ToolError::InvalidCredentialFormat(_) => "invalid_credential_format",
			ToolError::QuotaExceeded(_) => "upstream_quota_exceeded",
			ToolError::UpstreamFailed(_) => "upstream_request_failed",
			ToolError::Serialization(_) => "serialization_error",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn kinds_are_stable_wire_tags() {
		assert_eq!(
			ToolError::InvalidArguments("q".into()).kind(),
			"invalid_argument"
		);
		assert_eq!(
			ToolError::CredentialsUnavailable("none".into()).kind(),
			"credentials_unavailable"
		);
		assert_eq!(
			ToolError::QuotaExceeded("429".into()).kind(),
			"upstream_quota_exceeded"
		);
		assert_eq!(
			ToolError::UpstreamFailed("boom".into()).kind(),
			"upstream_request_failed"
		);
	}

	#[test]
	fn messages_include_context() {
		let err = ToolError::NotFound("google_search_x".into());
		assert!(err.to_string().contains("google_search_x"));
	}
}
