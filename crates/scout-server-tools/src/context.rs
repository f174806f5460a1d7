// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared state and the search execution path for the tools.
//!
//! Credentials are resolved fresh on every invocation, so concurrent
//! calls share nothing mutable; the only cost is re-reading a key file in
//! service-account mode.

use scout_common_core::ToolError;
use scout_server_search_google_cse::{
	auth, resolve, CredentialConfig, CredentialError, CseClient, CseError, ResolvedCredentials,
	SearchKind, SearchRequest, SearchResultItem,
};
use tracing::debug;

use crate::health::{HealthReport, HealthStatus};

/// Immutable per-process context shared by the four search tools.
pub struct SearchContext {
	config: CredentialConfig,
	base_url: Option<String>,
	token_url: Option<String>,
}

impl SearchContext {
	pub fn new(config: CredentialConfig) -> Self {
		Self {
			config,
			base_url: None,
			token_url: None,
		}
	}

	/// Points search requests at a custom endpoint (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = Some(base_url.into());
		self
	}

	/// Points token exchange at a custom endpoint (useful for testing).
	pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
		self.token_url = Some(token_url.into());
		self
	}

	/// Validates the query, resolves credentials, and performs one search.
	///
	/// The empty-query check runs before credential resolution so invalid
	/// input never costs a file read or a network call. `num` is clamped
	/// into the kind's bounds by [`SearchRequest::new`].
	pub async fn search(
		&self,
		kind: SearchKind,
		query: &str,
		num: u32,
	) -> Result<Vec<SearchResultItem>, ToolError> {
		let query = query.trim();
		if query.is_empty() {
			return Err(ToolError::InvalidArguments(
				"query must not be empty".to_string(),
			));
		}

		let request = SearchRequest::new(query, num, kind);
		let client = self.client().await?;
		let response = client.search(request).await.map_err(map_cse_error)?;
		Ok(response.results)
	}

	/// Resolves credentials and assembles an authenticated client.
	///
	/// In service-account mode this includes the token exchange, which is
	/// the one network round trip resolution itself never makes.
	async fn client(&self) -> Result<CseClient, ToolError> {
		let resolved = resolve(&self.config).map_err(map_credential_error)?;
		debug!(mode = resolved.mode().as_str(), "credentials resolved");

		let client = match resolved {
			ResolvedCredentials::ApiKey {
				api_key,
				search_engine_id,
			} => CseClient::with_api_key(api_key, search_engine_id),
			ResolvedCredentials::ServiceAccount {
				key,
				search_engine_id,
			} => {
				let token_uri = self.token_url.as_deref().unwrap_or(&key.token_uri);
				let token = auth::fetch_access_token(&key, token_uri)
					.await
					.map_err(map_cse_error)?;
				CseClient::with_bearer_token(token, search_engine_id)
			}
		};

		Ok(match &self.base_url {
			Some(url) => client.with_base_url(url.clone()),
			None => client,
		})
	}

	/// Reports credential health. Never fails; degradation is data.
	pub fn health(&self) -> HealthReport {
		match resolve(&self.config) {
			Ok(resolved) => HealthReport {
				status: HealthStatus::Healthy,
				credentials_available: true,
				credential_mode: Some(resolved.mode()),
				search_engine_id_set: self.config.search_engine_id_set(),
				detail: None,
			},
			Err(e) => HealthReport {
				status: HealthStatus::Degraded,
				credentials_available: false,
				credential_mode: None,
				search_engine_id_set: self.config.search_engine_id_set(),
				detail: Some(e.to_string()),
			},
		}
	}
}

fn map_credential_error(e: CredentialError) -> ToolError {
	match e {
		CredentialError::Unavailable => ToolError::CredentialsUnavailable(e.to_string()),
		CredentialError::InvalidFormat { .. } => ToolError::InvalidCredentialFormat(e.to_string()),
	}
}

fn map_cse_error(e: CseError) -> ToolError {
	match e {
		CseError::RateLimited => ToolError::QuotaExceeded(e.to_string()),
		other => ToolError::UpstreamFailed(other.to_string()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use scout_common_secret::Secret;

	fn unconfigured() -> SearchContext {
		SearchContext::new(CredentialConfig::default())
	}

	fn api_key_context() -> SearchContext {
		SearchContext::new(CredentialConfig {
			api_key: Some(Secret::new("test-key".to_string())),
			search_engine_id: Some("engine-123".to_string()),
			credentials_file: None,
		})
	}

	#[tokio::test]
	async fn empty_query_is_rejected_before_resolution() {
		// No credentials configured: an empty query must still surface as
		// InvalidArguments, proving validation runs first.
		let context = unconfigured();
		let result = context.search(SearchKind::General, "", 5).await;
		assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
	}

	#[tokio::test]
	async fn whitespace_query_is_rejected() {
		let context = unconfigured();
		let result = context.search(SearchKind::Web, "   \t", 5).await;
		assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
	}

	#[tokio::test]
	async fn missing_credentials_surface_without_network() {
		let context = unconfigured();
		let result = context.search(SearchKind::General, "rust", 5).await;
		assert!(matches!(result, Err(ToolError::CredentialsUnavailable(_))));
	}

	#[tokio::test]
	async fn malformed_key_file_surfaces_as_invalid_format() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("sa.json");
		std::fs::write(&path, "{}").unwrap();

		let context = SearchContext::new(CredentialConfig {
			api_key: None,
			search_engine_id: None,
			credentials_file: Some(path),
		});

		let result = context.search(SearchKind::General, "rust", 5).await;
		assert!(matches!(
			result,
			Err(ToolError::InvalidCredentialFormat(_))
		));
	}

	#[test]
	fn health_degraded_when_unconfigured() {
		let report = unconfigured().health();
		assert_eq!(report.status, HealthStatus::Degraded);
		assert!(!report.credentials_available);
		assert!(report.credential_mode.is_none());
		assert!(!report.search_engine_id_set);
	}

	#[test]
	fn health_healthy_with_api_key_pair() {
		let report = api_key_context().health();
		assert_eq!(report.status, HealthStatus::Healthy);
		assert!(report.credentials_available);
		assert_eq!(
			report.credential_mode.map(|m| m.as_str()),
			Some("api_key")
		);
		assert!(report.search_engine_id_set);
		assert!(report.detail.is_none());
	}

	#[test]
	fn health_reports_invalid_key_file_detail() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("sa.json");
		std::fs::write(&path, "nonsense").unwrap();

		let context = SearchContext::new(CredentialConfig {
			api_key: None,
			search_engine_id: None,
			credentials_file: Some(path),
		});

		let report = context.health();
		assert_eq!(report.status, HealthStatus::Degraded);
		assert!(report.detail.is_some());
	}

	#[test]
	fn error_mapping_distinguishes_quota() {
		let err = map_cse_error(CseError::RateLimited);
		assert!(matches!(err, ToolError::QuotaExceeded(_)));

		let err = map_cse_error(CseError::Timeout);
		assert!(matches!(err, ToolError::UpstreamFailed(_)));

		let err = map_cse_error(CseError::ApiError {
			status: 500,
			message: "backend".to_string(),
		});
		assert!(matches!(err, ToolError::UpstreamFailed(_)));
	}
}
