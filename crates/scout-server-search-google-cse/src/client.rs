// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Google Custom Search API client implementation.

use std::time::Duration;

use reqwest::Client;
use scout_common_secret::SecretString;
use serde::Deserialize;
use tracing::{debug, error, instrument, trace};

use crate::error::CseError;
use crate::types::{ImageInfo, SearchRequest, SearchResponse, SearchResultItem};

const DEFAULT_BASE_URL: &str = "https://customsearch.googleapis.com/customsearch/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// How a request authenticates against the CSE API.
#[derive(Debug, Clone)]
enum Authorization {
	/// `key` query parameter.
	ApiKey(SecretString),
	/// `Authorization: Bearer` header from a service-account token.
	Bearer(SecretString),
}

/// Client for the Google Custom Search JSON API.
///
/// Issues exactly one request per search: only the first result page is
/// fetched, and there is no retry or caching layer in front of it.
#[derive(Debug, Clone)]
pub struct CseClient {
	http_client: Client,
	authorization: Authorization,
	search_engine_id: Option<String>,
	base_url: String,
}

#[derive(Debug, Deserialize)]
struct CseApiResponse {
	items: Option<Vec<CseApiItem>>,
}

#[derive(Debug, Deserialize)]
struct CseApiItem {
	title: Option<String>,
	link: Option<String>,
	snippet: Option<String>,
	image: Option<CseApiImage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CseApiImage {
	context_link: Option<String>,
	thumbnail_link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CseApiError {
	error: Option<CseApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct CseApiErrorBody {
	message: Option<String>,
	status: Option<String>,
}

impl CseClient {
	/// Creates a client that authenticates with an API key.
	pub fn with_api_key(api_key: SecretString, search_engine_id: impl Into<String>) -> Self {
		Self {
			http_client: Self::default_http_client(),
			authorization: Authorization::ApiKey(api_key),
			search_engine_id: Some(search_engine_id.into()),
			base_url: DEFAULT_BASE_URL.to_string(),
		}
	}

	/// Creates a client that authenticates with a service-account access token.
	pub fn with_bearer_token(token: SecretString, search_engine_id: Option<String>) -> Self {
		Self {
			http_client: Self::default_http_client(),
			authorization: Authorization::Bearer(token),
			search_engine_id,
			base_url: DEFAULT_BASE_URL.to_string(),
		}
	}

	/// Sets a custom base URL for the API (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	fn default_http_client() -> Client {
		scout_common_http::builder()
			.timeout(REQUEST_TIMEOUT)
			.build()
			.expect("Failed to create HTTP client")
	}

	/// Performs one search request against the CSE API.
	///
	/// Only the first result page is requested; `request.num` has already
	/// been clamped to the kind's cap.
	#[instrument(skip(self), fields(query = %request.query, num = request.num, kind = ?request.kind))]
	pub async fn search(&self, request: SearchRequest) -> Result<SearchResponse, CseError> {
		let num = request.num.to_string();
		let mut params: Vec<(&str, &str)> =
			vec![("q", request.query.as_str()), ("num", num.as_str())];
		if let Some(cx) = &self.search_engine_id {
			params.push(("cx", cx));
		}
		if let Some(search_type) = request.kind.search_type() {
			params.push(("searchType", search_type));
		}

		debug!(url = %self.base_url, "Sending search request to Google CSE");

		let mut http_request = self.http_client.get(&self.base_url).query(&params);
		http_request = match &self.authorization {
			Authorization::ApiKey(key) => http_request.query(&[("key", key.expose().as_str())]),
			Authorization::Bearer(token) => http_request.bearer_auth(token.expose()),
		};

		let response = http_request.send().await.map_err(|e| {
			if e.is_timeout() {
				error!("Request timed out");
				return CseError::Timeout;
			}
			error!(error = %e, "Network error during CSE request");
			CseError::Network(e)
		})?;

		let status = response.status();
		debug!(status = %status, "Received response from Google CSE");

		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(classify_error(status.as_u16(), &body));
		}

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "Failed to read response body");
			CseError::Network(e)
		})?;

		trace!(body = %body, "Response body");

		let results = parse_results(&body)?;
		debug!(
			result_count = results.len(),
			"Search completed successfully"
		);

		Ok(SearchResponse {
			query: request.query,
			results,
		})
	}
}

/// Maps a non-2xx response onto a typed error.
///
/// Quota exhaustion arrives as 429, or as 403 with a quota-flavored body
/// (`rateLimitExceeded`, `dailyLimitExceeded`, `RESOURCE_EXHAUSTED`).
fn classify_error(status: u16, body: &str) -> CseError {
	let parsed = serde_json::from_str::<CseApiError>(body)
		.ok()
		.and_then(|e| e.error);
	let message = parsed
		.as_ref()
		.and_then(|e| e.message.clone())
		.unwrap_or_else(|| body.to_string());
	let status_text = parsed.as_ref().and_then(|e| e.status.clone());

	if status == 429 {
		error!(status, "Quota exceeded");
		return CseError::RateLimited;
	}

	if status == 401 || status == 403 {
		let lowered = format!("{message} {body}").to_lowercase();
		if status_text.as_deref() == Some("RESOURCE_EXHAUSTED")
			|| lowered.contains("quota")
			|| lowered.contains("rate")
			|| lowered.contains("limit")
		{
			error!(status, "Quota exceeded");
			return CseError::RateLimited;
		}
		error!(status, "Unauthorized request");
		return CseError::Unauthorized;
	}

	error!(status, message = %message, "Google CSE API error");
	CseError::ApiError { status, message }
}

/// Parses a successful response body into normalized result items.
///
/// Missing optional fields map to empty strings so downstream callers
/// never see absent values; upstream ordering is preserved.
fn parse_results(body: &str) -> Result<Vec<SearchResultItem>, CseError> {
	let response: CseApiResponse = serde_json::from_str(body).map_err(|e| {
		error!(error = %e, "Failed to parse CSE response");
		CseError::InvalidResponse(format!("JSON parse error: {e}"))
	})?;

	Ok(response
		.items
		.unwrap_or_default()
		.into_iter()
		.map(|item| SearchResultItem {
			title: item.title.unwrap_or_default(),
			link: item.link.unwrap_or_default(),
			snippet: item.snippet.unwrap_or_default(),
			image: item.image.map(|image| ImageInfo {
				context_link: image.context_link.unwrap_or_default(),
				thumbnail_link: image.thumbnail_link.unwrap_or_default(),
			}),
		})
		.collect())
}
