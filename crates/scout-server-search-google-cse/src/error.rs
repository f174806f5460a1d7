// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the Google Custom Search Engine client.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from credential resolution.
#[derive(Debug, Error)]
pub enum CredentialError {
	/// Neither the API-key pair nor a service-account key is usable.
	#[error("No usable Google search credentials configured")]
	Unavailable,

	/// A service-account key file exists but is not valid key material.
	#[error("Invalid service-account key file {path}: {message}")]
	InvalidFormat { path: PathBuf, message: String },
}

/// Errors that can occur when interacting with the Google CSE API.
#[derive(Debug, Error)]
pub enum CseError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// Quota or rate limit exceeded.
	#[error("Quota or rate limit exceeded")]
	RateLimited,

	/// Credentials were rejected by Google.
	#[error("Credentials rejected by Google")]
	Unauthorized,

	/// Invalid or unparseable response from Google.
	#[error("Invalid response from Google: {0}")]
	InvalidResponse(String),

	/// Google API returned an error status.
	#[error("Google API error: {status} - {message}")]
	ApiError { status: u16, message: String },
}
