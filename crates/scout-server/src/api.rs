// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Application state and router construction.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
	routing::{get, post},
	Router,
};
use scout_server_config::ServerConfig;
use scout_server_search_google_cse::CredentialConfig;
use scout_server_tools::{default_registry, SearchContext, ToolRegistry};

use crate::routes;

/// Shared application state; everything inside is immutable after startup.
#[derive(Clone)]
pub struct AppState {
	pub registry: Arc<ToolRegistry>,
	pub context: Arc<SearchContext>,
}

/// Builds application state from resolved configuration.
///
/// Configuration is read once here and injected; nothing downstream
/// touches the process environment.
pub fn create_app_state(config: &ServerConfig) -> AppState {
	let google = &config.search.google_cse;
	if google.is_configured() {
		tracing::info!("Google CSE configured");
	} else {
		tracing::info!("Google CSE not configured; search tools will report degraded health");
	}

	let credential_config = CredentialConfig {
		api_key: google.api_key.clone(),
		search_engine_id: google.search_engine_id.clone(),
		credentials_file: google.credentials_file.as_ref().map(PathBuf::from),
	};

	let context = Arc::new(SearchContext::new(credential_config));
	let registry = Arc::new(default_registry(Arc::clone(&context)));

	AppState { registry, context }
}

/// Builds the router over the tool surface.
pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(routes::health::health_check))
		.route("/tools", get(routes::tools::list_tools))
		.route("/tools/{name}", post(routes::tools::invoke_tool))
		.with_state(state)
}
