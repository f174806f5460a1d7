// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Search tool dispatcher for Scout.
//!
//! This crate exposes Google Custom Search as four named tools behind an
//! explicit registry: `google_search`, `google_search_web`,
//! `google_search_images`, and `get_search_health`. Each invocation is an
//! independent, idempotent transaction: validate arguments, resolve
//! credentials fresh, issue one upstream request, normalize the response.

pub mod context;
pub mod health;
pub mod registry;
pub mod search;

pub use context::SearchContext;
pub use health::{HealthReport, HealthStatus, SearchHealthTool};
pub use registry::{Tool, ToolRegistry};
pub use search::{GeneralSearchTool, ImageSearchTool, WebSearchTool};

use std::sync::Arc;

/// Builds the standard registry with all four search tools attached.
pub fn default_registry(context: Arc<SearchContext>) -> ToolRegistry {
	let mut registry = ToolRegistry::new();
	registry.register(Box::new(GeneralSearchTool::new(Arc::clone(&context))));
	registry.register(Box::new(WebSearchTool::new(Arc::clone(&context))));
	registry.register(Box::new(ImageSearchTool::new(Arc::clone(&context))));
	registry.register(Box::new(SearchHealthTool::new(context)));
	registry
}
