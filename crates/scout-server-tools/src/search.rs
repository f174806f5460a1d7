// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The three search tools: general, web, and image.

use std::sync::Arc;

use async_trait::async_trait;
use scout_common_core::ToolError;
use scout_server_search_google_cse::{SearchKind, SearchResultItem};
use serde::Deserialize;

use crate::context::SearchContext;
use crate::registry::Tool;

#[derive(Debug, Deserialize)]
struct SearchArgs {
	query: String,
	num_results: Option<i64>,
}

/// Clamps a caller-supplied count into `1..=cap` for the kind.
///
/// Counts are clamped, never rejected; an absent count means "as many as
/// one page gives", i.e. the cap.
fn clamp_num(requested: Option<i64>, kind: SearchKind) -> u32 {
	let cap = kind.max_results();
	match requested {
		None => cap,
		Some(n) if n < 1 => 1,
		Some(n) => (n as u64).min(u64::from(cap)) as u32,
	}
}

fn parse_args(args: serde_json::Value) -> Result<SearchArgs, ToolError> {
	serde_json::from_value(args).map_err(|e| ToolError::InvalidArguments(e.to_string()))
}

fn search_input_schema(cap: u32) -> serde_json::Value {
	serde_json::json!({
			"type": "object",
			"properties": {
					"query": {
							"type": "string",
							"description": "The search query string"
					},
					"num_results": {
							"type": "integer",
							"description": format!("Number of results to return (max {cap})")
					}
			},
			"required": ["query"]
	})
}

/// Serializes results for the caller, labeled with the tool's source.
fn serialize_results(
	results: Vec<SearchResultItem>,
	source: &str,
) -> Result<serde_json::Value, ToolError> {
	let items: Vec<serde_json::Value> = results
		.into_iter()
		.map(|item| {
			let mut value = serde_json::json!({
					"title": item.title,
					"link": item.link,
					"snippet": item.snippet,
					"source": source
			});
			if let Some(image) = item.image {
				value["image"] = serde_json::json!({
						"context_link": image.context_link,
						"thumbnail_link": image.thumbnail_link
				});
			}
			value
		})
		.collect();

	Ok(serde_json::Value::Array(items))
}

/// `google_search`: plain Custom Search query, up to 10 results.
pub struct GeneralSearchTool {
	context: Arc<SearchContext>,
}

impl GeneralSearchTool {
	pub fn new(context: Arc<SearchContext>) -> Self {
		Self { context }
	}
}

#[async_trait]
impl Tool for GeneralSearchTool {
	fn name(&self) -> &str {
		"google_search"
	}

	fn description(&self) -> &str {
		"Perform a Google search and return results with title, link, and snippet"
	}

	fn input_schema(&self) -> serde_json::Value {
		search_input_schema(SearchKind::General.max_results())
	}

	async fn invoke(&self, args: serde_json::Value) -> Result<serde_json::Value, ToolError> {
		let args = parse_args(args)?;
		let num = clamp_num(args.num_results, SearchKind::General);
		let results = self
			.context
			.search(SearchKind::General, &args.query, num)
			.await?;
		serialize_results(results, "Google Custom Search")
	}
}

/// `google_search_web`: web-biased query, up to 5 results.
pub struct WebSearchTool {
	context: Arc<SearchContext>,
}

impl WebSearchTool {
	pub fn new(context: Arc<SearchContext>) -> Self {
		Self { context }
	}
}

#[async_trait]
impl Tool for WebSearchTool {
	fn name(&self) -> &str {
		"google_search_web"
	}

	fn description(&self) -> &str {
		"Perform a web search using Google and return results"
	}

	fn input_schema(&self) -> serde_json::Value {
		search_input_schema(SearchKind::Web.max_results())
	}

	async fn invoke(&self, args: serde_json::Value) -> Result<serde_json::Value, ToolError> {
		let args = parse_args(args)?;
		let num = clamp_num(args.num_results, SearchKind::Web);
		let results = self
			.context
			.search(SearchKind::Web, &args.query, num)
			.await?;
		serialize_results(results, "Google Web Search")
	}
}

/// `google_search_images`: image search, up to 5 results with image fields.
pub struct ImageSearchTool {
	context: Arc<SearchContext>,
}

impl ImageSearchTool {
	pub fn new(context: Arc<SearchContext>) -> Self {
		Self { context }
	}
}

#[async_trait]
impl Tool for ImageSearchTool {
	fn name(&self) -> &str {
		"google_search_images"
	}

	fn description(&self) -> &str {
		"Search for images using Google and return results with image links"
	}

	fn input_schema(&self) -> serde_json::Value {
		search_input_schema(SearchKind::Image.max_results())
	}

	async fn invoke(&self, args: serde_json::Value) -> Result<serde_json::Value, ToolError> {
		let args = parse_args(args)?;
		let num = clamp_num(args.num_results, SearchKind::Image);
		let results = self
			.context
			.search(SearchKind::Image, &args.query, num)
			.await?;
		serialize_results(results, "Google Image Search")
	}
}
