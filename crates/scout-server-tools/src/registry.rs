// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use scout_common_core::{ToolDefinition, ToolError};
use std::collections::HashMap;

/// A named, remotely invokable operation with a fixed input schema.
#[async_trait]
pub trait Tool: Send + Sync {
	fn name(&self) -> &str;

	fn description(&self) -> &str;

	fn input_schema(&self) -> serde_json::Value;

	fn to_definition(&self) -> ToolDefinition {
		ToolDefinition {
			name: self.name().to_string(),
			description: self.description().to_string(),
			input_schema: self.input_schema(),
		}
	}

	async fn invoke(&self, args: serde_json::Value) -> Result<serde_json::Value, ToolError>;
}

/// Explicit name-to-handler registry; nothing is discovered by reflection.
pub struct ToolRegistry {
	tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
	pub fn new() -> Self {
		Self {
			tools: HashMap::new(),
		}
	}

	pub fn register(&mut self, tool: Box<dyn Tool>) {
		let name = tool.name().to_string();
		tracing::debug!(tool_name = %name, "registering tool");
		self.tools.insert(name, tool);
	}

	pub fn get(&self, name: &str) -> Option<&dyn Tool> {
		self.tools.get(name).map(|t| t.as_ref())
	}

	pub fn definitions(&self) -> Vec<ToolDefinition> {
		self.tools.values().map(|t| t.to_definition()).collect()
	}

	/// Dispatches an invocation to the named tool.
	///
	/// Unknown names surface as [`ToolError::NotFound`]; every other
	/// failure comes from the tool itself as a typed error, never a panic.
	pub async fn invoke(
		&self,
		name: &str,
		args: serde_json::Value,
	) -> Result<serde_json::Value, ToolError> {
		let tool = self
			.get(name)
			.ok_or_else(|| ToolError::NotFound(name.to_string()))?;
		tool.invoke(args).await
	}
}

impl Default for ToolRegistry {
	fn default() -> Self {
		Self::new()
	}
}
