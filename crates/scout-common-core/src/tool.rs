// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

/// Definition of a remotely invokable tool.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ToolDefinition {
	pub name: String,
	pub description: String,
	pub input_schema: serde_json::Value,
}

impl ToolDefinition {
	pub fn new(
		name: impl Into<String>,
		description: impl Into<String>,
		input_schema: serde_json::Value,
	) -> Self {
		let name = name.into();
		tracing::debug!(
				tool_name = %name,
				"Creating tool definition"
		);
		Self {
			name,
			description: description.into(),
			input_schema,
		}
	}
}
