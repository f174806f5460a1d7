// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or merging configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// A configuration file exists but could not be read.
	#[error("failed to read config file {path}: {source}")]
	FileRead {
		path: PathBuf,
		source: std::io::Error,
	},

	/// A configuration file could not be parsed as TOML.
	#[error("failed to parse config file {path}: {source}")]
	TomlParse {
		path: PathBuf,
		source: toml::de::Error,
	},

	/// An environment variable held a value of the wrong shape.
	#[error("invalid value for {key}: {message}")]
	InvalidValue { key: String, message: String },

	/// A secret could not be loaded from the environment.
	#[error("secret error: {0}")]
	Secret(String),
}
