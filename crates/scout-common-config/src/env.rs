// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Environment variable helpers for secret configuration values.
//!
//! Secrets can be provided directly (`NAME`) or indirectly through a file
//! path (`NAME_FILE`), the conventional shape for container secret mounts.
//! Setting both forms is a configuration error, not a precedence question.

use std::path::PathBuf;

use scout_common_secret::{Secret, SecretString};
use thiserror::Error;
use tracing::trace;

/// Errors from loading a secret out of the environment.
#[derive(Debug, Error)]
pub enum SecretEnvError {
	/// Both `NAME` and `NAME_FILE` are set.
	#[error("both {var} and {var}_FILE are set; provide only one")]
	Conflict { var: String },

	/// The file referenced by `NAME_FILE` could not be read.
	#[error("failed to read {path} referenced by {var}_FILE: {source}")]
	FileRead {
		var: String,
		path: PathBuf,
		source: std::io::Error,
	},
}

/// Errors from loading a secret that must be present.
#[derive(Debug, Error)]
pub enum RequiredSecretError {
	#[error("required secret {0} is not set (checked {0} and {0}_FILE)")]
	Missing(String),

	#[error(transparent)]
	Env(#[from] SecretEnvError),
}

/// Loads an optional secret from `var` or `var_FILE`.
///
/// Empty values are treated as unset. File contents have trailing
/// whitespace trimmed, since mounted secrets routinely end in a newline.
pub fn load_secret_env(var: &str) -> Result<Option<SecretString>, SecretEnvError> {
	let direct = std::env::var(var).ok().filter(|v| !v.is_empty());
	let file_var = format!("{var}_FILE");
	let file = std::env::var(&file_var).ok().filter(|v| !v.is_empty());

	match (direct, file) {
		(Some(_), Some(_)) => Err(SecretEnvError::Conflict {
			var: var.to_string(),
		}),
		(Some(value), None) => {
			trace!(var = var, "loaded secret from environment");
			Ok(Some(Secret::new(value)))
		}
		(None, Some(path)) => {
			let path = PathBuf::from(path);
			let contents =
				std::fs::read_to_string(&path).map_err(|source| SecretEnvError::FileRead {
					var: var.to_string(),
					path: path.clone(),
					source,
				})?;
			trace!(var = var, path = %path.display(), "loaded secret from file");
			Ok(Some(Secret::new(contents.trim_end().to_string())))
		}
		(None, None) => Ok(None),
	}
}

/// Loads a secret that must be present in one of the two forms.
pub fn load_required_secret_env(var: &str) -> Result<SecretString, RequiredSecretError> {
	load_secret_env(var)?.ok_or_else(|| RequiredSecretError::Missing(var.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;

	// Each test uses a unique variable name; the process environment is
	// shared across the test harness.

	#[test]
	fn missing_var_returns_none() {
		let result = load_secret_env("SCOUT_TEST_SECRET_MISSING").unwrap();
		assert!(result.is_none());
	}

	#[test]
	fn direct_var_is_loaded() {
		std::env::set_var("SCOUT_TEST_SECRET_DIRECT", "hunter2");
		let result = load_secret_env("SCOUT_TEST_SECRET_DIRECT").unwrap();
		assert_eq!(result.unwrap().expose(), "hunter2");
		std::env::remove_var("SCOUT_TEST_SECRET_DIRECT");
	}

	#[test]
	fn empty_var_is_treated_as_unset() {
		std::env::set_var("SCOUT_TEST_SECRET_EMPTY", "");
		let result = load_secret_env("SCOUT_TEST_SECRET_EMPTY").unwrap();
		assert!(result.is_none());
		std::env::remove_var("SCOUT_TEST_SECRET_EMPTY");
	}

	#[test]
	fn file_var_reads_and_trims_contents() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("secret");
		std::fs::write(&path, "from-file\n").unwrap();

		std::env::set_var("SCOUT_TEST_SECRET_FILE_FILE", &path);
		let result = load_secret_env("SCOUT_TEST_SECRET_FILE").unwrap();
		assert_eq!(result.unwrap().expose(), "from-file");
		std::env::remove_var("SCOUT_TEST_SECRET_FILE_FILE");
	}

	#[test]
	fn both_forms_set_is_a_conflict() {
		std::env::set_var("SCOUT_TEST_SECRET_BOTH", "direct");
		std::env::set_var("SCOUT_TEST_SECRET_BOTH_FILE", "/nonexistent");
		let result = load_secret_env("SCOUT_TEST_SECRET_BOTH");
		assert!(matches!(result, Err(SecretEnvError::Conflict { .. })));
		std::env::remove_var("SCOUT_TEST_SECRET_BOTH");
		std::env::remove_var("SCOUT_TEST_SECRET_BOTH_FILE");
	}

	#[test]
	fn unreadable_file_is_an_error() {
		std::env::set_var("SCOUT_TEST_SECRET_NOFILE_FILE", "/nonexistent/secret");
		let result = load_secret_env("SCOUT_TEST_SECRET_NOFILE");
		assert!(matches!(result, Err(SecretEnvError::FileRead { .. })));
		std::env::remove_var("SCOUT_TEST_SECRET_NOFILE_FILE");
	}

	#[test]
	fn required_secret_missing_is_an_error() {
		let result = load_required_secret_env("SCOUT_TEST_SECRET_REQUIRED_MISSING");
		assert!(matches!(result, Err(RequiredSecretError::Missing(_))));
	}
}
