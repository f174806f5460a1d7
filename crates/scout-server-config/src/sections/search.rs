// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Search provider configuration section.

use scout_common_config::SecretString;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfigLayer {
	#[serde(default)]
	pub google_cse: Option<GoogleCseConfigLayer>,
}

impl SearchConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if let Some(other_google) = other.google_cse {
			let google = self.google_cse.get_or_insert_with(Default::default);
			google.merge(other_google);
		}
	}

	pub fn finalize(self) -> SearchConfig {
		SearchConfig {
			google_cse: self.google_cse.map(|g| g.finalize()).unwrap_or_default(),
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoogleCseConfigLayer {
	pub api_key: Option<SecretString>,
	pub search_engine_id: Option<String>,
	pub credentials_file: Option<String>,
}

impl GoogleCseConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.api_key.is_some() {
			self.api_key = other.api_key;
		}
		if other.search_engine_id.is_some() {
			self.search_engine_id = other.search_engine_id;
		}
		if other.credentials_file.is_some() {
			self.credentials_file = other.credentials_file;
		}
	}

	pub fn finalize(self) -> GoogleCseConfig {
		GoogleCseConfig {
			api_key: self.api_key,
			search_engine_id: self.search_engine_id,
			credentials_file: self.credentials_file,
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
	#[serde(default)]
	pub google_cse: GoogleCseConfig,
}

/// Google Custom Search credentials and engine selection.
///
/// Two authentication modes exist: an API key paired with a search-engine
/// id, or a service-account key file. Either (or neither) may be
/// configured; resolution order is decided at call time, not here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoogleCseConfig {
	pub api_key: Option<SecretString>,
	pub search_engine_id: Option<String>,
	pub credentials_file: Option<String>,
}

impl GoogleCseConfig {
	/// Whether the API-key pair is fully present.
	pub fn has_api_key_pair(&self) -> bool {
		self.api_key.is_some() && self.search_engine_id.is_some()
	}

	/// Whether any credential mode is configured at all.
	pub fn is_configured(&self) -> bool {
		self.has_api_key_pair() || self.credentials_file.is_some()
	}
}

impl SearchConfig {
	pub fn has_any_provider(&self) -> bool {
		self.google_cse.is_configured()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use scout_common_config::Secret;

	#[test]
	fn test_default_no_providers() {
		let config = SearchConfig::default();
		assert!(!config.has_any_provider());
		assert!(!config.google_cse.is_configured());
	}

	#[test]
	fn test_api_key_pair_requires_both_fields() {
		let config = GoogleCseConfig {
			api_key: Some(Secret::new("key".to_string())),
			search_engine_id: None,
			credentials_file: None,
		};
		assert!(!config.has_api_key_pair());
		assert!(!config.is_configured());

		let config = GoogleCseConfig {
			api_key: None,
			search_engine_id: Some("engine_id".to_string()),
			credentials_file: None,
		};
		assert!(!config.has_api_key_pair());

		let config = GoogleCseConfig {
			api_key: Some(Secret::new("key".to_string())),
			search_engine_id: Some("engine_id".to_string()),
			credentials_file: None,
		};
		assert!(config.has_api_key_pair());
		assert!(config.is_configured());
	}

	#[test]
	fn test_credentials_file_alone_is_configured() {
		let config = GoogleCseConfig {
			api_key: None,
			search_engine_id: None,
			credentials_file: Some("/etc/scout/sa.json".to_string()),
		};
		assert!(config.is_configured());
		assert!(!config.has_api_key_pair());
	}

	#[test]
	fn test_deserialize_empty() {
		let config: SearchConfig = toml::from_str("").unwrap();
		assert!(!config.has_any_provider());
	}

	#[test]
	fn test_deserialize_with_provider() {
		let toml_str = r#"
[google_cse]
search_engine_id = "abc123"
credentials_file = "/etc/scout/sa.json"
"#;
		let config: SearchConfig = toml::from_str(toml_str).unwrap();
		assert!(!config.google_cse.has_api_key_pair());
		assert!(config.google_cse.is_configured());
		assert_eq!(
			config.google_cse.search_engine_id,
			Some("abc123".to_string())
		);
	}

	#[test]
	fn test_layer_merge() {
		let mut base = SearchConfigLayer {
			google_cse: Some(GoogleCseConfigLayer {
				api_key: Some(Secret::new("old-key".to_string())),
				search_engine_id: Some("old-engine".to_string()),
				credentials_file: None,
			}),
		};
		let overlay = SearchConfigLayer {
			google_cse: Some(GoogleCseConfigLayer {
				api_key: None,
				search_engine_id: Some("new-engine".to_string()),
				credentials_file: Some("/etc/scout/sa.json".to_string()),
			}),
		};
		base.merge(overlay);

		let google = base.google_cse.as_ref().unwrap();
		assert!(google.api_key.is_some());
		assert_eq!(google.search_engine_id, Some("new-engine".to_string()));
		assert_eq!(
			google.credentials_file,
			Some("/etc/scout/sa.json".to_string())
		);
	}

	#[test]
	fn test_layer_finalize() {
		let layer = SearchConfigLayer {
			google_cse: Some(GoogleCseConfigLayer {
				api_key: Some(Secret::new("key".to_string())),
				search_engine_id: Some("engine".to_string()),
				credentials_file: None,
			}),
		};
		let config = layer.finalize();
		assert!(config.google_cse.has_api_key_pair());
	}

	#[test]
	fn test_serialized_config_never_leaks_api_key() {
		let config = GoogleCseConfig {
			api_key: Some(Secret::new("super-secret".to_string())),
			search_engine_id: Some("engine".to_string()),
			credentials_file: None,
		};
		let rendered = serde_json::to_string(&config).unwrap();
		assert!(!rendered.contains("super-secret"));
	}
}
