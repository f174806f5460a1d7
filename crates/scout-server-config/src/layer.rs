// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The mergeable configuration layer produced by each source.

use serde::{Deserialize, Serialize};

use crate::sections::{HttpConfigLayer, LoggingConfigLayer, SearchConfigLayer};

/// One layer of configuration; sources produce these and they are merged
/// in precedence order before being finalized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfigLayer {
	#[serde(default)]
	pub http: Option<HttpConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
	#[serde(default)]
	pub search: Option<SearchConfigLayer>,
}

impl ServerConfigLayer {
	/// Merges `other` on top of this layer; `other`'s set fields win.
	pub fn merge(&mut self, other: Self) {
		if let Some(other_http) = other.http {
			self.http.get_or_insert_with(Default::default).merge(other_http);
		}
		if let Some(other_logging) = other.logging {
			self.logging
				.get_or_insert_with(Default::default)
				.merge(other_logging);
		}
		if let Some(other_search) = other.search {
			self.search
				.get_or_insert_with(Default::default)
				.merge(other_search);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_merge_overlay_wins() {
		let mut base = ServerConfigLayer {
			http: Some(HttpConfigLayer {
				host: Some("127.0.0.1".to_string()),
				port: Some(8000),
			}),
			logging: None,
			search: None,
		};
		base.merge(ServerConfigLayer {
			http: Some(HttpConfigLayer {
				host: None,
				port: Some(9000),
			}),
			logging: Some(LoggingConfigLayer {
				level: Some("debug".to_string()),
			}),
			search: None,
		});

		let http = base.http.unwrap();
		assert_eq!(http.host, Some("127.0.0.1".to_string()));
		assert_eq!(http.port, Some(9000));
		assert_eq!(base.logging.unwrap().level, Some("debug".to_string()));
	}

	#[test]
	fn test_deserialize_partial_toml() {
		let layer: ServerConfigLayer = toml::from_str(
			r#"
[http]
port = 9100

[search.google_cse]
search_engine_id = "abc"
"#,
		)
		.unwrap();

		assert_eq!(layer.http.unwrap().port, Some(9100));
		assert!(layer.logging.is_none());
		let search = layer.search.unwrap();
		assert_eq!(
			search.google_cse.unwrap().search_engine_id,
			Some("abc".to_string())
		);
	}
}
