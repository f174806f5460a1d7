// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Request and response types for the Google CSE API.

use serde::{Deserialize, Serialize};

/// Category of search, determining the result cap and request parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
	General,
	Web,
	Image,
}

impl SearchKind {
	/// Maximum number of results a single request may return for this kind.
	pub const fn max_results(self) -> u32 {
		match self {
			SearchKind::General => 10,
			SearchKind::Web | SearchKind::Image => 5,
		}
	}

	/// Value for the CSE `searchType` query parameter, when one applies.
	///
	/// The API only accepts `image`; web search is the endpoint default
	/// and must not send a `searchType` at all.
	pub(crate) fn search_type(self) -> Option<&'static str> {
		match self {
			SearchKind::Image => Some("image"),
			SearchKind::General | SearchKind::Web => None,
		}
	}
}

/// A search request with the result count already clamped to the kind's cap.
#[derive(Clone, Debug)]
pub struct SearchRequest {
	pub query: String,
	pub num: u32,
	pub kind: SearchKind,
}

impl SearchRequest {
	/// Builds a request, clamping `num` into `1..=kind.max_results()`.
	///
	/// Out-of-range counts are clamped rather than rejected; callers that
	/// over-ask get the first page, callers that ask for less than one
	/// result get one.
	pub fn new(query: impl Into<String>, num: u32, kind: SearchKind) -> Self {
		Self {
			query: query.into(),
			num: num.clamp(1, kind.max_results()),
			kind,
		}
	}
}

/// Response from a search request, with results in upstream order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResponse {
	pub query: String,
	pub results: Vec<SearchResultItem>,
}

/// A single normalized search result.
///
/// Missing optional upstream fields are mapped to empty strings, never
/// absent values, so consumers need no null checks.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResultItem {
	pub title: String,
	pub link: String,
	pub snippet: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub image: Option<ImageInfo>,
}

/// Image metadata carried by image-search results.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImageInfo {
	pub context_link: String,
	pub thumbnail_link: String,
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn caps_per_kind() {
		assert_eq!(SearchKind::General.max_results(), 10);
		assert_eq!(SearchKind::Web.max_results(), 5);
		assert_eq!(SearchKind::Image.max_results(), 5);
	}

	#[test]
	fn only_image_kind_sends_search_type() {
		assert_eq!(SearchKind::Image.search_type(), Some("image"));
		assert_eq!(SearchKind::General.search_type(), None);
		assert_eq!(SearchKind::Web.search_type(), None);
	}

	#[test]
	fn request_clamps_over_ask_to_cap() {
		let request = SearchRequest::new("rust", 20, SearchKind::Image);
		assert_eq!(request.num, 5);
	}

	#[test]
	fn request_clamps_zero_to_one() {
		let request = SearchRequest::new("rust", 0, SearchKind::General);
		assert_eq!(request.num, 1);
	}

	proptest! {
			/// Verifies the clamp invariant: any requested count lands in
			/// `1..=cap` for every search kind.
			#[test]
			fn request_count_always_within_bounds(num in 0u32..1000) {
					for kind in [SearchKind::General, SearchKind::Web, SearchKind::Image] {
							let request = SearchRequest::new("q", num, kind);
							prop_assert!(request.num >= 1);
							prop_assert!(request.num <= kind.max_results());
					}
			}
	}
}
