// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Google Custom Search Engine client for Scout.
//!
//! This crate provides a typed Rust client for the Google CSE API,
//! encapsulating credential resolution, HTTP communication, and response
//! parsing. Two authentication modes are supported: an API key plus
//! search-engine id pair, and a Google service-account key file exchanged
//! for a short-lived bearer token.

pub mod auth;
pub mod client;
pub mod credentials;
pub mod error;
pub mod types;

pub use auth::ServiceAccountKey;
pub use client::CseClient;
pub use credentials::{resolve, CredentialConfig, CredentialMode, ResolvedCredentials};
pub use error::{CredentialError, CseError};
pub use types::{ImageInfo, SearchKind, SearchRequest, SearchResponse, SearchResultItem};
