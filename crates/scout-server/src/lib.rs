// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP server exposing the Scout search tools.
//!
//! The calling-protocol surface is deliberately thin: the registry in
//! [`scout_server_tools`] owns dispatch and error semantics; this crate
//! only maps tool results onto HTTP.

pub mod api;
pub mod error;
pub mod routes;

pub use api::{create_app_state, create_router, AppState};
