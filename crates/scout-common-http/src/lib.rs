// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for Scout.
//!
//! This crate provides a pre-configured HTTP client builder with a
//! consistent User-Agent header across all outbound requests.

mod client;

pub use client::{builder, new_client_with_timeout, user_agent};
