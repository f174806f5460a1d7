// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Core tool contract types shared across Scout crates.

pub mod error;
pub mod tool;

pub use error::ToolError;
pub use tool::ToolDefinition;
