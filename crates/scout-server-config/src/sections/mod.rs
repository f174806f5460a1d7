// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Configuration sections, one module per concern.

pub mod http;
pub mod logging;
pub mod search;

pub use http::{HttpConfig, HttpConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use search::{GoogleCseConfig, GoogleCseConfigLayer, SearchConfig, SearchConfigLayer};
