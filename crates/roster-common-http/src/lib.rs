// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client for roster.
//!
//! Every request leaves with the same User-Agent so upstream logs can tell
//! roster traffic apart from other API consumers.

mod client;

pub use client::{builder, new_client_with_timeout, user_agent};
