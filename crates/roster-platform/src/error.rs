// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the platform client.

use thiserror::Error;

/// Errors that can occur when talking to the platform API.
#[derive(Debug, Error)]
pub enum PlatformError {
	/// The HTTP client could not be constructed.
	#[error("failed to build HTTP client: {0}")]
	ClientBuild(#[source] reqwest::Error),

	/// Network-level error during HTTP communication.
	#[error("network error: {0}")]
	Network(#[source] reqwest::Error),

	#[error("request timed out")]
	Timeout,

	/// The API answered with a status the caller does not accept.
	#[error("platform API error: {status} - {body}")]
	Api { status: u16, body: String },

	/// The response body did not match the expected shape.
	#[error("invalid response from platform: {0}")]
	InvalidResponse(String),

	#[error("invalid URL: {0}")]
	InvalidUrl(String),
}

impl PlatformError {
	pub(crate) fn from_transport(err: reqwest::Error) -> Self {
		if err.is_timeout() {
			PlatformError::Timeout
		} else {
			PlatformError::Network(err)
		}
	}

	/// HTTP status for [`PlatformError::Api`].
	pub fn status(&self) -> Option<u16> {
		match self {
			PlatformError::Api { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// Response body for [`PlatformError::Api`], cut to at most `max_chars`
	/// characters.
	pub fn body_excerpt(&self, max_chars: usize) -> Option<String> {
		match self {
			PlatformError::Api { body, .. } => Some(body.chars().take(max_chars).collect()),
			_ => None,
		}
	}
}
