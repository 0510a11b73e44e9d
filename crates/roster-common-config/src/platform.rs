// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Endpoint and credential configuration for the upstream platform API.

use std::time::Duration;

use crate::secret::SecretString;

/// Environment variable holding the API token (`SNYK_TOKEN_FILE` also works).
pub const TOKEN_ENV_VAR: &str = "SNYK_TOKEN";

pub const DEFAULT_V1_BASE_URL: &str = "https://api.snyk.io/v1";
pub const DEFAULT_REST_BASE_URL: &str = "https://api.snyk.io/rest";
/// Date-versioned REST release the membership listing is pinned to.
pub const DEFAULT_REST_API_VERSION: &str = "2024-11-04";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Largest page size the REST API accepts.
pub const DEFAULT_MEMBERSHIP_PAGE_LIMIT: u32 = 100;

/// Everything a platform client needs, built once at process start and
/// passed down explicitly.
#[derive(Debug, Clone)]
pub struct PlatformConfig {
	pub token: SecretString,
	pub v1_base_url: String,
	pub rest_base_url: String,
	pub rest_api_version: String,
	pub request_timeout: Duration,
	pub membership_page_limit: u32,
}

impl PlatformConfig {
	/// Configuration with the production endpoints and the given token.
	pub fn new(token: SecretString) -> Self {
		Self {
			token,
			v1_base_url: DEFAULT_V1_BASE_URL.to_string(),
			rest_base_url: DEFAULT_REST_BASE_URL.to_string(),
			rest_api_version: DEFAULT_REST_API_VERSION.to_string(),
			request_timeout: DEFAULT_REQUEST_TIMEOUT,
			membership_page_limit: DEFAULT_MEMBERSHIP_PAGE_LIMIT,
		}
	}

	pub fn with_v1_base_url(mut self, url: impl Into<String>) -> Self {
		self.v1_base_url = trim_base(url.into());
		self
	}

	pub fn with_rest_base_url(mut self, url: impl Into<String>) -> Self {
		self.rest_base_url = trim_base(url.into());
		self
	}

	pub fn with_rest_api_version(mut self, version: impl Into<String>) -> Self {
		self.rest_api_version = version.into();
		self
	}

	pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
		self.request_timeout = timeout;
		self
	}

	pub fn with_membership_page_limit(mut self, limit: u32) -> Self {
		self.membership_page_limit = limit;
		self
	}
}

fn trim_base(url: String) -> String {
	url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_uses_production_defaults() {
		let config = PlatformConfig::new(SecretString::from("t"));
		assert_eq!(config.v1_base_url, DEFAULT_V1_BASE_URL);
		assert_eq!(config.rest_base_url, DEFAULT_REST_BASE_URL);
		assert_eq!(config.rest_api_version, "2024-11-04");
		assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
		assert_eq!(config.membership_page_limit, 100);
	}

	#[test]
	fn base_urls_lose_trailing_slash() {
		let config = PlatformConfig::new(SecretString::from("t"))
			.with_v1_base_url("http://127.0.0.1:9000/v1/")
			.with_rest_base_url("http://127.0.0.1:9000/rest//");
		assert_eq!(config.v1_base_url, "http://127.0.0.1:9000/v1");
		assert_eq!(config.rest_base_url, "http://127.0.0.1:9000/rest");
	}

	#[test]
	fn debug_output_hides_token() {
		let config = PlatformConfig::new(SecretString::from("super-secret-token"));
		let rendered = format!("{config:?}");
		assert!(!rendered.contains("super-secret-token"));
		assert!(rendered.contains("[REDACTED]"));
	}
}
