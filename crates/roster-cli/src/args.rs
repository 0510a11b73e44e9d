// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::time::Duration;

use roster_common_config::{
	PlatformConfig, SecretString, DEFAULT_REST_API_VERSION, DEFAULT_REST_BASE_URL,
	DEFAULT_V1_BASE_URL,
};

/// Endpoint overrides, mostly useful for pointing at a staging or mock API.
#[derive(clap::Args, Debug, Clone)]
pub struct PlatformArgs {
	/// Base URL of the v1 API (group listing, provisioning)
	#[arg(long, env = "ROSTER_V1_BASE_URL", default_value = DEFAULT_V1_BASE_URL)]
	pub v1_base_url: String,

	/// Base URL of the REST API (membership listing)
	#[arg(long, env = "ROSTER_REST_BASE_URL", default_value = DEFAULT_REST_BASE_URL)]
	pub rest_base_url: String,

	/// Date-versioned REST API release
	#[arg(long, env = "ROSTER_REST_API_VERSION", default_value = DEFAULT_REST_API_VERSION)]
	pub rest_api_version: String,

	/// Per-request timeout in seconds
	#[arg(long, env = "ROSTER_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
	pub request_timeout_secs: u64,
}

impl PlatformArgs {
	pub fn into_config(self, token: SecretString) -> PlatformConfig {
		PlatformConfig::new(token)
			.with_v1_base_url(self.v1_base_url)
			.with_rest_base_url(self.rest_base_url)
			.with_rest_api_version(self.rest_api_version)
			.with_request_timeout(Duration::from_secs(self.request_timeout_secs))
	}
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogLevel {
	Trace,
	Debug,
	#[default]
	Info,
	Warn,
	Error,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LoggingArgs {
	/// Log level (RUST_LOG takes precedence)
	#[arg(short, long, env = "ROSTER_LOG_LEVEL", value_enum, default_value_t = LogLevel::Info)]
	pub log_level: LogLevel,

	/// Output logs as JSON
	#[arg(long)]
	pub json_logs: bool,
}
