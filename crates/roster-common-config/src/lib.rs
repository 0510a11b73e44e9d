// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Configuration primitives shared by the roster exporter and importer.
//!
//! - [`Secret<T>`]: wrapper that keeps the API token out of logs
//! - [`require_secret_env`]: loads the token from `VAR` or `VAR_FILE`
//! - [`PlatformConfig`]: the endpoint/credential value built once at startup

pub mod env;
pub mod platform;
pub mod secret;

pub use env::{load_secret_env, require_secret_env, RequiredSecretError, SecretEnvError};
pub use platform::{
	PlatformConfig, DEFAULT_MEMBERSHIP_PAGE_LIMIT, DEFAULT_REQUEST_TIMEOUT, DEFAULT_REST_API_VERSION,
	DEFAULT_REST_BASE_URL, DEFAULT_V1_BASE_URL, TOKEN_ENV_VAR,
};
pub use secret::{Secret, SecretString, REDACTED};
