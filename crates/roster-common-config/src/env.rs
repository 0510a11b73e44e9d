// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! API token lookup.
//!
//! `SNYK_TOKEN_FILE` (or `{VAR}_FILE` in general) points at a mounted secret
//! and beats the plain variable. Tokens never leave this module unwrapped.

use std::path::{Path, PathBuf};
use std::{env, fs};

use thiserror::Error;

use crate::secret::SecretString;

#[derive(Debug, Error)]
pub enum SecretEnvError {
	#[error("cannot read token file {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("{var} is set but empty")]
	EmptyPath { var: String },
}

#[derive(Debug, Error)]
pub enum RequiredSecretError {
	#[error("no API token: set {var} or point {file_var} at a file holding it")]
	Missing { var: String, file_var: String },

	#[error(transparent)]
	Load(#[from] SecretEnvError),
}

fn file_var_name(var: &str) -> String {
	format!("{var}_FILE")
}

/// File content minus one line ending (`\n` or `\r\n`).
fn read_token_file(path: &Path) -> Result<SecretString, SecretEnvError> {
	let content = fs::read_to_string(path).map_err(|source| SecretEnvError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	let token = content
		.strip_suffix("\r\n")
		.or_else(|| content.strip_suffix('\n'))
		.unwrap_or(&content);
	Ok(SecretString::from(token))
}

/// `None` when neither `{var}_FILE` nor a non-empty `{var}` is set.
pub fn load_secret_env(var: &str) -> Result<Option<SecretString>, SecretEnvError> {
	let file_var = file_var_name(var);
	match env::var_os(&file_var) {
		Some(path) if path.is_empty() => Err(SecretEnvError::EmptyPath { var: file_var }),
		Some(path) => read_token_file(Path::new(&path)).map(Some),
		None => Ok(env::var(var)
			.ok()
			.filter(|value| !value.is_empty())
			.map(SecretString::new)),
	}
}

pub fn require_secret_env(var: &str) -> Result<SecretString, RequiredSecretError> {
	load_secret_env(var)?.ok_or_else(|| RequiredSecretError::Missing {
		var: var.to_string(),
		file_var: file_var_name(var),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use tempfile::NamedTempFile;

	#[test]
	fn returns_none_when_not_set() {
		let var = "ROSTER_TEST_UNSET_TOKEN";
		env::remove_var(var);
		env::remove_var(format!("{var}_FILE"));

		assert!(load_secret_env(var).unwrap().is_none());
	}

	#[test]
	fn empty_value_counts_as_unset() {
		let var = "ROSTER_TEST_EMPTY_TOKEN";
		env::set_var(var, "");
		env::remove_var(format!("{var}_FILE"));

		assert!(load_secret_env(var).unwrap().is_none());

		env::remove_var(var);
	}

	#[test]
	fn reads_direct_value() {
		let var = "ROSTER_TEST_DIRECT_TOKEN";
		env::set_var(var, "direct-token");
		env::remove_var(format!("{var}_FILE"));

		let secret = load_secret_env(var).unwrap().unwrap();
		assert_eq!(secret.expose(), "direct-token");

		env::remove_var(var);
	}

	/// The file variant wins over the direct value, and the trailing newline
	/// an editor leaves behind is not part of the token.
	#[test]
	fn file_var_takes_precedence_and_strips_newline() {
		let var = "ROSTER_TEST_FILE_TOKEN";
		let mut file = NamedTempFile::new().unwrap();
		writeln!(file, "file-token").unwrap();

		env::set_var(var, "direct-token");
		env::set_var(format!("{var}_FILE"), file.path().to_str().unwrap());

		let secret = load_secret_env(var).unwrap().unwrap();
		assert_eq!(secret.expose(), "file-token");

		env::remove_var(var);
		env::remove_var(format!("{var}_FILE"));
	}

	#[test]
	fn file_with_crlf_ending() {
		let var = "ROSTER_TEST_CRLF_TOKEN";
		let mut file = NamedTempFile::new().unwrap();
		write!(file, "crlf-token\r\n").unwrap();

		env::remove_var(var);
		env::set_var(format!("{var}_FILE"), file.path());

		let secret = load_secret_env(var).unwrap().unwrap();
		assert_eq!(secret.expose(), "crlf-token");

		env::remove_var(format!("{var}_FILE"));
	}

	#[test]
	fn missing_file_is_an_error() {
		let var = "ROSTER_TEST_MISSING_FILE_TOKEN";
		env::set_var(format!("{var}_FILE"), "/nonexistent/roster/token");

		let err = load_secret_env(var).unwrap_err();
		assert!(matches!(err, SecretEnvError::Io { .. }));

		env::remove_var(format!("{var}_FILE"));
	}

	#[test]
	fn empty_file_path_is_an_error() {
		let var = "ROSTER_TEST_EMPTY_PATH_TOKEN";
		env::set_var(format!("{var}_FILE"), "");

		let err = load_secret_env(var).unwrap_err();
		assert!(matches!(err, SecretEnvError::EmptyPath { .. }));

		env::remove_var(format!("{var}_FILE"));
	}

	#[test]
	fn require_reports_both_variable_names() {
		let var = "ROSTER_TEST_REQUIRED_TOKEN";
		env::remove_var(var);
		env::remove_var(format!("{var}_FILE"));

		let err = require_secret_env(var).unwrap_err();
		assert!(matches!(err, RequiredSecretError::Missing { .. }));
		let message = err.to_string();
		assert!(message.contains("ROSTER_TEST_REQUIRED_TOKEN"));
		assert!(message.contains("ROSTER_TEST_REQUIRED_TOKEN_FILE"));
	}
}
