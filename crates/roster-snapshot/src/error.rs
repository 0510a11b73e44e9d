// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
	#[error("snapshot file not found: {0}")]
	NotFound(PathBuf),

	#[error("failed to access snapshot file {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("snapshot file {path} is not a valid export document: {source}")]
	InvalidJson {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}
