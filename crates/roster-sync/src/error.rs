// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use roster_platform::PlatformError;
use roster_snapshot::SnapshotError;
use thiserror::Error;

/// Why a group produced no snapshot. None of these stop a batch.
#[derive(Debug, Error)]
pub enum GroupSkip {
	#[error("failed to list organizations: {0}")]
	Listing(#[source] PlatformError),

	#[error("no organizations found")]
	NoOrganizations,

	#[error("failed to write snapshot: {0}")]
	Write(#[source] SnapshotError),
}
