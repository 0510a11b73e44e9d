// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Snapshot format for group memberships.
//!
//! An [`ExportDocument`] is the only thing the exporter and importer share:
//! one group, its users in first-seen order, and each user's memberships
//! across the group's organizations.

pub mod aggregate;
pub mod document;
pub mod error;
pub mod io;
pub mod naming;

pub use aggregate::{UserAggregator, UserIdentity};
pub use document::{ExportDocument, MembershipRecord, RoleSelector, UserRecord, UNKNOWN_ROLE};
pub use error::SnapshotError;
pub use io::{read_document, write_document};
pub use naming::{sanitize_file_stem, FileName, FileNamer};
