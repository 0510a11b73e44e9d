// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Membership export and replay.
//!
//! [`Exporter`] walks group → organizations → memberships and writes one
//! snapshot per group. [`Importer`] replays a snapshot as provisioning calls.
//! Both run strictly one request at a time and contain failures at the
//! smallest unit (group, organization, membership); only the caller decides
//! what is fatal.

pub mod error;
pub mod export;
pub mod import;

#[cfg(test)]
mod fake;

pub use error::GroupSkip;
pub use export::{parse_group_ids, CollectedGroup, ExportReport, Exporter, GroupExport, GroupOutcome};
pub use import::{Importer, ProvisionFailure, ProvisionReport};
