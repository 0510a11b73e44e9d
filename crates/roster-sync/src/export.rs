// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Group → organizations → memberships → snapshot file.

use std::collections::HashSet;
use std::path::PathBuf;

use roster_platform::{MembershipResource, OrgSummary, PlatformApi, PlatformError};
use roster_snapshot::{
	write_document, ExportDocument, FileNamer, MembershipRecord, UserAggregator, UserIdentity,
	UNKNOWN_ROLE,
};
use tracing::{debug, info, instrument, warn};

use crate::error::GroupSkip;

/// Characters of a failed response body kept in warnings.
const BODY_EXCERPT_CHARS: usize = 200;

/// Splits a comma-separated id list, trimming whitespace and dropping empty
/// entries and repeats (first occurrence wins).
pub fn parse_group_ids(raw: &str) -> Vec<String> {
	let mut seen = HashSet::new();
	raw.split(',')
		.map(str::trim)
		.filter(|id| !id.is_empty())
		.filter(|id| seen.insert(id.to_string()))
		.map(str::to_string)
		.collect()
}

/// A group's aggregated memberships, before it is written anywhere.
#[derive(Debug)]
pub struct CollectedGroup {
	pub document: ExportDocument,
	pub org_count: usize,
	/// Organizations whose membership listing failed and are absent from
	/// the document.
	pub failed_orgs: Vec<String>,
	/// Membership records dropped for lacking a user id.
	pub dropped_records: usize,
}

#[derive(Debug)]
pub struct GroupExport {
	pub group_id: String,
	pub group_name: String,
	pub path: PathBuf,
	pub users: usize,
	pub memberships: usize,
	pub org_count: usize,
	pub failed_orgs: Vec<String>,
}

#[derive(Debug)]
pub enum GroupOutcome {
	Written(GroupExport),
	Skipped { group_id: String, reason: GroupSkip },
}

#[derive(Debug, Default)]
pub struct ExportReport {
	pub outcomes: Vec<GroupOutcome>,
}

impl ExportReport {
	pub fn written(&self) -> impl Iterator<Item = &GroupExport> {
		self.outcomes.iter().filter_map(|o| match o {
			GroupOutcome::Written(export) => Some(export),
			GroupOutcome::Skipped { .. } => None,
		})
	}

	pub fn skipped_count(&self) -> usize {
		self.outcomes
			.iter()
			.filter(|o| matches!(o, GroupOutcome::Skipped { .. }))
			.count()
	}

	pub fn failed_org_count(&self) -> usize {
		self.written().map(|e| e.failed_orgs.len()).sum()
	}

	pub fn user_count(&self) -> usize {
		self.written().map(|e| e.users).sum()
	}
}

/// Exports groups one after another into `output_dir`.
pub struct Exporter<'a> {
	api: &'a dyn PlatformApi,
	output_dir: PathBuf,
	namer: FileNamer,
}

impl<'a> Exporter<'a> {
	pub fn new(api: &'a dyn PlatformApi, output_dir: impl Into<PathBuf>) -> Self {
		Self {
			api,
			output_dir: output_dir.into(),
			namer: FileNamer::new(),
		}
	}

	/// Exports every group in order. A group that fails is reported and the
	/// batch moves on.
	pub async fn run(&mut self, group_ids: &[String]) -> ExportReport {
		info!(groups = group_ids.len(), ids = %group_ids.join(", "), "starting export batch");

		let mut report = ExportReport::default();
		for group_id in group_ids {
			let outcome = self.export_group(group_id).await;
			if let GroupOutcome::Skipped { group_id, reason } = &outcome {
				warn!(group_id = %group_id, reason = %reason, "group skipped");
			}
			report.outcomes.push(outcome);
		}

		info!(
			written = report.written().count(),
			skipped = report.skipped_count(),
			failed_orgs = report.failed_org_count(),
			users = report.user_count(),
			"export batch finished"
		);
		report
	}

	#[instrument(skip(self))]
	pub async fn export_group(&mut self, group_id: &str) -> GroupOutcome {
		let collected = match self.collect_group(group_id).await {
			Ok(collected) => collected,
			Err(reason) => {
				return GroupOutcome::Skipped {
					group_id: group_id.to_string(),
					reason,
				}
			}
		};

		let document = &collected.document;
		let file = self.namer.name_for(&document.group_name, group_id);
		if file.disambiguated {
			warn!(
				group_name = %document.group_name,
				file = %file.file_name,
				"another group in this batch already uses this file name, appending the group id"
			);
		}
		let path = self.output_dir.join(&file.file_name);

		if let Err(e) = write_document(&path, document) {
			return GroupOutcome::Skipped {
				group_id: group_id.to_string(),
				reason: GroupSkip::Write(e),
			};
		}

		info!(
			group_name = %document.group_name,
			path = %path.display(),
			users = document.users.len(),
			dropped_records = collected.dropped_records,
			"group snapshot written"
		);

		GroupOutcome::Written(GroupExport {
			group_id: group_id.to_string(),
			group_name: document.group_name.clone(),
			path,
			users: document.users.len(),
			memberships: document.membership_count(),
			org_count: collected.org_count,
			failed_orgs: collected.failed_orgs,
		})
	}

	/// Fetches and aggregates a group without touching the filesystem.
	pub async fn collect_group(&self, group_id: &str) -> Result<CollectedGroup, GroupSkip> {
		info!(group_id = %group_id, "fetching group");
		let group = self.api.list_group_orgs(group_id).await.map_err(|e| {
			warn!(
				group_id = %group_id,
				status = ?e.status(),
				error = %e,
				"failed to fetch group"
			);
			GroupSkip::Listing(e)
		})?;

		info!(
			group_id = %group_id,
			group_name = %group.name,
			orgs = group.orgs.len(),
			"fetched group"
		);
		if group.orgs.is_empty() {
			return Err(GroupSkip::NoOrganizations);
		}

		let mut aggregator = UserAggregator::new();
		let mut failed_orgs = Vec::new();
		let mut dropped_records = 0;

		for org in &group.orgs {
			info!(org_id = %org.id, org_name = %org.name, "processing organization");
			match self.api.list_org_memberships(&org.id).await {
				Ok(memberships) => {
					dropped_records += aggregate_org(&mut aggregator, org, memberships);
				}
				Err(e) => {
					warn_org_failure(org, &e);
					failed_orgs.push(org.id.clone());
				}
			}
		}

		Ok(CollectedGroup {
			document: aggregator.into_document(group_id, group.name),
			org_count: group.orgs.len(),
			failed_orgs,
			dropped_records,
		})
	}
}

/// Folds one organization's memberships into `aggregator`; returns how many
/// records were dropped for lacking a user id.
fn aggregate_org(
	aggregator: &mut UserAggregator,
	org: &OrgSummary,
	memberships: Vec<MembershipResource>,
) -> usize {
	let mut dropped = 0;
	for membership in memberships {
		let Some(user_id) = membership.user_id() else {
			debug!(org_id = %org.id, "membership without user id dropped");
			dropped += 1;
			continue;
		};

		let attributes = membership.user_attributes();
		let identity = UserIdentity {
			id: user_id.to_string(),
			name: attributes.name,
			username: attributes.username,
			email: attributes.email,
		};
		let record = MembershipRecord {
			org_id: org.id.clone(),
			org_name: org.name.clone(),
			role: membership.role_name().unwrap_or(UNKNOWN_ROLE).to_string(),
			role_public_id: membership.role_public_id().map(str::to_string),
		};
		aggregator.record(identity, record);
	}
	dropped
}

fn warn_org_failure(org: &OrgSummary, err: &PlatformError) {
	match err.status() {
		Some(status) => warn!(
			org_id = %org.id,
			status,
			body = %err.body_excerpt(BODY_EXCERPT_CHARS).unwrap_or_default(),
			"failed to fetch memberships for organization"
		),
		None => warn!(
			org_id = %org.id,
			error = %err,
			"failed to fetch memberships for organization"
		),
	}
}
