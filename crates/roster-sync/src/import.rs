// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Snapshot → provisioning calls.
//!
//! Every (user with email, membership) pair becomes exactly one call. A
//! conflict answer means the user is already there and counts as success.
//! Nothing is retried and no failure stops the replay.

use roster_platform::{PlatformApi, PlatformError, ProvisionOutcome, ProvisionRequest};
use roster_snapshot::{ExportDocument, MembershipRecord, RoleSelector, UserRecord};
use tracing::{error, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionFailure {
	pub email: String,
	pub org_id: String,
	/// HTTP status when the platform answered; `None` for transport errors
	/// and unusable records.
	pub status: Option<u16>,
	pub message: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProvisionReport {
	pub provisioned: usize,
	pub already_member: usize,
	pub failures: Vec<ProvisionFailure>,
	/// Users without an email; none of their memberships were attempted.
	pub skipped_users: Vec<String>,
	/// Calls that a dry run would have made.
	pub planned: usize,
}

impl ProvisionReport {
	/// Calls that ended with the user holding the role.
	pub fn succeeded(&self) -> usize {
		self.provisioned + self.already_member
	}

	pub fn failed(&self) -> usize {
		self.failures.len()
	}
}

pub struct Importer<'a> {
	api: &'a dyn PlatformApi,
	dry_run: bool,
}

impl<'a> Importer<'a> {
	pub fn new(api: &'a dyn PlatformApi) -> Self {
		Self {
			api,
			dry_run: false,
		}
	}

	/// Log the calls instead of making them.
	pub fn dry_run(mut self, dry_run: bool) -> Self {
		self.dry_run = dry_run;
		self
	}

	pub async fn run(&self, document: &ExportDocument) -> ProvisionReport {
		info!(
			group_id = %document.group_id,
			users = document.users.len(),
			dry_run = self.dry_run,
			"starting provisioning"
		);

		let mut report = ProvisionReport::default();
		for user in &document.users {
			self.provision_user(user, &mut report).await;
		}

		info!(
			provisioned = report.provisioned,
			already_member = report.already_member,
			failed = report.failed(),
			skipped_users = report.skipped_users.len(),
			planned = report.planned,
			"provisioning finished"
		);
		report
	}

	async fn provision_user(&self, user: &UserRecord, report: &mut ProvisionReport) {
		let Some(email) = user.provisioning_email() else {
			info!(user_id = %user.id, "skipping user without email");
			report.skipped_users.push(user.id.clone());
			return;
		};

		info!(email = %email, memberships = user.memberships.len(), "processing user");
		for membership in &user.memberships {
			self.provision_membership(email, membership, report).await;
		}
	}

	async fn provision_membership(
		&self,
		email: &str,
		membership: &MembershipRecord,
		report: &mut ProvisionReport,
	) {
		let org_id = membership.org_id.as_str();
		let Some(request) = build_request(email, membership) else {
			error!(email = %email, org_id = %org_id, "membership has no role to provision");
			report.failures.push(ProvisionFailure {
				email: email.to_string(),
				org_id: org_id.to_string(),
				status: None,
				message: "membership has neither role_public_id nor role".to_string(),
			});
			return;
		};

		if self.dry_run {
			info!(
				email = %email,
				org_id = %org_id,
				org_name = %membership.org_name,
				role_public_id = ?request.role_public_id,
				role = ?request.role,
				"dry run: would provision"
			);
			report.planned += 1;
			return;
		}

		match self.api.provision_user(org_id, &request).await {
			Ok(ProvisionOutcome::Provisioned) => {
				info!(email = %email, org_id = %org_id, org_name = %membership.org_name, "provisioned");
				report.provisioned += 1;
			}
			Ok(ProvisionOutcome::AlreadyMember) => {
				info!(email = %email, org_id = %org_id, "user already exists in this org");
				report.already_member += 1;
			}
			Err(e) => {
				log_failure(email, org_id, &e);
				report.failures.push(ProvisionFailure {
					email: email.to_string(),
					org_id: org_id.to_string(),
					status: e.status(),
					message: e.to_string(),
				});
			}
		}
	}
}

fn build_request(email: &str, membership: &MembershipRecord) -> Option<ProvisionRequest> {
	Some(match membership.role_selector()? {
		RoleSelector::PublicId(id) => ProvisionRequest::with_role_public_id(email, id),
		RoleSelector::Name(name) => ProvisionRequest::with_role_name(email, name),
	})
}

fn log_failure(email: &str, org_id: &str, err: &PlatformError) {
	match err {
		PlatformError::Api { status, body } => {
			warn!(email = %email, org_id = %org_id, status, body = %body, "provisioning failed")
		}
		other => error!(email = %email, org_id = %org_id, error = %other, "provisioning request failed"),
	}
}
