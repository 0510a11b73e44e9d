// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use async_trait::async_trait;

use crate::error::PlatformError;
use crate::types::{GroupOrgs, MembershipResource, ProvisionOutcome, ProvisionRequest};

/// The platform operations the exporter and importer depend on.
#[async_trait]
pub trait PlatformApi: Send + Sync {
	/// Lists a group's organizations in one request.
	async fn list_group_orgs(&self, group_id: &str) -> Result<GroupOrgs, PlatformError>;

	/// Lists every membership of an organization, following pagination.
	async fn list_org_memberships(
		&self,
		org_id: &str,
	) -> Result<Vec<MembershipResource>, PlatformError>;

	/// Grants a user a role in an organization. A conflict answer is an
	/// [`ProvisionOutcome::AlreadyMember`] success, not an error.
	async fn provision_user(
		&self,
		org_id: &str,
		request: &ProvisionRequest,
	) -> Result<ProvisionOutcome, PlatformError>;
}
