// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! In-memory [`PlatformApi`] for pipeline tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use roster_platform::types::{
	MembershipRelationships, RoleAttributes, RoleData, RoleRelationship, UserData,
	UserRelationship,
};
use roster_platform::{
	GroupOrgs, MembershipResource, OrgSummary, PlatformApi, PlatformError, ProvisionOutcome,
	ProvisionRequest, UserAttributes,
};

#[derive(Default)]
pub struct FakePlatform {
	groups: HashMap<String, Result<GroupOrgs, u16>>,
	memberships: HashMap<String, Result<Vec<MembershipResource>, u16>>,
	provision_status: HashMap<String, u16>,
	provision_timeouts: HashSet<String>,
	/// (org_id, email) pairs already provisioned; later calls get a conflict.
	provisioned: Mutex<HashSet<(String, String)>>,
	pub calls: Mutex<Vec<(String, ProvisionRequest)>>,
}

impl FakePlatform {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_group(mut self, id: &str, name: &str, orgs: &[(&str, &str)]) -> Self {
		let orgs = orgs
			.iter()
			.map(|(id, name)| OrgSummary {
				id: id.to_string(),
				name: name.to_string(),
			})
			.collect();
		self.groups.insert(
			id.to_string(),
			Ok(GroupOrgs {
				group_id: id.to_string(),
				name: name.to_string(),
				orgs,
			}),
		);
		self
	}

	pub fn with_failing_group(mut self, id: &str, status: u16) -> Self {
		self.groups.insert(id.to_string(), Err(status));
		self
	}

	pub fn with_memberships(mut self, org_id: &str, memberships: Vec<MembershipResource>) -> Self {
		self.memberships.insert(org_id.to_string(), Ok(memberships));
		self
	}

	pub fn with_failing_memberships(mut self, org_id: &str, status: u16) -> Self {
		self.memberships.insert(org_id.to_string(), Err(status));
		self
	}

	pub fn with_provision_status(mut self, org_id: &str, status: u16) -> Self {
		self.provision_status.insert(org_id.to_string(), status);
		self
	}

	/// Provisioning into `org_id` fails as if the request timed out.
	pub fn with_provision_timeout(mut self, org_id: &str) -> Self {
		self.provision_timeouts.insert(org_id.to_string());
		self
	}

	pub fn call_count(&self) -> usize {
		self.calls.lock().unwrap().len()
	}
}

pub fn member(
	user_id: Option<&str>,
	email: Option<&str>,
	role_id: Option<&str>,
	role_name: Option<&str>,
) -> MembershipResource {
	MembershipResource {
		id: None,
		relationships: Some(MembershipRelationships {
			user: Some(UserRelationship {
				data: Some(UserData {
					id: user_id.map(str::to_string),
					attributes: Some(UserAttributes {
						name: user_id.map(|id| format!("User {id}")),
						username: user_id.map(str::to_string),
						email: email.map(str::to_string),
					}),
				}),
			}),
			role: Some(RoleRelationship {
				data: Some(RoleData {
					id: role_id.map(str::to_string),
					attributes: Some(RoleAttributes {
						name: role_name.map(str::to_string),
					}),
				}),
			}),
		}),
	}
}

fn api_error(status: u16) -> PlatformError {
	PlatformError::Api {
		status,
		body: format!("status {status}"),
	}
}

#[async_trait]
impl PlatformApi for FakePlatform {
	async fn list_group_orgs(&self, group_id: &str) -> Result<GroupOrgs, PlatformError> {
		match self.groups.get(group_id) {
			Some(Ok(group)) => Ok(group.clone()),
			Some(Err(status)) => Err(api_error(*status)),
			None => Err(api_error(404)),
		}
	}

	async fn list_org_memberships(
		&self,
		org_id: &str,
	) -> Result<Vec<MembershipResource>, PlatformError> {
		match self.memberships.get(org_id) {
			Some(Ok(memberships)) => Ok(memberships.clone()),
			Some(Err(status)) => Err(api_error(*status)),
			None => Ok(Vec::new()),
		}
	}

	async fn provision_user(
		&self,
		org_id: &str,
		request: &ProvisionRequest,
	) -> Result<ProvisionOutcome, PlatformError> {
		self.calls
			.lock()
			.unwrap()
			.push((org_id.to_string(), request.clone()));

		if self.provision_timeouts.contains(org_id) {
			return Err(PlatformError::Timeout);
		}

		if let Some(status) = self.provision_status.get(org_id) {
			return match status {
				200 | 201 => Ok(ProvisionOutcome::Provisioned),
				409 => Ok(ProvisionOutcome::AlreadyMember),
				other => Err(api_error(*other)),
			};
		}

		let key = (org_id.to_string(), request.email.clone());
		if self.provisioned.lock().unwrap().insert(key) {
			Ok(ProvisionOutcome::Provisioned)
		} else {
			Ok(ProvisionOutcome::AlreadyMember)
		}
	}
}
