// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Request and response types for the platform API.

use serde::{Deserialize, Serialize};

/// `GET /group/{id}/orgs` body.
#[derive(Debug, Deserialize)]
pub(crate) struct GroupOrgsResponse {
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub orgs: Vec<OrgSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrgSummary {
	pub id: String,
	pub name: String,
}

/// A group's display name and its organizations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupOrgs {
	pub group_id: String,
	/// Falls back to `group_id` when the API omits the name.
	pub name: String,
	pub orgs: Vec<OrgSummary>,
}

/// One JSON:API page of `GET /orgs/{id}/memberships`.
#[derive(Debug, Deserialize)]
pub(crate) struct MembershipPage {
	#[serde(default)]
	pub data: Vec<MembershipResource>,
	#[serde(default)]
	pub links: Option<PageLinks>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PageLinks {
	#[serde(default)]
	pub next: Option<String>,
}

/// A membership with its user and role embedded as relationships.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MembershipResource {
	#[serde(default)]
	pub id: Option<String>,
	#[serde(default)]
	pub relationships: Option<MembershipRelationships>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MembershipRelationships {
	#[serde(default)]
	pub user: Option<UserRelationship>,
	#[serde(default)]
	pub role: Option<RoleRelationship>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserRelationship {
	#[serde(default)]
	pub data: Option<UserData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserData {
	#[serde(default)]
	pub id: Option<String>,
	#[serde(default)]
	pub attributes: Option<UserAttributes>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserAttributes {
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub username: Option<String>,
	#[serde(default)]
	pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoleRelationship {
	#[serde(default)]
	pub data: Option<RoleData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoleData {
	#[serde(default)]
	pub id: Option<String>,
	#[serde(default)]
	pub attributes: Option<RoleAttributes>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoleAttributes {
	#[serde(default)]
	pub name: Option<String>,
}

impl MembershipResource {
	fn user(&self) -> Option<&UserData> {
		self.relationships.as_ref()?.user.as_ref()?.data.as_ref()
	}

	fn role(&self) -> Option<&RoleData> {
		self.relationships.as_ref()?.role.as_ref()?.data.as_ref()
	}

	/// The embedded user's id; `None` when missing or empty.
	pub fn user_id(&self) -> Option<&str> {
		self.user()?.id.as_deref().filter(|id| !id.is_empty())
	}

	pub fn user_attributes(&self) -> UserAttributes {
		self.user()
			.and_then(|u| u.attributes.clone())
			.unwrap_or_default()
	}

	/// Stable machine identifier of the granted role.
	pub fn role_public_id(&self) -> Option<&str> {
		self.role()?.id.as_deref().filter(|id| !id.is_empty())
	}

	/// Human-readable role name.
	pub fn role_name(&self) -> Option<&str> {
		self.role()?.attributes.as_ref()?.name.as_deref()
	}
}

/// `POST /org/{id}/provision` body. Exactly one of `rolePublicId` and
/// `role` is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvisionRequest {
	pub email: String,
	#[serde(rename = "rolePublicId", skip_serializing_if = "Option::is_none")]
	pub role_public_id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub role: Option<String>,
}

impl ProvisionRequest {
	pub fn with_role_public_id(email: impl Into<String>, role_public_id: impl Into<String>) -> Self {
		Self {
			email: email.into(),
			role_public_id: Some(role_public_id.into()),
			role: None,
		}
	}

	pub fn with_role_name(email: impl Into<String>, role: impl Into<String>) -> Self {
		Self {
			email: email.into(),
			role_public_id: None,
			role: Some(role.into()),
		}
	}
}

/// Accepted results of a provisioning call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
	/// 200 or 201: the user now holds the role in the organization.
	Provisioned,
	/// 409: the user was already provisioned there.
	AlreadyMember,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn parses_membership_page() {
		let page: MembershipPage = serde_json::from_value(json!({
			"data": [{
				"id": "m1",
				"type": "org_membership",
				"relationships": {
					"user": { "data": {
						"id": "u1",
						"type": "user",
						"attributes": { "name": "User One", "username": "uone", "email": "a@x.com" }
					}},
					"role": { "data": {
						"id": "radm",
						"type": "org_role",
						"attributes": { "name": "Admin" }
					}}
				}
			}],
			"links": { "next": "/orgs/o1/memberships?starting_after=abc" }
		}))
		.unwrap();

		let m = &page.data[0];
		assert_eq!(m.user_id(), Some("u1"));
		assert_eq!(m.user_attributes().email.as_deref(), Some("a@x.com"));
		assert_eq!(m.role_public_id(), Some("radm"));
		assert_eq!(m.role_name(), Some("Admin"));
		assert_eq!(
			page.links.unwrap().next.as_deref(),
			Some("/orgs/o1/memberships?starting_after=abc")
		);
	}

	#[test]
	fn tolerates_missing_relationships() {
		let page: MembershipPage = serde_json::from_value(json!({
			"data": [
				{ "id": "m1" },
				{ "relationships": { "user": { "data": null } } },
				{ "relationships": { "user": { "data": { "id": "" } }, "role": {} } }
			]
		}))
		.unwrap();

		assert!(page.links.is_none());
		for m in &page.data {
			assert_eq!(m.user_id(), None);
			assert_eq!(m.role_name(), None);
			assert_eq!(m.role_public_id(), None);
		}
	}

	#[test]
	fn group_orgs_name_is_optional() {
		let resp: GroupOrgsResponse = serde_json::from_value(json!({
			"orgs": [{ "id": "o1", "name": "Org One", "slug": "org-one" }]
		}))
		.unwrap();
		assert!(resp.name.is_none());
		assert_eq!(resp.orgs.len(), 1);
	}

	#[test]
	fn provision_request_sends_one_role_key() {
		let by_id = serde_json::to_value(ProvisionRequest::with_role_public_id("a@x.com", "radm"))
			.unwrap();
		assert_eq!(by_id, json!({ "email": "a@x.com", "rolePublicId": "radm" }));

		let by_name = serde_json::to_value(ProvisionRequest::with_role_name("a@x.com", "Admin"))
			.unwrap();
		assert_eq!(by_name, json!({ "email": "a@x.com", "role": "Admin" }));
	}
}
