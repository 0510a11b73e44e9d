// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

/// Role name recorded when the platform returns a membership without one.
pub const UNKNOWN_ROLE: &str = "unknown";

/// One exported group. Optional keys default on read so hand-edited files
/// still load; on write every key is present, `null` included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
	#[serde(default)]
	pub group_id: String,
	#[serde(default)]
	pub group_name: String,
	#[serde(default)]
	pub users: Vec<UserRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
	pub id: String,
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub username: Option<String>,
	/// Required for provisioning; users without one are exported but never
	/// replayed.
	#[serde(default)]
	pub email: Option<String>,
	#[serde(default)]
	pub memberships: Vec<MembershipRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipRecord {
	pub org_id: String,
	#[serde(default)]
	pub org_name: String,
	#[serde(default)]
	pub role: String,
	#[serde(default)]
	pub role_public_id: Option<String>,
}

/// How a membership's role is named when provisioning it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleSelector {
	/// Stable machine identifier of the role.
	PublicId(String),
	/// Legacy display name, used only when no identifier was captured.
	Name(String),
}

impl ExportDocument {
	pub fn new(group_id: impl Into<String>, group_name: impl Into<String>) -> Self {
		Self {
			group_id: group_id.into(),
			group_name: group_name.into(),
			users: Vec::new(),
		}
	}

	/// Total memberships across all users.
	pub fn membership_count(&self) -> usize {
		self.users.iter().map(|u| u.memberships.len()).sum()
	}
}

impl UserRecord {
	/// The email to provision with, if it is usable.
	pub fn provisioning_email(&self) -> Option<&str> {
		self.email.as_deref().map(str::trim).filter(|e| !e.is_empty())
	}
}

impl MembershipRecord {
	/// Prefers a non-empty `role_public_id`, falls back to the `role` name.
	/// `None` when the record carries neither.
	pub fn role_selector(&self) -> Option<RoleSelector> {
		match self.role_public_id.as_deref() {
			Some(id) if !id.is_empty() => Some(RoleSelector::PublicId(id.to_string())),
			_ if !self.role.is_empty() => Some(RoleSelector::Name(self.role.clone())),
			_ => None,
		}
	}
}
