// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! First-seen ordered aggregation of users across a group's organizations.

use std::collections::HashMap;

use crate::document::{ExportDocument, MembershipRecord, UserRecord};

/// User attributes as observed on a membership record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserIdentity {
	pub id: String,
	pub name: Option<String>,
	pub username: Option<String>,
	pub email: Option<String>,
}

/// Collects memberships per user id.
///
/// Users are kept in a list with a secondary id index, so output order is the
/// order in which user ids were first observed. The first observation of an
/// id fixes the user's attributes; later ones only append memberships.
#[derive(Debug, Default)]
pub struct UserAggregator {
	users: Vec<UserRecord>,
	index: HashMap<String, usize>,
}

impl UserAggregator {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn record(&mut self, user: UserIdentity, membership: MembershipRecord) {
		let position = match self.index.get(&user.id) {
			Some(&position) => position,
			None => {
				let position = self.users.len();
				self.index.insert(user.id.clone(), position);
				self.users.push(UserRecord {
					id: user.id,
					name: user.name,
					username: user.username,
					email: user.email,
					memberships: Vec::new(),
				});
				position
			}
		};

		self.users[position].memberships.push(membership);
	}

	pub fn user_count(&self) -> usize {
		self.users.len()
	}

	pub fn into_users(self) -> Vec<UserRecord> {
		self.users
	}

	pub fn into_document(
		self,
		group_id: impl Into<String>,
		group_name: impl Into<String>,
	) -> ExportDocument {
		ExportDocument {
			group_id: group_id.into(),
			group_name: group_name.into(),
			users: self.users,
		}
	}
}
