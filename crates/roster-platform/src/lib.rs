// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Client for the upstream group/organization management API.
//!
//! Three endpoints are covered: listing a group's organizations (v1),
//! listing an organization's memberships (date-versioned REST, JSON:API
//! pages), and provisioning a user into an organization (v1).
//!
//! Pipelines talk to [`PlatformApi`] rather than [`PlatformClient`] so they
//! can run against fakes in tests.

pub mod api;
pub mod client;
pub mod error;
mod pagination;
pub mod types;

pub use api::PlatformApi;
pub use client::PlatformClient;
pub use error::PlatformError;
pub use types::{
	GroupOrgs, MembershipResource, OrgSummary, ProvisionOutcome, ProvisionRequest, UserAttributes,
};
