// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP implementation of [`PlatformApi`].

use std::collections::HashSet;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, StatusCode};
use roster_common_config::{PlatformConfig, SecretString};
use tracing::{debug, instrument, trace, warn};
use url::Url;

use crate::api::PlatformApi;
use crate::error::PlatformError;
use crate::pagination::{resolve_next_link, MAX_PAGES};
use crate::types::{
	GroupOrgs, GroupOrgsResponse, MembershipPage, MembershipResource, ProvisionOutcome,
	ProvisionRequest,
};

const V1_CONTENT_TYPE: &str = "application/json";
const REST_CONTENT_TYPE: &str = "application/vnd.api+json";

/// Client for the platform's v1 and REST APIs.
#[derive(Debug, Clone)]
pub struct PlatformClient {
	http_client: Client,
	token: SecretString,
	v1_base_url: Url,
	rest_base_url: Url,
	rest_api_version: String,
	page_limit: u32,
}

impl PlatformClient {
	pub fn new(config: &PlatformConfig) -> Result<Self, PlatformError> {
		let http_client = roster_common_http::new_client_with_timeout(config.request_timeout)
			.map_err(PlatformError::ClientBuild)?;

		Ok(Self {
			http_client,
			token: config.token.clone(),
			v1_base_url: parse_base(&config.v1_base_url)?,
			rest_base_url: parse_base(&config.rest_base_url)?,
			rest_api_version: config.rest_api_version.clone(),
			page_limit: config.membership_page_limit,
		})
	}

	fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
		request.header(AUTHORIZATION, format!("token {}", self.token.expose()))
	}

	#[instrument(skip(self))]
	pub async fn list_group_orgs(&self, group_id: &str) -> Result<GroupOrgs, PlatformError> {
		let url = endpoint(&self.v1_base_url, &["group", group_id, "orgs"])?;
		debug!(url = %url, "listing group organizations");

		let response = self
			.authorized(self.http_client.get(url))
			.header(CONTENT_TYPE, V1_CONTENT_TYPE)
			.send()
			.await
			.map_err(PlatformError::from_transport)?;

		let body = success_body(response).await?;
		let parsed: GroupOrgsResponse = serde_json::from_str(&body).map_err(|e| {
			PlatformError::InvalidResponse(format!("group organizations: {e}"))
		})?;

		Ok(GroupOrgs {
			group_id: group_id.to_string(),
			name: parsed.name.unwrap_or_else(|| group_id.to_string()),
			orgs: parsed.orgs,
		})
	}

	#[instrument(skip(self))]
	pub async fn list_org_memberships(
		&self,
		org_id: &str,
	) -> Result<Vec<MembershipResource>, PlatformError> {
		let mut url = endpoint(&self.rest_base_url, &["orgs", org_id, "memberships"])?;
		url.query_pairs_mut()
			.append_pair("version", &self.rest_api_version)
			.append_pair("limit", &self.page_limit.to_string());

		let mut memberships = Vec::new();
		let mut visited = HashSet::new();
		for page_number in 1..=MAX_PAGES {
			visited.insert(url.clone());
			debug!(url = %url, page = page_number, "listing organization memberships");

			let response = self
				.authorized(self.http_client.get(url.clone()))
				.header(CONTENT_TYPE, REST_CONTENT_TYPE)
				.send()
				.await
				.map_err(PlatformError::from_transport)?;

			let body = success_body(response).await?;
			let page: MembershipPage = serde_json::from_str(&body)
				.map_err(|e| PlatformError::InvalidResponse(format!("memberships page: {e}")))?;
			trace!(count = page.data.len(), "membership page received");
			memberships.extend(page.data);

			let next = match page.links.and_then(|l| l.next).filter(|n| !n.is_empty()) {
				Some(next) => resolve_next_link(&self.rest_base_url, &next)?,
				None => return Ok(memberships),
			};
			if visited.contains(&next) {
				warn!(url = %next, "next page link points at an already fetched page, stopping");
				return Ok(memberships);
			}
			url = next;
		}

		warn!(max_pages = MAX_PAGES, "membership listing hit the page limit, stopping");
		Ok(memberships)
	}

	#[instrument(skip(self, request))]
	pub async fn provision_user(
		&self,
		org_id: &str,
		request: &ProvisionRequest,
	) -> Result<ProvisionOutcome, PlatformError> {
		let url = endpoint(&self.v1_base_url, &["org", org_id, "provision"])?;
		debug!(url = %url, "provisioning user");

		let response = self
			.authorized(self.http_client.post(url))
			.json(request)
			.send()
			.await
			.map_err(PlatformError::from_transport)?;

		let status = response.status();
		match status {
			StatusCode::OK | StatusCode::CREATED => Ok(ProvisionOutcome::Provisioned),
			StatusCode::CONFLICT => Ok(ProvisionOutcome::AlreadyMember),
			_ => Err(PlatformError::Api {
				status: status.as_u16(),
				body: response.text().await.unwrap_or_default(),
			}),
		}
	}
}

#[async_trait]
impl PlatformApi for PlatformClient {
	async fn list_group_orgs(&self, group_id: &str) -> Result<GroupOrgs, PlatformError> {
		PlatformClient::list_group_orgs(self, group_id).await
	}

	async fn list_org_memberships(
		&self,
		org_id: &str,
	) -> Result<Vec<MembershipResource>, PlatformError> {
		PlatformClient::list_org_memberships(self, org_id).await
	}

	async fn provision_user(
		&self,
		org_id: &str,
		request: &ProvisionRequest,
	) -> Result<ProvisionOutcome, PlatformError> {
		PlatformClient::provision_user(self, org_id, request).await
	}
}

fn parse_base(raw: &str) -> Result<Url, PlatformError> {
	let url = Url::parse(raw).map_err(|e| PlatformError::InvalidUrl(format!("{raw}: {e}")))?;
	if url.cannot_be_a_base() {
		return Err(PlatformError::InvalidUrl(format!("{raw}: not a base URL")));
	}
	Ok(url)
}

/// Appends percent-encoded path segments to `base`.
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, PlatformError> {
	let mut url = base.clone();
	url.path_segments_mut()
		.map_err(|_| PlatformError::InvalidUrl(base.to_string()))?
		.pop_if_empty()
		.extend(segments);
	Ok(url)
}

/// Returns the body of a 2xx response, or [`PlatformError::Api`] otherwise.
async fn success_body(response: reqwest::Response) -> Result<String, PlatformError> {
	let status = response.status();
	if !status.is_success() {
		let body = response.text().await.unwrap_or_default();
		return Err(PlatformError::Api {
			status: status.as_u16(),
			body,
		});
	}
	response.text().await.map_err(PlatformError::from_transport)
}
