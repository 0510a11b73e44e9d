// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Resolution of JSON:API `links.next` values.

use url::Url;

use crate::error::PlatformError;

/// Upper bound on pages fetched for one listing.
pub(crate) const MAX_PAGES: usize = 1000;

/// Turns a `links.next` value into a request URL.
///
/// The REST API hands out links relative to its base (`/orgs/..`), but a link
/// may also already carry the base path (`/rest/orgs/..`) or be absolute.
pub(crate) fn resolve_next_link(rest_base: &Url, next: &str) -> Result<Url, PlatformError> {
	if let Ok(absolute) = Url::parse(next) {
		return Ok(absolute);
	}

	let invalid = |e: url::ParseError| PlatformError::InvalidUrl(format!("{next}: {e}"));
	let base_path = rest_base.path().trim_end_matches('/');

	if next.starts_with('/') {
		let carries_base = !base_path.is_empty()
			&& (next == base_path || next.starts_with(&format!("{base_path}/")));
		if carries_base {
			return rest_base.join(next).map_err(invalid);
		}
		let joined = format!("{}{next}", rest_base.as_str().trim_end_matches('/'));
		return Url::parse(&joined).map_err(invalid);
	}

	let mut directory = rest_base.clone();
	directory.set_path(&format!("{base_path}/"));
	directory.join(next).map_err(invalid)
}
