// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Output file names derived from group display names.

use std::collections::HashSet;

const FALLBACK_STEM: &str = "group";

/// Keeps ASCII letters, digits, `.`, `_`, `-` and space; drops everything else.
///
/// `Acme, Inc. (EU)!!` becomes `Acme Inc. EU`.
pub fn sanitize_file_stem(name: &str) -> String {
	name.chars()
		.filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | ' '))
		.collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileName {
	pub file_name: String,
	/// Set when the plain name was already issued in this batch and the group
	/// id had to be appended.
	pub disambiguated: bool,
}

/// Issues one file name per group for a single exporter batch.
///
/// Two groups whose names sanitize to the same stem would otherwise write the
/// same file; the second one gets its group id appended instead.
#[derive(Debug, Default)]
pub struct FileNamer {
	issued: HashSet<String>,
}

impl FileNamer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn name_for(&mut self, group_name: &str, group_id: &str) -> FileName {
		let id_stem = sanitize_file_stem(group_id);
		let stem = [sanitize_file_stem(group_name), id_stem.clone()]
			.into_iter()
			.find(|s| !s.is_empty())
			.unwrap_or_else(|| FALLBACK_STEM.to_string());

		let plain = format!("{stem}.json");
		if self.issued.insert(plain.clone()) {
			return FileName {
				file_name: plain,
				disambiguated: false,
			};
		}

		let suffix = if id_stem.is_empty() {
			FALLBACK_STEM.to_string()
		} else {
			id_stem
		};
		let mut candidate = format!("{stem}-{suffix}.json");
		let mut counter = 2;
		while !self.issued.insert(candidate.clone()) {
			candidate = format!("{stem}-{suffix}-{counter}.json");
			counter += 1;
		}

		FileName {
			file_name: candidate,
			disambiguated: true,
		}
	}
}
