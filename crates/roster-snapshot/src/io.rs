// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::document::ExportDocument;
use crate::error::SnapshotError;

/// Reads a whole export document. Missing files are reported as
/// [`SnapshotError::NotFound`]; there is no partial recovery from bad JSON.
pub fn read_document(path: &Path) -> Result<ExportDocument, SnapshotError> {
	let content = fs::read_to_string(path).map_err(|source| {
		if source.kind() == ErrorKind::NotFound {
			SnapshotError::NotFound(path.to_path_buf())
		} else {
			SnapshotError::Io {
				path: path.to_path_buf(),
				source,
			}
		}
	})?;

	serde_json::from_str(&content).map_err(|source| SnapshotError::InvalidJson {
		path: path.to_path_buf(),
		source,
	})
}

/// Writes `document` as two-space indented JSON, replacing any existing file.
pub fn write_document(path: &Path, document: &ExportDocument) -> Result<(), SnapshotError> {
	let io_err = |source| SnapshotError::Io {
		path: path.to_path_buf(),
		source,
	};

	let file = File::create(path).map_err(io_err)?;
	let mut writer = BufWriter::new(file);
	serde_json::to_writer_pretty(&mut writer, document).map_err(|source| {
		SnapshotError::InvalidJson {
			path: path.to_path_buf(),
			source,
		}
	})?;
	writer.write_all(b"\n").map_err(io_err)?;
	writer.flush().map_err(io_err)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::document::{MembershipRecord, UserRecord};
	use tempfile::TempDir;

	fn sample() -> ExportDocument {
		ExportDocument {
			group_id: "g1".to_string(),
			group_name: "Group One".to_string(),
			users: vec![UserRecord {
				id: "u1".to_string(),
				name: Some("User One".to_string()),
				username: Some("uone".to_string()),
				email: Some("a@x.com".to_string()),
				memberships: vec![MembershipRecord {
					org_id: "o1".to_string(),
					org_name: "Org One".to_string(),
					role: "Admin".to_string(),
					role_public_id: Some("radm".to_string()),
				}],
			}],
		}
	}

	#[test]
	fn written_file_reads_back() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("Group One.json");

		write_document(&path, &sample()).unwrap();
		assert_eq!(read_document(&path).unwrap(), sample());
	}

	#[test]
	fn written_file_is_indented_with_two_spaces() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("out.json");

		write_document(&path, &sample()).unwrap();
		let content = fs::read_to_string(&path).unwrap();
		assert!(content.starts_with("{\n  \"group_id\": \"g1\""));
		assert!(content.ends_with("}\n"));
	}

	#[test]
	fn missing_file_is_not_found() {
		let dir = TempDir::new().unwrap();
		let err = read_document(&dir.path().join("absent.json")).unwrap_err();
		assert!(matches!(err, SnapshotError::NotFound(_)));
	}

	#[test]
	fn malformed_file_is_invalid_json() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("broken.json");
		fs::write(&path, "{ \"group_id\": ").unwrap();

		let err = read_document(&path).unwrap_err();
		assert!(matches!(err, SnapshotError::InvalidJson { .. }));
	}
}
