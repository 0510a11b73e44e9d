// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Replays an exported snapshot as provisioning calls.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use roster_cli::args::{LoggingArgs, PlatformArgs};
use roster_common_config::{require_secret_env, TOKEN_ENV_VAR};
use roster_platform::PlatformClient;
use roster_snapshot::read_document;
use roster_sync::Importer;
use tracing::{info, warn};

/// Provision every exported membership into the target organizations
#[derive(Parser, Debug)]
#[command(name = "roster-import", version, about, long_about = None)]
struct Args {
	/// Snapshot file written by roster-export
	file: PathBuf,

	/// Log the provisioning calls without making them
	#[arg(long)]
	dry_run: bool,

	#[command(flatten)]
	platform: PlatformArgs,

	#[command(flatten)]
	logging: LoggingArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
	let args: Args = roster_cli::parse_args();
	roster_cli::logging::init_tracing(&args.logging);

	let token = require_secret_env(TOKEN_ENV_VAR).context("API token is not configured")?;

	let document = read_document(&args.file)
		.with_context(|| format!("cannot load snapshot {}", args.file.display()))?;
	info!(
		path = %args.file.display(),
		group_id = %document.group_id,
		group_name = %document.group_name,
		users = document.users.len(),
		memberships = document.membership_count(),
		"loaded snapshot"
	);

	let config = args.platform.into_config(token);
	let client = PlatformClient::new(&config).context("failed to create platform client")?;

	let report = Importer::new(&client)
		.dry_run(args.dry_run)
		.run(&document)
		.await;

	for failure in &report.failures {
		warn!(
			email = %failure.email,
			org_id = %failure.org_id,
			status = ?failure.status,
			"membership not provisioned"
		);
	}
	Ok(())
}
