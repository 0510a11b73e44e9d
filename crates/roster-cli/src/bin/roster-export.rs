// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Exports the organization memberships of one or more groups to JSON.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use roster_cli::args::{LoggingArgs, PlatformArgs};
use roster_common_config::{require_secret_env, TOKEN_ENV_VAR};
use roster_platform::PlatformClient;
use roster_sync::{parse_group_ids, Exporter};
use tracing::info;

/// Export group memberships to one JSON snapshot per group
#[derive(Parser, Debug)]
#[command(name = "roster-export", version, about, long_about = None)]
struct Args {
	/// Comma-separated group ids, e.g. "g1,g2"
	group_ids: String,

	/// Directory the snapshots are written to
	#[arg(short, long, env = "ROSTER_OUTPUT_DIR", default_value = ".")]
	output_dir: PathBuf,

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

	let group_ids = parse_group_ids(&args.group_ids);
	if group_ids.is_empty() {
		bail!("no group ids in {:?}", args.group_ids);
	}

	std::fs::create_dir_all(&args.output_dir).with_context(|| {
		format!(
			"failed to create output directory {}",
			args.output_dir.display()
		)
	})?;

	let config = args.platform.into_config(token);
	let client = PlatformClient::new(&config).context("failed to create platform client")?;

	let mut exporter = Exporter::new(&client, &args.output_dir);
	let report = exporter.run(&group_ids).await;

	for export in report.written() {
		info!(
			group_id = %export.group_id,
			path = %export.path.display(),
			users = export.users,
			memberships = export.memberships,
			"snapshot written"
		);
	}
	Ok(())
}
