// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared command-line plumbing for `roster-export` and `roster-import`.

pub mod args;
pub mod logging;

use clap::Parser;

/// Parses the process arguments. Usage errors exit with status 1;
/// `--help` and `--version` exit with status 0.
pub fn parse_args<T: Parser>() -> T {
	T::try_parse().unwrap_or_else(|err| {
		if err.use_stderr() {
			let _ = err.print();
			std::process::exit(1);
		}
		err.exit()
	})
}
