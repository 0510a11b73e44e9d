// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::args::{LogLevel, LoggingArgs};

fn log_level_to_tracing(level: LogLevel) -> tracing::Level {
	match level {
		LogLevel::Trace => tracing::Level::TRACE,
		LogLevel::Debug => tracing::Level::DEBUG,
		LogLevel::Info => tracing::Level::INFO,
		LogLevel::Warn => tracing::Level::WARN,
		LogLevel::Error => tracing::Level::ERROR,
	}
}

/// Default directive covering every roster crate; `RUST_LOG` replaces it.
pub fn default_directive(level: LogLevel) -> String {
	format!("roster={}", log_level_to_tracing(level))
}

/// Installs the global subscriber. Logs go to stderr.
pub fn init_tracing(logging: &LoggingArgs) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_directive(logging.log_level)));

	if logging.json_logs {
		tracing_subscriber::registry()
			.with(filter)
			.with(fmt::layer().json().with_writer(std::io::stderr))
			.init();
	} else {
		tracing_subscriber::registry()
			.with(filter)
			.with(fmt::layer().compact().with_writer(std::io::stderr))
			.init();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_directive_targets_roster_crates() {
		assert_eq!(default_directive(LogLevel::Info), "roster=INFO");
		assert_eq!(default_directive(LogLevel::Trace), "roster=TRACE");
	}
}
