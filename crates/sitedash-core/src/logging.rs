//! Logging setup
//!
//! All sitedash crates log through `tracing`. Applications that have no
//! subscriber of their own can call [`init`] once at start-up.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

use crate::exception::{CoreError, CoreResult};

/// Environment variable holding a filter directive that overrides the
/// configured level, e.g. `SITEDASH_LOG=sitedash_forms=trace,info`
pub const LOG_ENV_VAR: &str = "SITEDASH_LOG";

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Builds the filter used by [`init`]
///
/// `SITEDASH_LOG` wins when set; otherwise `default_directive` is parsed.
pub fn build_filter(default_directive: &str) -> CoreResult<EnvFilter> {
	if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
		return Ok(filter);
	}
	EnvFilter::try_new(default_directive).map_err(|e| CoreError::InvalidLogFilter {
		directive: default_directive.to_string(),
		reason: e.to_string(),
	})
}

/// Installs a global `fmt` subscriber
///
/// Calling this more than once is harmless. It fails only when the filter is
/// invalid or another crate already installed a global subscriber.
pub fn init(default_directive: &str) -> CoreResult<()> {
	if INSTALLED.get().is_some() {
		return Ok(());
	}

	let filter = build_filter(default_directive)?;
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(true)
		.try_init()
		.map_err(|e| CoreError::Logging(e.to_string()))?;

	let _ = INSTALLED.set(());
	tracing::debug!(directive = default_directive, "logging initialised");
	Ok(())
}

/// Whether [`init`] has installed the subscriber
pub fn is_initialized() -> bool {
	INSTALLED.get().is_some()
}
