//! Environment variable overrides

use std::str::FromStr;

use crate::error::{SettingsError, SettingsResult};
use crate::settings::Settings;

/// Default page size
pub const PAGE_SIZE: &str = "SITEDASH_PAGE_SIZE";
/// Card-layout breakpoint
pub const MOBILE_BREAKPOINT: &str = "SITEDASH_MOBILE_BREAKPOINT";
/// Width needed by medium-priority columns
pub const MEDIUM_MIN_WIDTH: &str = "SITEDASH_MEDIUM_MIN_WIDTH";
/// Width needed by low-priority columns
pub const LOW_MIN_WIDTH: &str = "SITEDASH_LOW_MIN_WIDTH";
/// Empty-table message
pub const EMPTY_MESSAGE: &str = "SITEDASH_EMPTY_MESSAGE";
/// Log filter directive
pub const LOG_LEVEL: &str = "SITEDASH_LOG_LEVEL";

fn parse<T: FromStr>(var: &str, value: String) -> SettingsResult<T> {
	value
		.trim()
		.parse()
		.map_err(|_| SettingsError::InvalidEnv {
			var: var.to_string(),
			value,
		})
}

/// Applies overrides read through `lookup`
///
/// `lookup` receives a variable name and returns its value if set. Passing a
/// closure instead of reading the process environment directly keeps this
/// usable from tests without touching global state.
pub fn apply_overrides<F>(settings: &mut Settings, lookup: F) -> SettingsResult<()>
where
	F: Fn(&str) -> Option<String>,
{
	if let Some(value) = lookup(PAGE_SIZE) {
		settings.pagination.page_size = parse(PAGE_SIZE, value)?;
	}
	if let Some(value) = lookup(MOBILE_BREAKPOINT) {
		settings.tables.mobile_breakpoint = parse(MOBILE_BREAKPOINT, value)?;
	}
	if let Some(value) = lookup(MEDIUM_MIN_WIDTH) {
		settings.tables.medium_min_width = parse(MEDIUM_MIN_WIDTH, value)?;
	}
	if let Some(value) = lookup(LOW_MIN_WIDTH) {
		settings.tables.low_min_width = parse(LOW_MIN_WIDTH, value)?;
	}
	if let Some(value) = lookup(EMPTY_MESSAGE) {
		settings.tables.empty_message = value;
	}
	if let Some(value) = lookup(LOG_LEVEL) {
		settings.logging.level = value;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::collections::HashMap;

	fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map: HashMap<String, String> = pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		move |name| map.get(name).cloned()
	}

	#[rstest]
	fn test_overrides_applied() {
		let mut settings = Settings::default();
		apply_overrides(
			&mut settings,
			lookup_from(&[
				(PAGE_SIZE, "25"),
				(MOBILE_BREAKPOINT, " 640 "),
				(EMPTY_MESSAGE, "No crews scheduled"),
				(LOG_LEVEL, "debug"),
			]),
		)
		.unwrap();

		assert_eq!(settings.pagination.page_size, 25);
		assert_eq!(settings.tables.mobile_breakpoint, 640);
		assert_eq!(settings.tables.medium_min_width, 1024);
		assert_eq!(settings.tables.empty_message, "No crews scheduled");
		assert_eq!(settings.logging.level, "debug");
	}

	#[rstest]
	fn test_non_numeric_override_rejected() {
		let mut settings = Settings::default();
		let err = apply_overrides(&mut settings, lookup_from(&[(PAGE_SIZE, "ten")])).unwrap_err();
		match err {
			SettingsError::InvalidEnv { var, value } => {
				assert_eq!(var, PAGE_SIZE);
				assert_eq!(value, "ten");
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[rstest]
	fn test_no_overrides_keeps_defaults() {
		let mut settings = Settings::default();
		apply_overrides(&mut settings, |_| None).unwrap();
		assert_eq!(settings, Settings::default());
	}
}
