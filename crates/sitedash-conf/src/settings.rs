//! Settings structures and loading

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::env;
use crate::error::{SettingsError, SettingsResult};

/// Top-level settings
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// Pagination defaults
	pub pagination: PaginationSettings,
	/// Responsive table defaults
	pub tables: TableSettings,
	/// Logging configuration
	pub logging: LoggingSettings,
}

/// Defaults for paginated lists
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationSettings {
	/// Items per page when a list is first shown
	pub page_size: usize,
	/// Choices offered by a page-size selector
	pub page_size_options: Vec<usize>,
	/// Pages shown on each side of the current page in a page-number strip
	pub window_siblings: usize,
}

impl Default for PaginationSettings {
	fn default() -> Self {
		Self {
			page_size: 10,
			page_size_options: vec![10, 25, 50, 100],
			window_siblings: 1,
		}
	}
}

/// Viewport breakpoints and text used by responsive tables
///
/// Widths are CSS pixels. Below `mobile_breakpoint` rows render as cards.
/// In table mode, medium-priority columns need `medium_min_width` and
/// low-priority columns need `low_min_width`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
	/// Widths strictly below this render the card layout
	pub mobile_breakpoint: u32,
	/// Minimum width for medium-priority columns
	pub medium_min_width: u32,
	/// Minimum width for low-priority columns
	pub low_min_width: u32,
	/// Message rendered for an empty collection
	pub empty_message: String,
	/// Text rendered for a missing cell value
	pub placeholder: String,
}

impl Default for TableSettings {
	fn default() -> Self {
		Self {
			mobile_breakpoint: 768,
			medium_min_width: 1024,
			low_min_width: 1280,
			empty_message: "No data available".to_string(),
			placeholder: "-".to_string(),
		}
	}
}

/// Logging configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
	/// Filter directive, e.g. `info` or `sitedash_forms=debug,warn`
	pub level: String,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
		}
	}
}

impl Settings {
	/// Parses settings from a TOML document; missing keys take defaults
	pub fn from_toml_str(source: &str) -> SettingsResult<Self> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reads and parses a TOML settings file
	pub fn from_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		tracing::debug!(path = %path.display(), "loading settings file");
		Self::from_toml_str(&source)
	}

	/// Loads settings from every source
	///
	/// Defaults, then `path` when given, then `.env`, then the process
	/// environment.
	pub fn load(path: Option<&Path>) -> SettingsResult<Self> {
		let mut settings = match path {
			Some(path) => Self::from_file(path)?,
			None => Self::default(),
		};

		if let Ok(dotenv_path) = dotenv::dotenv() {
			tracing::debug!(path = %dotenv_path.display(), "loaded .env");
		}

		settings.apply_env()?;
		settings.validate()?;
		Ok(settings)
	}

	/// Applies `SITEDASH_*` overrides from the process environment
	pub fn apply_env(&mut self) -> SettingsResult<()> {
		env::apply_overrides(self, |name| std::env::var(name).ok())
	}

	/// Checks cross-field consistency
	pub fn validate(&self) -> SettingsResult<()> {
		if self.pagination.page_size == 0 {
			return Err(SettingsError::Invalid(
				"pagination.page_size must be greater than 0".to_string(),
			));
		}
		if self.pagination.page_size_options.contains(&0) {
			return Err(SettingsError::Invalid(
				"pagination.page_size_options must not contain 0".to_string(),
			));
		}

		let tables = &self.tables;
		if tables.medium_min_width > tables.low_min_width {
			return Err(SettingsError::Invalid(format!(
				"tables.medium_min_width ({}) must not exceed tables.low_min_width ({})",
				tables.medium_min_width, tables.low_min_width
			)));
		}
		if tables.mobile_breakpoint > tables.medium_min_width {
			return Err(SettingsError::Invalid(format!(
				"tables.mobile_breakpoint ({}) must not exceed tables.medium_min_width ({})",
				tables.mobile_breakpoint, tables.medium_min_width
			)));
		}

		Ok(())
	}

	/// Installs the global `tracing` subscriber using `logging.level`
	pub fn init_logging(&self) -> SettingsResult<()> {
		sitedash_core::logging::init(&self.logging.level)?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults_are_valid() {
		let settings = Settings::default();
		assert!(settings.validate().is_ok());
		assert_eq!(settings.pagination.page_size, 10);
		assert_eq!(settings.tables.placeholder, "-");
		assert_eq!(settings.logging.level, "info");
	}

	#[rstest]
	fn test_zero_page_size_rejected() {
		let mut settings = Settings::default();
		settings.pagination.page_size = 0;
		assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));
	}

	#[rstest]
	#[case(2000, 1024, 1280)]
	#[case(768, 1400, 1280)]
	fn test_unordered_breakpoints_rejected(
		#[case] mobile: u32,
		#[case] medium: u32,
		#[case] low: u32,
	) {
		let mut settings = Settings::default();
		settings.tables.mobile_breakpoint = mobile;
		settings.tables.medium_min_width = medium;
		settings.tables.low_min_width = low;
		assert!(settings.validate().is_err());
	}
}
