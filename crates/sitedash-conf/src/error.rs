//! Settings errors

use std::path::PathBuf;

use sitedash_core::CoreError;

/// Errors raised while loading or validating [`Settings`](crate::Settings)
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	/// The settings file could not be read
	#[error("Failed to read settings file {path}: {source}")]
	Io {
		/// File that was being read
		path: PathBuf,
		/// Underlying I/O error
		#[source]
		source: std::io::Error,
	},
	/// The settings file is not valid TOML for [`Settings`](crate::Settings)
	#[error("Failed to parse settings: {0}")]
	Parse(#[from] toml::de::Error),
	/// An environment variable held a value of the wrong type
	#[error("Invalid value '{value}' for {var}")]
	InvalidEnv {
		/// Variable name
		var: String,
		/// Raw value
		value: String,
	},
	/// Values parsed but are inconsistent
	#[error("Invalid settings: {0}")]
	Invalid(String),
	/// Logging could not be initialised
	#[error(transparent)]
	Core(#[from] CoreError),
}

/// Result alias for [`SettingsError`]
pub type SettingsResult<T> = Result<T, SettingsError>;
