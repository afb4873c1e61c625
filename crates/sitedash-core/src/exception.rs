//! Error types shared across sitedash crates

/// Errors raised by the core crate
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
	/// The log filter directive could not be parsed
	#[error("Invalid log filter '{directive}': {reason}")]
	InvalidLogFilter {
		/// Directive that failed to parse
		directive: String,
		/// Parser message
		reason: String,
	},
	/// A global subscriber was installed by someone else
	#[error("Failed to install tracing subscriber: {0}")]
	Logging(String),
}

/// Result alias for [`CoreError`]
pub type CoreResult<T> = Result<T, CoreError>;
