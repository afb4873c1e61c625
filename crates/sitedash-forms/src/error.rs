//! Errors raised while declaring forms
//!
//! Validating values never errors; these cover mistakes in the declaration
//! itself.

/// Form declaration errors
#[derive(Debug, thiserror::Error)]
pub enum FormError {
	/// A `pattern` rule was given an invalid regular expression
	#[error("Invalid pattern '{pattern}': {source}")]
	InvalidPattern {
		/// The rejected expression
		pattern: String,
		/// Regex compiler error
		#[source]
		source: regex::Error,
	},
}

/// Result alias for [`FormError`]
pub type FormResult<T> = Result<T, FormError>;
