//! Declarative validation rules

use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde_json::Value;

use crate::error::{FormError, FormResult};

// Same shape check the browser-side email validator uses; the server
// remains the authority on deliverability.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

/// Caller-supplied check run after the built-in ones
///
/// Returns the error message, or `None` when the value is acceptable.
pub type CustomValidator = Arc<dyn Fn(&Value) -> Option<String> + Send + Sync>;

/// Constraints for one field
///
/// Every constraint is optional. String constraints (`min_length`,
/// `max_length`, `pattern`) only apply to string values and numeric
/// constraints (`min`, `max`) only to numbers.
///
/// # Examples
///
/// ```
/// use sitedash_forms::ValidationRule;
///
/// let rule = ValidationRule::new()
///     .required()
///     .min_length(2)
///     .max_length(40)
///     .try_pattern(r"^[A-Z]")
///     .unwrap();
/// assert!(rule.required);
/// assert_eq!(rule.min_length, Some(2));
/// ```
#[derive(Clone, Default)]
pub struct ValidationRule {
	/// Empty values are rejected
	pub required: bool,
	/// Minimum string length in characters
	pub min_length: Option<usize>,
	/// Maximum string length in characters
	pub max_length: Option<usize>,
	/// Minimum numeric value (inclusive)
	pub min: Option<f64>,
	/// Maximum numeric value (inclusive)
	pub max: Option<f64>,
	/// Pattern a string value must match
	pub pattern: Option<Regex>,
	/// Check run last; its message overrides any built-in one
	pub custom: Option<CustomValidator>,
}

impl ValidationRule {
	/// A rule with no constraints
	pub fn new() -> Self {
		Self::default()
	}

	/// Marks the field as required
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Sets the minimum length in characters
	pub fn min_length(mut self, min_length: usize) -> Self {
		self.min_length = Some(min_length);
		self
	}

	/// Sets the maximum length in characters
	pub fn max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}

	/// Sets the minimum number
	pub fn min(mut self, min: f64) -> Self {
		self.min = Some(min);
		self
	}

	/// Sets the maximum number
	pub fn max(mut self, max: f64) -> Self {
		self.max = Some(max);
		self
	}

	/// Sets a compiled pattern
	pub fn pattern(mut self, pattern: Regex) -> Self {
		self.pattern = Some(pattern);
		self
	}

	/// Compiles and sets a pattern
	pub fn try_pattern(self, pattern: &str) -> FormResult<Self> {
		let compiled = Regex::new(pattern).map_err(|source| FormError::InvalidPattern {
			pattern: pattern.to_string(),
			source,
		})?;
		Ok(self.pattern(compiled))
	}

	/// Requires an email-shaped string
	///
	/// # Examples
	///
	/// ```
	/// use serde_json::json;
	/// use sitedash_forms::{validate_field, ValidationRule};
	///
	/// let rule = ValidationRule::new().email();
	/// assert_eq!(validate_field("email", &json!("pm@site.example"), &rule), None);
	/// assert!(validate_field("email", &json!("pm@"), &rule).is_some());
	/// ```
	pub fn email(self) -> Self {
		self.pattern(EMAIL_REGEX.clone())
	}

	/// Sets the custom check
	pub fn custom<F>(mut self, check: F) -> Self
	where
		F: Fn(&Value) -> Option<String> + Send + Sync + 'static,
	{
		self.custom = Some(Arc::new(check));
		self
	}
}

impl fmt::Debug for ValidationRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ValidationRule")
			.field("required", &self.required)
			.field("min_length", &self.min_length)
			.field("max_length", &self.max_length)
			.field("min", &self.min)
			.field("max", &self.max)
			.field("pattern", &self.pattern.as_ref().map(Regex::as_str))
			.field("custom", &self.custom.is_some())
			.finish()
	}
}
