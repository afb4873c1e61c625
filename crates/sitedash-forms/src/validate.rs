//! Field validation
//!
//! Checks run in a fixed order:
//!
//! 1. required: an empty required value fails immediately
//! 2. an empty optional value passes without further checks
//! 3. string checks: `min_length`, `max_length`, `pattern`
//! 4. numeric checks: `min`, `max`
//! 5. the custom check, whose message replaces any earlier one
//!
//! The first failing built-in check provides the message.

use serde_json::Value;

use crate::rule::ValidationRule;

/// Whether a value counts as "not filled in"
///
/// `null`, whitespace-only strings and empty arrays are empty; `0` and
/// `false` are not.
pub fn is_empty(value: &Value) -> bool {
	match value {
		Value::Null => true,
		Value::String(s) => s.trim().is_empty(),
		Value::Array(items) => items.is_empty(),
		_ => false,
	}
}

fn check_string(field: &str, value: &str, rule: &ValidationRule) -> Option<String> {
	let length = value.chars().count();

	if let Some(min_length) = rule.min_length {
		if length < min_length {
			return Some(format!(
				"{} must be at least {} characters",
				field, min_length
			));
		}
	}
	if let Some(max_length) = rule.max_length {
		if length > max_length {
			return Some(format!("{} must be at most {} characters", field, max_length));
		}
	}
	if let Some(pattern) = &rule.pattern {
		if !pattern.is_match(value) {
			return Some(format!("{} format is invalid", field));
		}
	}
	None
}

fn check_number(field: &str, value: f64, rule: &ValidationRule) -> Option<String> {
	if let Some(min) = rule.min {
		if value < min {
			return Some(format!("{} must be at least {}", field, min));
		}
	}
	if let Some(max) = rule.max {
		if value > max {
			return Some(format!("{} must be at most {}", field, max));
		}
	}
	None
}

/// Validates one value, returning the error message if it fails
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sitedash_forms::{validate_field, ValidationRule};
///
/// let rule = ValidationRule::new().required().max_length(5);
/// assert_eq!(
///     validate_field("code", &json!(""), &rule).as_deref(),
///     Some("code is required")
/// );
/// assert_eq!(
///     validate_field("code", &json!("BLD-0042"), &rule).as_deref(),
///     Some("code must be at most 5 characters")
/// );
/// assert_eq!(validate_field("code", &json!("B-42"), &rule), None);
/// ```
pub fn validate_field(field: &str, value: &Value, rule: &ValidationRule) -> Option<String> {
	if is_empty(value) {
		return rule.required.then(|| format!("{} is required", field));
	}

	let mut error = match value {
		Value::String(s) => check_string(field, s, rule),
		_ => None,
	};

	if error.is_none() {
		if let Some(number) = value.as_f64() {
			error = check_number(field, number, rule);
		}
	}

	if let Some(custom) = &rule.custom {
		if let Some(message) = custom(value) {
			error = Some(message);
		}
	}

	error
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!(null), true)]
	#[case(json!(""), true)]
	#[case(json!("   "), true)]
	#[case(json!([]), true)]
	#[case(json!(0), false)]
	#[case(json!(false), false)]
	#[case(json!("x"), false)]
	#[case(json!({}), false)]
	fn test_is_empty(#[case] value: Value, #[case] expected: bool) {
		assert_eq!(is_empty(&value), expected);
	}

	#[rstest]
	fn test_optional_empty_skips_everything() {
		let rule = ValidationRule::new()
			.min_length(3)
			.custom(|_| Some("never".to_string()));
		assert_eq!(validate_field("notes", &json!(""), &rule), None);
	}

	#[rstest]
	fn test_required_short_circuits_custom() {
		let rule = ValidationRule::new()
			.required()
			.custom(|_| Some("custom".to_string()));
		assert_eq!(
			validate_field("site", &Value::Null, &rule).as_deref(),
			Some("site is required")
		);
	}

	#[rstest]
	fn test_length_counts_characters_not_bytes() {
		let rule = ValidationRule::new().max_length(4);
		assert_eq!(validate_field("name", &json!("Über"), &rule), None);
	}

	#[rstest]
	fn test_string_check_precedes_number_check() {
		let rule = ValidationRule::new().min_length(10).min(5.0);
		assert_eq!(
			validate_field("qty", &json!("3"), &rule).as_deref(),
			Some("qty must be at least 10 characters")
		);
	}

	#[rstest]
	#[case(json!(9), Some("crew_size must be at least 10"))]
	#[case(json!(10), None)]
	#[case(json!(50.5), None)]
	#[case(json!(51), Some("crew_size must be at most 50.5"))]
	fn test_numeric_bounds(#[case] value: Value, #[case] expected: Option<&str>) {
		let rule = ValidationRule::new().min(10.0).max(50.5);
		assert_eq!(validate_field("crew_size", &value, &rule).as_deref(), expected);
	}

	#[rstest]
	fn test_length_rules_ignore_arrays() {
		let rule = ValidationRule::new().required().min_length(3).max_length(1);
		assert_eq!(validate_field("crews", &json!(["framing", "roofing"]), &rule), None);
		assert_eq!(
			validate_field("crews", &json!([]), &rule).as_deref(),
			Some("crews is required")
		);
	}

	#[rstest]
	fn test_numeric_rules_ignore_strings() {
		let rule = ValidationRule::new().min(10.0);
		assert_eq!(validate_field("qty", &json!("3"), &rule), None);
	}

	#[rstest]
	fn test_custom_overrides_builtin_message() {
		let rule = ValidationRule::new()
			.min_length(5)
			.custom(|v| (v == "abc").then(|| "Code already in use".to_string()));
		assert_eq!(
			validate_field("code", &json!("abc"), &rule).as_deref(),
			Some("Code already in use")
		);
		assert_eq!(
			validate_field("code", &json!("abd"), &rule).as_deref(),
			Some("code must be at least 5 characters")
		);
	}
}
