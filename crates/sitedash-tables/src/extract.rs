//! Cell value extraction

use serde::Serialize;
use serde_json::Value;

/// Looks up `key` in a serialised row
///
/// A key that names a top-level field is used as-is, so fields whose names
/// contain dots still resolve. Otherwise a dotted key walks nested objects,
/// and numeric segments index into arrays.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sitedash_tables::extract_value;
///
/// let row = json!({
///     "name": "Tower crane",
///     "operator": { "profile": { "name": "R. Okafor" } },
///     "certs": ["NCCCO", "OSHA-30"],
///     "rate.hourly": 85
/// });
///
/// assert_eq!(extract_value(&row, "name"), Some(&json!("Tower crane")));
/// assert_eq!(extract_value(&row, "operator.profile.name"), Some(&json!("R. Okafor")));
/// assert_eq!(extract_value(&row, "certs.1"), Some(&json!("OSHA-30")));
/// assert_eq!(extract_value(&row, "rate.hourly"), Some(&json!(85)));
/// assert_eq!(extract_value(&row, "operator.phone"), None);
/// ```
pub fn extract_value<'a>(row: &'a Value, key: &str) -> Option<&'a Value> {
	if let Some(value) = row.get(key) {
		return Some(value);
	}
	if !key.contains('.') {
		return None;
	}

	key.split('.')
		.try_fold(row, |current, segment| match current {
			Value::Object(map) => map.get(segment),
			Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
			_ => None,
		})
}

/// Default text for a cell
///
/// Missing and `null` values become `placeholder`; strings are shown
/// without quotes; arrays and objects are shown as compact JSON.
pub fn format_value(value: Option<&Value>, placeholder: &str) -> String {
	match value {
		None | Some(Value::Null) => placeholder.to_string(),
		Some(Value::String(s)) => s.clone(),
		Some(Value::Bool(b)) => b.to_string(),
		Some(Value::Number(n)) => n.to_string(),
		Some(other) => other.to_string(),
	}
}

/// Serialises a row for extraction
///
/// Rows that fail to serialise are logged and treated as `null`, so every
/// cell in them shows the placeholder.
pub(crate) fn row_value<R: Serialize>(row: &R) -> Value {
	match serde_json::to_value(row) {
		Ok(value) => value,
		Err(e) => {
			tracing::warn!(error = %e, "row could not be serialised; rendering placeholders");
			Value::Null
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(None, "-")]
	#[case(Some(json!(null)), "-")]
	#[case(Some(json!("Active")), "Active")]
	#[case(Some(json!(42)), "42")]
	#[case(Some(json!(12.5)), "12.5")]
	#[case(Some(json!(true)), "true")]
	#[case(Some(json!(["a", "b"])), r#"["a","b"]"#)]
	fn test_format_value(#[case] value: Option<Value>, #[case] expected: &str) {
		assert_eq!(format_value(value.as_ref(), "-"), expected);
	}

	#[rstest]
	fn test_path_through_scalar_is_missing() {
		let row = json!({ "name": "Depot" });
		assert_eq!(extract_value(&row, "name.first"), None);
	}

	#[rstest]
	fn test_extract_from_non_object_row() {
		assert_eq!(extract_value(&json!(null), "name"), None);
		assert_eq!(extract_value(&json!(["x"]), "0"), None);
	}

	#[rstest]
	fn test_row_value_of_unserialisable_row_is_null() {
		use std::collections::HashMap;

		// Non-string map keys cannot become JSON object keys
		let mut row: HashMap<(u8, u8), u8> = HashMap::new();
		row.insert((1, 2), 3);
		assert_eq!(row_value(&row), Value::Null);
	}
}
