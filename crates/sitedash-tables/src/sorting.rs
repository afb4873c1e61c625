//! Row ordering by column key
//!
//! A sort is addressed by column key, the same direct or dotted key the
//! column reads (`budget`, `lead.name`). In a `?sort=` query value a leading
//! `-` selects descending order and an optional leading `+` ascending.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::extract::{extract_value, row_value};

/// Order of a sorted column, shown in its header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	/// Smallest first; missing values still go last
	Ascending,
	/// Largest first; missing values still go last
	Descending,
}

impl SortDirection {
	/// Direction after a second click on the same header
	pub fn toggle(self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// Splits a `?sort=` value into direction and column key
	///
	/// `-lead.name` is `(Descending, "lead.name")`; `budget` and `+budget`
	/// are `(Ascending, "budget")`. Surrounding whitespace is ignored.
	pub fn parse_from_query(query: &str) -> (Self, &str) {
		let query = query.trim();
		match query.as_bytes().first() {
			Some(b'-') => (Self::Descending, &query[1..]),
			Some(b'+') => (Self::Ascending, &query[1..]),
			_ => (Self::Ascending, query),
		}
	}

	/// Builds the `?sort=` value for `key`
	///
	/// Round-trips through [`parse_from_query`](Self::parse_from_query);
	/// ascending keys carry no prefix.
	pub fn to_query(self, key: &str) -> String {
		match self {
			Self::Ascending => key.to_string(),
			Self::Descending => format!("-{}", key),
		}
	}
}

fn is_missing(value: Option<&Value>) -> bool {
	matches!(value, None | Some(Value::Null))
}

fn type_rank(value: &Value) -> u8 {
	match value {
		Value::Bool(_) => 0,
		Value::Number(_) => 1,
		Value::String(_) => 2,
		Value::Array(_) => 3,
		Value::Object(_) => 4,
		Value::Null => 5,
	}
}

/// Orders two present values
///
/// Numbers compare numerically, strings case-insensitively (ties broken
/// by exact comparison), booleans `false` first. Mixed types order by kind.
fn compare_values(a: &Value, b: &Value) -> Ordering {
	match (a, b) {
		(Value::Number(x), Value::Number(y)) => x
			.as_f64()
			.partial_cmp(&y.as_f64())
			.unwrap_or(Ordering::Equal),
		(Value::String(x), Value::String(y)) => x
			.to_lowercase()
			.cmp(&y.to_lowercase())
			.then_with(|| x.cmp(y)),
		(Value::Bool(x), Value::Bool(y)) => x.cmp(y),
		_ => type_rank(a).cmp(&type_rank(b)),
	}
}

/// Indices of `rows` in sorted order
///
/// The sort is stable, and rows missing the key go last in either
/// direction.
pub(crate) fn sort_order(rows: &[Value], key: &str, direction: SortDirection) -> Vec<usize> {
	let mut indices: Vec<usize> = (0..rows.len()).collect();
	indices.sort_by(|&a, &b| {
		let left = extract_value(&rows[a], key);
		let right = extract_value(&rows[b], key);
		match (left, right) {
			(l, r) if is_missing(l) && is_missing(r) => Ordering::Equal,
			(l, _) if is_missing(l) => Ordering::Greater,
			(_, r) if is_missing(r) => Ordering::Less,
			(Some(l), Some(r)) => match direction {
				SortDirection::Ascending => compare_values(l, r),
				SortDirection::Descending => compare_values(l, r).reverse(),
			},
			_ => Ordering::Equal,
		}
	});
	indices
}

/// Sorts rows by the value at `key` (direct or dotted)
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sitedash_tables::{sort_rows, SortDirection};
///
/// let rows = vec![
///     json!({ "crew": "Framing", "size": 12 }),
///     json!({ "crew": "Electrical" }),
///     json!({ "crew": "Concrete", "size": 8 }),
/// ];
///
/// let sorted = sort_rows(rows, "size", SortDirection::Descending);
/// let crews: Vec<_> = sorted.iter().map(|r| r["crew"].as_str().unwrap()).collect();
/// assert_eq!(crews, vec!["Framing", "Concrete", "Electrical"]);
/// ```
pub fn sort_rows<R: Serialize>(rows: Vec<R>, key: &str, direction: SortDirection) -> Vec<R> {
	let values: Vec<Value> = rows.iter().map(row_value).collect();
	let order = sort_order(&values, key, direction);

	let mut slots: Vec<Option<R>> = rows.into_iter().map(Some).collect();
	order
		.into_iter()
		.filter_map(|index| slots[index].take())
		.collect()
}
