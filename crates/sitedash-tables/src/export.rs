//! CSV and JSON export
//!
//! Exports use every declared column regardless of priority, in display
//! order, with the same cell text the desktop table shows.

use std::io;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::TableResult;
use crate::table::ResponsiveTable;

impl<R: Serialize> ResponsiveTable<R> {
	/// Writes a header row of column titles followed by one record per row
	///
	/// # Examples
	///
	/// ```
	/// use serde_json::json;
	/// use sitedash_tables::{Column, ResponsiveTable};
	///
	/// let table = ResponsiveTable::new(vec![
	///     Column::new("name", "Site"),
	///     Column::new("lead.name", "Lead"),
	/// ]);
	/// let rows = vec![json!({ "name": "Depot", "lead": { "name": "Ana" } })];
	///
	/// let mut out = Vec::new();
	/// table.export_csv(&rows, &mut out).unwrap();
	/// assert_eq!(String::from_utf8(out).unwrap(), "Site,Lead\nDepot,Ana\n");
	/// ```
	pub fn export_csv<W: io::Write>(&self, rows: &[R], writer: W) -> TableResult<()> {
		let mut csv = csv::Writer::from_writer(writer);
		csv.write_record(self.columns().iter().map(|column| column.title()))?;

		let placeholder = &self.settings().placeholder;
		for (_, row, value) in self.ordered(rows) {
			csv.write_record(
				self.columns()
					.iter()
					.map(|column| column.cell_text(row, &value, placeholder)),
			)?;
		}

		csv.flush()?;
		tracing::debug!(rows = rows.len(), "exported table as CSV");
		Ok(())
	}

	/// Builds a JSON array of objects mapping column keys to cell text
	pub fn export_json(&self, rows: &[R]) -> Value {
		let placeholder = &self.settings().placeholder;
		let records = self
			.ordered(rows)
			.into_iter()
			.map(|(_, row, value)| {
				let record: Map<String, Value> = self
					.columns()
					.iter()
					.map(|column| {
						(
							column.key().to_string(),
							Value::String(column.cell_text(row, &value, placeholder)),
						)
					})
					.collect();
				Value::Object(record)
			})
			.collect();
		Value::Array(records)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Column, Priority, SortDirection};
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_csv_includes_low_priority_and_quotes() {
		let table = ResponsiveTable::new(vec![
			Column::new("name", "Site"),
			Column::new("notes", "Notes").with_priority(Priority::Low),
		]);
		let rows = vec![json!({ "name": "Depot", "notes": "Gate code 4, north side" })];

		let mut out = Vec::new();
		table.export_csv(&rows, &mut out).unwrap();

		assert_eq!(
			String::from_utf8(out).unwrap(),
			"Site,Notes\nDepot,\"Gate code 4, north side\"\n"
		);
	}

	#[rstest]
	fn test_json_follows_sort_and_uses_placeholder() {
		let mut table = ResponsiveTable::new(vec![
			Column::new("name", "Site"),
			Column::new("budget", "Budget"),
		]);
		table.sort_by("budget", SortDirection::Descending).unwrap();
		let rows = vec![
			json!({ "name": "Depot", "budget": 10 }),
			json!({ "name": "Annex" }),
			json!({ "name": "Tower", "budget": 90 }),
		];

		assert_eq!(
			table.export_json(&rows),
			json!([
				{ "name": "Tower", "budget": "90" },
				{ "name": "Depot", "budget": "10" },
				{ "name": "Annex", "budget": "-" },
			])
		);
	}
}
