//! Column declarations

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sitedash_conf::TableSettings;

use crate::extract::{extract_value, format_value};
use crate::viewport::Viewport;

/// Visibility tier of a column in table mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
	/// Always shown
	High,
	/// Shown from `medium_min_width` up
	Medium,
	/// Shown from `low_min_width` up
	Low,
}

impl Priority {
	/// Minimum viewport width this tier needs
	pub fn min_width(self, settings: &TableSettings) -> u32 {
		match self {
			Self::High => 0,
			Self::Medium => settings.medium_min_width,
			Self::Low => settings.low_min_width,
		}
	}
}

type CellRenderer<R> = Box<dyn Fn(&Value, &R) -> String>;
type MobileRenderer<R> = Box<dyn Fn(&R) -> Option<String>>;

/// A column of a [`ResponsiveTable`](crate::ResponsiveTable)
///
/// # Example
///
/// ```
/// use serde::Serialize;
/// use sitedash_tables::{Column, Priority};
///
/// #[derive(Serialize)]
/// struct Invoice {
///     number: String,
///     amount_cents: i64,
///     paid: bool,
/// }
///
/// let amount = Column::new("amount_cents", "Amount")
///     .with_render(|value, _row: &Invoice| {
///         format!("${:.2}", value.as_i64().unwrap_or_default() as f64 / 100.0)
///     })
///     .with_priority(Priority::Medium);
///
/// // Paid invoices drop the status line from their card
/// let status = Column::new("paid", "Status")
///     .with_mobile_render(|row: &Invoice| (!row.paid).then(|| "Unpaid".to_string()))
///     .with_priority(Priority::Low);
///
/// assert_eq!(amount.key(), "amount_cents");
/// assert_eq!(status.priority(), Some(Priority::Low));
/// ```
pub struct Column<R> {
	key: String,
	title: String,
	render: Option<CellRenderer<R>>,
	mobile_render: Option<MobileRenderer<R>>,
	priority: Option<Priority>,
	sortable: bool,
}

impl<R> Column<R> {
	/// Creates a column reading `key` (direct or dotted) under header `title`
	pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			title: title.into(),
			render: None,
			mobile_render: None,
			priority: None,
			sortable: true,
		}
	}

	/// Sets a cell renderer, given the extracted value (`null` if missing)
	/// and the whole row
	pub fn with_render<F>(mut self, render: F) -> Self
	where
		F: Fn(&Value, &R) -> String + 'static,
	{
		self.render = Some(Box::new(render));
		self
	}

	/// Sets a card renderer, given the whole row; returning `None` leaves
	/// the column out of that card
	pub fn with_mobile_render<F>(mut self, render: F) -> Self
	where
		F: Fn(&R) -> Option<String> + 'static,
	{
		self.mobile_render = Some(Box::new(render));
		self
	}

	/// Sets the visibility tier
	pub fn with_priority(mut self, priority: Priority) -> Self {
		self.priority = Some(priority);
		self
	}

	/// Sets whether the table may be sorted by this column
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Row key this column reads
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Header text
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Visibility tier, `None` meaning always shown
	pub fn priority(&self) -> Option<Priority> {
		self.priority
	}

	/// Whether sorting by this column is allowed
	pub fn is_sortable(&self) -> bool {
		self.sortable
	}

	/// Whether the column shows in table mode at this width
	pub fn visible_at(&self, viewport: Viewport, settings: &TableSettings) -> bool {
		match self.priority {
			None => true,
			Some(priority) => viewport.width >= priority.min_width(settings),
		}
	}

	/// Text for this column's table cell
	pub(crate) fn cell_text(&self, row: &R, row_value: &Value, placeholder: &str) -> String {
		let value = extract_value(row_value, &self.key);
		match &self.render {
			Some(render) => render(value.unwrap_or(&Value::Null), row),
			None => format_value(value, placeholder),
		}
	}

	/// Text for this column's card line, `None` to omit it
	pub(crate) fn card_text(&self, row: &R, row_value: &Value, placeholder: &str) -> Option<String> {
		match &self.mobile_render {
			Some(render) => render(row),
			None => Some(self.cell_text(row, row_value, placeholder)),
		}
	}
}

impl<R> fmt::Debug for Column<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Column")
			.field("key", &self.key)
			.field("title", &self.title)
			.field("priority", &self.priority)
			.field("sortable", &self.sortable)
			.field("render", &self.render.is_some())
			.field("mobile_render", &self.mobile_render.is_some())
			.finish()
	}
}
