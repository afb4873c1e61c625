//! The [`ResponsiveTable`] renderer

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use sitedash_conf::TableSettings;

use crate::column::Column;
use crate::error::{TableError, TableResult};
use crate::extract::row_value;
use crate::render::{Card, CardField, HeaderCell, RenderedRow, RenderedTable};
use crate::sorting::{SortDirection, sort_order};
use crate::viewport::Viewport;

type RowClickHandler<R> = Box<dyn FnMut(&R)>;

/// Renders a collection as a desktop table or a card list
pub struct ResponsiveTable<R> {
	columns: Vec<Column<R>>,
	settings: TableSettings,
	sort: Option<(String, SortDirection)>,
	on_row_click: Option<RowClickHandler<R>>,
}

impl<R> ResponsiveTable<R> {
	/// Creates a table with default settings
	pub fn new(columns: Vec<Column<R>>) -> Self {
		Self {
			columns,
			settings: TableSettings::default(),
			sort: None,
			on_row_click: None,
		}
	}

	/// Uses configured breakpoints, empty message and placeholder
	pub fn with_settings(mut self, settings: &TableSettings) -> Self {
		self.settings = settings.clone();
		self
	}

	/// Overrides the empty-state message
	pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
		self.settings.empty_message = message.into();
		self
	}

	/// Sets the callback run when a row or card is clicked
	pub fn on_row_click<F>(mut self, handler: F) -> Self
	where
		F: FnMut(&R) + 'static,
	{
		self.on_row_click = Some(Box::new(handler));
		self
	}

	/// Declared columns
	pub fn columns(&self) -> &[Column<R>] {
		&self.columns
	}

	/// Settings in effect
	pub fn settings(&self) -> &TableSettings {
		&self.settings
	}

	/// Columns shown in table mode at this width
	pub fn visible_columns(&self, viewport: Viewport) -> Vec<&Column<R>> {
		self.columns
			.iter()
			.filter(|column| column.visible_at(viewport, &self.settings))
			.collect()
	}

	/// Active sort
	pub fn sort(&self) -> Option<(&str, SortDirection)> {
		self.sort
			.as_ref()
			.map(|(key, direction)| (key.as_str(), *direction))
	}

	/// Sorts by a declared, sortable column
	pub fn sort_by(&mut self, key: &str, direction: SortDirection) -> TableResult<()> {
		self.sortable_column(key)?;
		tracing::debug!(key, ?direction, "table sort set");
		self.sort = Some((key.to_string(), direction));
		Ok(())
	}

	/// Header-click behaviour: a new column sorts ascending, the active
	/// column flips direction
	pub fn toggle_sort(&mut self, key: &str) -> TableResult<SortDirection> {
		let direction = match &self.sort {
			Some((active, direction)) if active == key => direction.toggle(),
			_ => SortDirection::Ascending,
		};
		self.sort_by(key, direction)?;
		Ok(direction)
	}

	/// Applies a `?sort=` query value such as `-budget`
	pub fn sort_from_query(&mut self, query: &str) -> TableResult<()> {
		let (direction, key) = SortDirection::parse_from_query(query);
		self.sort_by(key, direction)
	}

	/// Restores input order
	pub fn clear_sort(&mut self) {
		self.sort = None;
	}

	/// Runs the row-click callback for `rows[index]`
	///
	/// Returns whether a callback ran. Indices are positions in the input
	/// collection, as carried by [`RenderedRow::index`] and [`Card::index`],
	/// so clicks behave the same in both layouts.
	pub fn click_row(&mut self, rows: &[R], index: usize) -> bool {
		let (Some(handler), Some(row)) = (self.on_row_click.as_mut(), rows.get(index)) else {
			return false;
		};
		handler(row);
		true
	}

	fn sortable_column(&self, key: &str) -> TableResult<&Column<R>> {
		let column = self
			.columns
			.iter()
			.find(|column| column.key() == key)
			.ok_or_else(|| TableError::UnknownColumn(key.to_string()))?;
		if !column.is_sortable() {
			return Err(TableError::NotSortable(key.to_string()));
		}
		Ok(column)
	}
}

impl<R: Serialize> ResponsiveTable<R> {
	/// Renders for the viewport: cards below the mobile breakpoint,
	/// otherwise a table
	pub fn render(&self, rows: &[R], viewport: Viewport) -> RenderedTable {
		if viewport.is_mobile(&self.settings) {
			tracing::trace!(width = viewport.width, "rendering card layout");
			self.render_cards(rows)
		} else {
			tracing::trace!(width = viewport.width, "rendering table layout");
			self.render_desktop(rows, viewport)
		}
	}

	/// Renders the table layout, filtering columns by priority
	pub fn render_desktop(&self, rows: &[R], viewport: Viewport) -> RenderedTable {
		if rows.is_empty() {
			return self.empty();
		}

		let columns = self.visible_columns(viewport);
		let headers = columns
			.iter()
			.map(|column| HeaderCell {
				key: column.key().to_string(),
				title: column.title().to_string(),
				sortable: column.is_sortable(),
				sort: self
					.sort()
					.filter(|(key, _)| *key == column.key())
					.map(|(_, direction)| direction),
			})
			.collect();

		let rows = self
			.ordered(rows)
			.into_iter()
			.map(|(index, row, value)| RenderedRow {
				index,
				cells: columns
					.iter()
					.map(|column| column.cell_text(row, &value, &self.settings.placeholder))
					.collect(),
			})
			.collect();

		RenderedTable::Desktop { headers, rows }
	}

	/// Renders the card layout; every column is eligible regardless of
	/// priority
	pub fn render_cards(&self, rows: &[R]) -> RenderedTable {
		if rows.is_empty() {
			return self.empty();
		}

		let cards = self
			.ordered(rows)
			.into_iter()
			.map(|(index, row, value)| Card {
				index,
				fields: self
					.columns
					.iter()
					.filter_map(|column| {
						column
							.card_text(row, &value, &self.settings.placeholder)
							.map(|content| CardField {
								title: column.title().to_string(),
								content,
							})
					})
					.collect(),
			})
			.collect();

		RenderedTable::Cards { cards }
	}

	/// Rows in display order, each with its input index and serialised form
	pub(crate) fn ordered<'a>(&self, rows: &'a [R]) -> Vec<(usize, &'a R, Value)> {
		let mut values: Vec<Value> = rows.iter().map(row_value).collect();
		let order = match &self.sort {
			Some((key, direction)) => sort_order(&values, key, *direction),
			None => (0..rows.len()).collect(),
		};

		order
			.into_iter()
			.map(|index| (index, &rows[index], std::mem::take(&mut values[index])))
			.collect()
	}

	fn empty(&self) -> RenderedTable {
		RenderedTable::Empty {
			message: self.settings.empty_message.clone(),
		}
	}
}

impl<R> fmt::Debug for ResponsiveTable<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ResponsiveTable")
			.field("columns", &self.columns)
			.field("settings", &self.settings)
			.field("sort", &self.sort)
			.field("on_row_click", &self.on_row_click.is_some())
			.finish()
	}
}
