//! Headless render output
//!
//! These types describe what a view layer should draw. They serialise to
//! JSON so a browser front end can consume them directly.

use serde::Serialize;

use crate::sorting::SortDirection;

/// One header cell of the desktop table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
	/// Column key
	pub key: String,
	/// Header text
	pub title: String,
	/// Whether clicking the header may sort
	pub sortable: bool,
	/// Active sort on this column, if any
	pub sort: Option<SortDirection>,
}

/// One desktop table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
	/// Position of the row in the input collection
	pub index: usize,
	/// Cell texts, aligned with the headers
	pub cells: Vec<String>,
}

/// One labelled line of a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardField {
	/// Column title
	pub title: String,
	/// Rendered content
	pub content: String,
}

/// One row rendered as a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
	/// Position of the row in the input collection
	pub index: usize,
	/// Lines of the card, in column order
	pub fields: Vec<CardField>,
}

/// What to draw for a collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RenderedTable {
	/// The collection is empty; show only this message
	Empty {
		/// Empty-state message
		message: String,
	},
	/// Desktop table
	Desktop {
		/// Visible column headers
		headers: Vec<HeaderCell>,
		/// Rows in display order
		rows: Vec<RenderedRow>,
	},
	/// Stacked card list
	Cards {
		/// Cards in display order
		cards: Vec<Card>,
	},
}

impl RenderedTable {
	/// Whether this is the empty state
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty { .. })
	}

	/// Number of rendered rows or cards
	pub fn len(&self) -> usize {
		match self {
			Self::Empty { .. } => 0,
			Self::Desktop { rows, .. } => rows.len(),
			Self::Cards { cards } => cards.len(),
		}
	}

	/// Input indices in display order
	pub fn row_indices(&self) -> Vec<usize> {
		match self {
			Self::Empty { .. } => Vec::new(),
			Self::Desktop { rows, .. } => rows.iter().map(|row| row.index).collect(),
			Self::Cards { cards } => cards.iter().map(|card| card.index).collect(),
		}
	}
}
