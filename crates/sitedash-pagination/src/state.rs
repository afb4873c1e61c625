//! Pagination arithmetic and the serialisable state snapshot

use serde::Serialize;

/// Number of pages needed for `total_items`, 0 for an empty collection
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
	if total_items == 0 {
		0
	} else {
		total_items.div_ceil(page_size.max(1))
	}
}

/// Clamps a requested page into `[1, max(1, total_pages)]`
///
/// # Examples
///
/// ```
/// use sitedash_pagination::clamp_page;
///
/// assert_eq!(clamp_page(0, 3), 1);
/// assert_eq!(clamp_page(7, 3), 3);
/// assert_eq!(clamp_page(5, 0), 1);
/// ```
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
	page.max(1).min(total_pages.max(1))
}

/// Snapshot of a paginator, suitable for handing to a view layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
	/// Current page (1-indexed)
	pub current_page: usize,
	/// Items per page
	pub page_size: usize,
	/// Length of the underlying collection
	pub total_items: usize,
	/// `ceil(total_items / page_size)`, 0 when empty
	pub total_pages: usize,
	/// Whether a following page exists
	pub has_next_page: bool,
	/// Whether a preceding page exists
	pub has_previous_page: bool,
	/// 1-indexed position of the first visible item, 0 when empty
	pub start_item: usize,
	/// 1-indexed position of the last visible item, 0 when empty
	pub end_item: usize,
}

impl PaginationState {
	/// Derives the full snapshot from the three stored values
	pub fn compute(current_page: usize, page_size: usize, total_items: usize) -> Self {
		let page_size = page_size.max(1);
		let total_pages = total_pages(total_items, page_size);
		let current_page = clamp_page(current_page, total_pages);
		let (start_item, end_item) = if total_items == 0 {
			(0, 0)
		} else {
			let start = (current_page - 1) * page_size + 1;
			(start, (current_page * page_size).min(total_items))
		};

		Self {
			current_page,
			page_size,
			total_items,
			total_pages,
			has_next_page: current_page < total_pages,
			has_previous_page: current_page > 1,
			start_item,
			end_item,
		}
	}

	/// Half-open index range of the current page within the collection
	pub fn range(&self) -> std::ops::Range<usize> {
		if self.total_items == 0 {
			0..0
		} else {
			(self.start_item - 1)..self.end_item
		}
	}
}
