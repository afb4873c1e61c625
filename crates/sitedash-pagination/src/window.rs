//! Page-number strip shown under paginated lists

use serde::Serialize;

/// One slot in a page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageLink {
	/// A clickable page number
	Page(usize),
	/// A gap between non-adjacent page numbers
	Ellipsis,
}

/// Builds the strip `1 … 4 5 6 … 10` around `current`
///
/// The first and last pages are always present; `siblings` pages are shown on
/// each side of `current`. A gap of exactly one page is filled with that page
/// rather than an ellipsis.
///
/// # Examples
///
/// ```
/// use sitedash_pagination::{page_window, PageLink::{Ellipsis, Page}};
///
/// assert_eq!(
///     page_window(5, 10, 1),
///     vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
/// );
/// assert_eq!(page_window(1, 3, 1), vec![Page(1), Page(2), Page(3)]);
/// assert!(page_window(1, 0, 1).is_empty());
/// ```
pub fn page_window(current: usize, total_pages: usize, siblings: usize) -> Vec<PageLink> {
	if total_pages == 0 {
		return Vec::new();
	}

	let current = current.clamp(1, total_pages);
	let start = current.saturating_sub(siblings).max(1);
	let end = (current + siblings).min(total_pages);
	let mut links = Vec::with_capacity(end - start + 5);

	if start > 1 {
		links.push(PageLink::Page(1));
		match start {
			2 => {}
			3 => links.push(PageLink::Page(2)),
			_ => links.push(PageLink::Ellipsis),
		}
	}

	links.extend((start..=end).map(PageLink::Page));

	if end < total_pages {
		let gap = total_pages - end;
		match gap {
			1 => {}
			2 => links.push(PageLink::Page(total_pages - 1)),
			_ => links.push(PageLink::Ellipsis),
		}
		links.push(PageLink::Page(total_pages));
	}

	links
}
