//! The [`Paginator`] state object

use sitedash_conf::PaginationSettings;
use sitedash_core::{Notifier, SubscriptionId};

use crate::state::{PaginationState, clamp_page, total_pages};
use crate::window::{PageLink, page_window};

/// Emitted by a [`Paginator`] after a state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationEvent {
	/// The current page moved
	PageChanged {
		/// Previous page
		from: usize,
		/// New page
		to: usize,
	},
	/// The page size changed; `page` is the page chosen to keep the first
	/// visible item on screen
	PageSizeChanged {
		/// Previous size
		from: usize,
		/// New size
		to: usize,
		/// Current page after the change
		page: usize,
	},
	/// The collection was replaced
	ItemsReplaced {
		/// New collection length
		total: usize,
		/// Current page after re-clamping
		page: usize,
	},
}

/// Pagination over an owned, ordered collection
///
/// `current_page` is always within `[1, max(1, total_pages)]`.
#[derive(Debug)]
pub struct Paginator<T> {
	items: Vec<T>,
	current_page: usize,
	page_size: usize,
	page_size_options: Vec<usize>,
	window_siblings: usize,
	notifier: Notifier<PaginationEvent>,
}

impl<T> Paginator<T> {
	/// Creates a paginator on page 1; a `page_size` of 0 is treated as 1
	///
	/// The page-number strip shows one sibling on each side of the current
	/// page and no page-size choices are offered.
	pub fn new(items: Vec<T>, page_size: usize) -> Self {
		Self {
			items,
			current_page: 1,
			page_size: page_size.max(1),
			page_size_options: Vec::new(),
			window_siblings: 1,
			notifier: Notifier::new(),
		}
	}

	/// Creates a paginator from configured settings
	///
	/// Takes the default page size, the page-size choices and the number of
	/// siblings shown by [`page_window`](Self::page_window).
	///
	/// # Examples
	///
	/// ```
	/// use sitedash_conf::PaginationSettings;
	/// use sitedash_pagination::{PageLink::{Ellipsis, Page}, Paginator};
	///
	/// let settings = PaginationSettings {
	///     page_size: 5,
	///     page_size_options: vec![5, 20],
	///     window_siblings: 2,
	/// };
	/// let mut paginator = Paginator::from_settings((0..100).collect::<Vec<_>>(), &settings);
	/// paginator.go_to_page(10);
	///
	/// assert_eq!(paginator.page_size_options(), &[5, 20]);
	/// assert_eq!(
	///     paginator.page_window(),
	///     vec![Page(1), Ellipsis, Page(8), Page(9), Page(10), Page(11), Page(12), Ellipsis, Page(20)]
	/// );
	/// ```
	pub fn from_settings(items: Vec<T>, settings: &PaginationSettings) -> Self {
		Self::new(items, settings.page_size)
			.with_page_size_options(settings.page_size_options.clone())
			.with_window_siblings(settings.window_siblings)
	}

	/// Sets the choices offered by a page-size selector; zeros are dropped
	pub fn with_page_size_options(mut self, options: Vec<usize>) -> Self {
		self.page_size_options = options.into_iter().filter(|&size| size > 0).collect();
		self
	}

	/// Sets how many pages [`page_window`](Self::page_window) shows on each
	/// side of the current page
	pub fn with_window_siblings(mut self, siblings: usize) -> Self {
		self.window_siblings = siblings;
		self
	}

	/// Choices for a page-size selector
	pub fn page_size_options(&self) -> &[usize] {
		&self.page_size_options
	}

	/// Pages shown on each side of the current page in the strip
	pub fn window_siblings(&self) -> usize {
		self.window_siblings
	}

	/// The whole collection
	pub fn items(&self) -> &[T] {
		&self.items
	}

	/// Replaces the collection and re-clamps the current page
	pub fn set_items(&mut self, items: Vec<T>) {
		self.items = items;
		self.current_page = clamp_page(self.current_page, self.total_pages());
		tracing::debug!(
			total = self.items.len(),
			page = self.current_page,
			"pagination items replaced"
		);
		self.notifier.emit(&PaginationEvent::ItemsReplaced {
			total: self.items.len(),
			page: self.current_page,
		});
	}

	/// Current page (1-indexed)
	pub fn current_page(&self) -> usize {
		self.current_page
	}

	/// Items per page
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	/// Length of the collection
	pub fn total_items(&self) -> usize {
		self.items.len()
	}

	/// Number of pages, 0 for an empty collection
	pub fn total_pages(&self) -> usize {
		total_pages(self.items.len(), self.page_size)
	}

	/// Whether [`go_to_next_page`](Self::go_to_next_page) would move
	pub fn has_next_page(&self) -> bool {
		self.current_page < self.total_pages()
	}

	/// Whether [`go_to_previous_page`](Self::go_to_previous_page) would move
	pub fn has_previous_page(&self) -> bool {
		self.current_page > 1
	}

	/// 1-indexed position of the first visible item, 0 when empty
	pub fn start_item(&self) -> usize {
		self.state().start_item
	}

	/// 1-indexed position of the last visible item, 0 when empty
	pub fn end_item(&self) -> usize {
		self.state().end_item
	}

	/// Full snapshot of the derived values
	pub fn state(&self) -> PaginationState {
		PaginationState::compute(self.current_page, self.page_size, self.items.len())
	}

	/// The slice shown on the current page
	pub fn current_items(&self) -> &[T] {
		&self.items[self.state().range()]
	}

	/// Jumps to page `page`, clamped into range
	///
	/// Returns the page actually selected.
	pub fn go_to_page(&mut self, page: usize) -> usize {
		let target = clamp_page(page, self.total_pages());
		self.move_to(target);
		target
	}

	/// Advances one page; no-op on the last page
	pub fn go_to_next_page(&mut self) -> bool {
		if !self.has_next_page() {
			return false;
		}
		self.move_to(self.current_page + 1);
		true
	}

	/// Goes back one page; no-op on the first page
	pub fn go_to_previous_page(&mut self) -> bool {
		if !self.has_previous_page() {
			return false;
		}
		self.move_to(self.current_page - 1);
		true
	}

	/// Changes the page size, keeping the first visible item on screen
	///
	/// The 0-based index of the first item on the current page is mapped to
	/// the page that contains it under the new size. A size of 0 is treated
	/// as 1.
	///
	/// # Examples
	///
	/// ```
	/// use sitedash_pagination::Paginator;
	///
	/// let mut paginator = Paginator::new((0..100).collect::<Vec<_>>(), 10);
	/// paginator.go_to_page(4); // items 30..40
	/// paginator.change_page_size(25);
	/// assert_eq!(paginator.current_page(), 2); // items 25..50 include item 30
	/// ```
	pub fn change_page_size(&mut self, page_size: usize) {
		let page_size = page_size.max(1);
		if page_size == self.page_size {
			return;
		}

		let first_index = (self.current_page - 1) * self.page_size;
		let previous = self.page_size;
		self.page_size = page_size;
		self.current_page = clamp_page(first_index / page_size + 1, self.total_pages());

		tracing::debug!(
			from = previous,
			to = page_size,
			page = self.current_page,
			"page size changed"
		);
		self.notifier.emit(&PaginationEvent::PageSizeChanged {
			from: previous,
			to: page_size,
			page: self.current_page,
		});
	}

	/// Page-number strip around the current page
	pub fn page_window(&self) -> Vec<PageLink> {
		page_window(self.current_page, self.total_pages(), self.window_siblings)
	}

	/// Registers a change listener
	pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
	where
		F: FnMut(&PaginationEvent) + 'static,
	{
		self.notifier.subscribe(listener)
	}

	/// Removes a change listener
	pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		self.notifier.unsubscribe(id)
	}

	fn move_to(&mut self, target: usize) {
		if target == self.current_page {
			return;
		}
		let from = self.current_page;
		self.current_page = target;
		tracing::trace!(from, to = target, "page changed");
		self.notifier
			.emit(&PaginationEvent::PageChanged { from, to: target });
	}
}

impl<T> Default for Paginator<T> {
	fn default() -> Self {
		Self::from_settings(Vec::new(), &PaginationSettings::default())
	}
}
