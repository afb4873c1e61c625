//! Viewport observations

use sitedash_conf::TableSettings;

/// The width the table is being laid out for, in CSS pixels
///
/// A viewport is an observation of the environment; tables read it on every
/// render and never store it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Viewport {
	/// Width in CSS pixels
	pub width: u32,
}

impl Viewport {
	/// Creates a viewport of the given width
	pub fn new(width: u32) -> Self {
		Self { width }
	}

	/// Whether this width gets the card layout
	pub fn is_mobile(&self, settings: &TableSettings) -> bool {
		self.width < settings.mobile_breakpoint
	}
}

impl From<u32> for Viewport {
	fn from(width: u32) -> Self {
		Self::new(width)
	}
}
