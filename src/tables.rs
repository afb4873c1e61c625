//! Responsive tables that switch to a card list on narrow viewports.

pub use sitedash_tables::*;
