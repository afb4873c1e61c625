//! Client-side pagination over an in-memory collection.
//!
//! See [`Paginator`] for the state object and [`page_window`] for building a
//! page-number strip.

pub use sitedash_pagination::*;
