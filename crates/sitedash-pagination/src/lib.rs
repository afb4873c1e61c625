//! Client-side pagination for sitedash lists
//!
//! [`Paginator`] owns an ordered collection and slices it into pages. All
//! navigation clamps instead of failing: asking for page 99 of a three-page
//! list lands on page 3, and page 0 lands on page 1.
//!
//! ```
//! use sitedash_pagination::Paginator;
//!
//! let mut paginator = Paginator::new((1..=25).collect::<Vec<_>>(), 10);
//! assert_eq!(paginator.total_pages(), 3);
//! assert_eq!(paginator.current_items(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
//!
//! paginator.go_to_page(3);
//! assert_eq!(paginator.current_items(), &[21, 22, 23, 24, 25]);
//! assert!(!paginator.go_to_next_page());
//! ```

#![warn(missing_docs)]

pub mod paginator;
pub mod state;
pub mod window;

pub use paginator::{PaginationEvent, Paginator};
pub use state::{PaginationState, clamp_page, total_pages};
pub use window::{PageLink, page_window};
