//! Responsive table rendering for sitedash
//!
//! One set of [`Column`] declarations drives two presentations:
//!
//! - a desktop table, where columns are filtered by [`Priority`] against the
//!   viewport width
//! - a stacked card list for narrow viewports, where every column appears
//!   unless its mobile renderer hides it
//!
//! Rendering is headless: [`ResponsiveTable::render`] returns a
//! [`RenderedTable`] describing what to draw, which a view layer turns into
//! markup.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph TD
//!     A[ResponsiveTable] --> B[Columns]
//!     A --> C[TableSettings]
//!     A --> D[Sort]
//!     B --> E[extract_value]
//!     A -->|render| F[RenderedTable]
//!     F --> G[Empty]
//!     F --> H[Desktop]
//!     F --> I[Cards]
//! ```
//!
//! ## Example
//!
//! ```
//! use serde::Serialize;
//! use sitedash_tables::{Column, Priority, RenderedTable, ResponsiveTable, Viewport};
//!
//! #[derive(Serialize)]
//! struct Project {
//!     name: String,
//!     status: String,
//! }
//!
//! let table = ResponsiveTable::new(vec![
//!     Column::new("name", "Project").with_priority(Priority::High),
//!     Column::new("status", "Status").with_priority(Priority::Low),
//! ]);
//! let rows = vec![Project { name: "Depot".into(), status: "Active".into() }];
//!
//! match table.render(&rows, Viewport::new(1440)) {
//!     RenderedTable::Desktop { headers, rows } => {
//!         assert_eq!(headers.len(), 2);
//!         assert_eq!(rows[0].cells, vec!["Depot", "Active"]);
//!     }
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

#![warn(missing_docs)]

pub mod column;
pub mod error;
#[cfg(feature = "export")]
pub mod export;
pub mod extract;
pub mod render;
pub mod sorting;
pub mod table;
pub mod viewport;

pub use column::{Column, Priority};
pub use error::{TableError, TableResult};
pub use extract::{extract_value, format_value};
pub use render::{Card, CardField, HeaderCell, RenderedRow, RenderedTable};
pub use sorting::{SortDirection, sort_rows};
pub use table::ResponsiveTable;
pub use viewport::Viewport;
