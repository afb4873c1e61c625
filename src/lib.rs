//! # sitedash
//!
//! Headless UI state for construction-management dashboards.
//!
//! sitedash holds the state behind the three widgets every list-and-detail
//! dashboard repeats: a paginator, a validated form and a table that turns
//! into cards on a phone. Nothing here draws pixels. Each component owns its
//! state, exposes operations that keep that state consistent, and emits
//! change events a view layer can subscribe to.
//!
//! ## Feature Flags
//!
//! - `full` (default) - Everything below
//! - `conf` - [`Settings`] loading from TOML, `.env` and environment variables
//! - `pagination` - [`Paginator`] and page-number windows
//! - `forms` - [`FormState`] and [`ValidationRule`]
//! - `tables` - [`ResponsiveTable`] and friends
//! - `export` - CSV and JSON export for tables
//!
//! ## Quick Example
//!
//! ```
//! # #[cfg(feature = "full")]
//! # {
//! use serde::Serialize;
//! use sitedash::prelude::*;
//!
//! #[derive(Serialize)]
//! struct Project {
//!     name: String,
//!     status: String,
//! }
//!
//! let projects: Vec<Project> = (1..=12)
//!     .map(|n| Project { name: format!("Site {}", n), status: "Active".into() })
//!     .collect();
//!
//! let settings = Settings::default();
//! let mut pages = Paginator::from_settings(projects, &settings.pagination);
//! pages.go_to_next_page();
//!
//! let table = ResponsiveTable::new(vec![
//!     Column::new("name", "Project"),
//!     Column::new("status", "Status").with_priority(Priority::Low),
//! ])
//! .with_settings(&settings.tables);
//!
//! let rendered = table.render(pages.current_items(), Viewport::new(1440));
//! assert_eq!(rendered.len(), 2);
//! # }
//! ```

#[cfg(feature = "conf")]
pub mod conf;
pub mod core;
#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "pagination")]
pub mod pagination;
#[cfg(feature = "tables")]
pub mod tables;

// Re-export core types
pub use sitedash_core::{CoreError, CoreResult, Notifier, SubscriptionId};

// Re-export settings
#[cfg(feature = "conf")]
pub use sitedash_conf::{
	LoggingSettings, PaginationSettings, Settings, SettingsError, SettingsResult, TableSettings,
};

// Re-export pagination
#[cfg(feature = "pagination")]
pub use sitedash_pagination::{PageLink, PaginationEvent, PaginationState, Paginator, page_window};

// Re-export forms
#[cfg(feature = "forms")]
pub use sitedash_forms::{
	FieldState, FormBuilder, FormError, FormEvent, FormResult, FormState, ValidationRule,
};

// Re-export tables
#[cfg(feature = "tables")]
pub use sitedash_tables::{
	Column, Priority, RenderedTable, ResponsiveTable, SortDirection, TableError, TableResult,
	Viewport,
};

pub mod prelude {
	//! Commonly used types

	pub use crate::{Notifier, SubscriptionId};

	#[cfg(feature = "conf")]
	pub use crate::Settings;

	#[cfg(feature = "pagination")]
	pub use crate::{PageLink, PaginationEvent, Paginator};

	#[cfg(feature = "forms")]
	pub use crate::{FormEvent, FormState, ValidationRule};

	#[cfg(feature = "tables")]
	pub use crate::{Column, Priority, RenderedTable, ResponsiveTable, SortDirection, Viewport};
}
