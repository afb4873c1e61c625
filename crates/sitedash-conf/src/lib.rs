//! # Settings
//!
//! Configuration for the sitedash utilities. Settings are layered:
//!
//! 1. built-in defaults
//! 2. an optional TOML file
//! 3. a `.env` file in the working directory, if present
//! 4. `SITEDASH_*` environment variables
//!
//! ## Example
//!
//! ```
//! use sitedash_conf::Settings;
//!
//! let settings = Settings::from_toml_str(
//!     r#"
//!     [pagination]
//!     page_size = 25
//!
//!     [tables]
//!     empty_message = "No projects yet"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(settings.pagination.page_size, 25);
//! assert_eq!(settings.tables.empty_message, "No projects yet");
//! assert_eq!(settings.tables.mobile_breakpoint, 768);
//! ```

#![warn(missing_docs)]

pub mod env;
pub mod error;
pub mod settings;

pub use error::{SettingsError, SettingsResult};
pub use settings::{LoggingSettings, PaginationSettings, Settings, TableSettings};
