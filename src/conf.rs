//! Settings loading from defaults, TOML files, `.env` and environment
//! variables.
//!
//! # Examples
//!
//! ```
//! use sitedash::conf::Settings;
//!
//! let settings = Settings::from_toml_str("[pagination]\npage_size = 25\n").unwrap();
//! assert_eq!(settings.pagination.page_size, 25);
//! assert_eq!(settings.tables.mobile_breakpoint, 768);
//! ```

pub use sitedash_conf::*;
