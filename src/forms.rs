//! Form state with per-field validation.
//!
//! # Examples
//!
//! ```
//! use sitedash::forms::{FormState, ValidationRule};
//!
//! let mut form = FormState::builder()
//!     .field("email", "", ValidationRule::new().required().email())
//!     .build();
//!
//! form.set_field_value("email", "not-an-email");
//! assert_eq!(form.error("email"), Some("email format is invalid"));
//! ```

pub use sitedash_forms::*;
