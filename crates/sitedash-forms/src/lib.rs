//! Headless form state and validation
//!
//! [`FormState`] keeps a value, an error and a touched flag for every field,
//! and validates fields against their [`ValidationRule`] as they change.
//! Validation never fails: it produces an error message or nothing.
//!
//! ```
//! use serde_json::json;
//! use sitedash_forms::{FormState, ValidationRule};
//!
//! let mut form = FormState::builder()
//!     .field("name", "", ValidationRule::new().required().min_length(3))
//!     .field("budget", 0, ValidationRule::new().min(1000.0))
//!     .build();
//!
//! form.set_field_value("name", json!(""));
//! assert_eq!(form.error("name"), Some("name is required"));
//!
//! form.set_field_value("name", json!("Harbor Bridge Retrofit"));
//! form.set_field_value("budget", json!(250000));
//! assert!(form.validate_all());
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod form;
pub mod rule;
pub mod validate;

pub use error::{FormError, FormResult};
pub use form::{FieldState, FormBuilder, FormEvent, FormState};
pub use rule::{CustomValidator, ValidationRule};
pub use validate::{is_empty, validate_field};
