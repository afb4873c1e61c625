//! The [`FormState`] state object

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use sitedash_core::{Notifier, SubscriptionId};

use crate::rule::ValidationRule;
use crate::validate::validate_field;

/// Per-field state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldState {
	/// Current value
	pub value: Value,
	/// Current error, if the field is touched and invalid
	pub error: Option<String>,
	/// Set once the user edits the field or validation runs on it
	pub touched: bool,
}

impl FieldState {
	fn pristine(value: Value) -> Self {
		Self {
			value,
			error: None,
			touched: false,
		}
	}
}

/// Emitted by a [`FormState`] after a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
	/// A field's value was set (and the field re-validated)
	FieldChanged {
		/// Field name
		field: String,
	},
	/// A field's touched flag was set
	FieldTouched {
		/// Field name
		field: String,
		/// New flag
		touched: bool,
	},
	/// Every field was validated
	Validated {
		/// Whether the form is free of errors
		valid: bool,
	},
	/// The form was restored to its initial values
	Reset,
}

/// Builder for [`FormState`]
#[derive(Debug, Default)]
pub struct FormBuilder {
	initial: IndexMap<String, Value>,
	rules: HashMap<String, ValidationRule>,
}

impl FormBuilder {
	/// Declares a field with its initial value and rule
	///
	/// Declaring the same name twice keeps the original position and
	/// replaces the initial value and rule.
	pub fn field(
		mut self,
		name: impl Into<String>,
		initial: impl Into<Value>,
		rule: ValidationRule,
	) -> Self {
		let name = name.into();
		self.initial.insert(name.clone(), initial.into());
		self.rules.insert(name, rule);
		self
	}

	/// Finishes the declaration
	pub fn build(self) -> FormState {
		let fields = self
			.initial
			.iter()
			.map(|(name, value)| (name.clone(), FieldState::pristine(value.clone())))
			.collect();

		FormState {
			fields,
			initial: self.initial,
			rules: self.rules,
			notifier: Notifier::new(),
		}
	}
}

/// Values, errors and touched flags for a set of declared fields
///
/// Fields keep their declaration order. Untouched fields never show an
/// error, even when their value is invalid.
#[derive(Debug)]
pub struct FormState {
	fields: IndexMap<String, FieldState>,
	initial: IndexMap<String, Value>,
	rules: HashMap<String, ValidationRule>,
	notifier: Notifier<FormEvent>,
}

impl FormState {
	/// Starts declaring a form
	pub fn builder() -> FormBuilder {
		FormBuilder::default()
	}

	/// Stores a value, marks the field touched and validates it
	///
	/// Fields that were not declared are added on the fly and validated
	/// against an empty rule; [`reset_form`](Self::reset_form) removes them.
	pub fn set_field_value(&mut self, field: &str, value: impl Into<Value>) {
		let value = value.into();
		let error = self.run_rule(field, &value);

		if !self.rules.contains_key(field) && !self.fields.contains_key(field) {
			tracing::debug!(field, "value set on undeclared field");
		}

		let state = self
			.fields
			.entry(field.to_string())
			.or_insert_with(|| FieldState::pristine(Value::Null));
		state.value = value;
		state.touched = true;
		state.error = error;

		tracing::trace!(field, error = ?state.error, "field value set");
		self.notifier.emit(&FormEvent::FieldChanged {
			field: field.to_string(),
		});
	}

	/// Sets the touched flag
	///
	/// Touching re-validates the field; un-touching clears its error.
	/// Unknown fields are ignored.
	pub fn set_field_touched(&mut self, field: &str, touched: bool) {
		let Some(value) = self.fields.get(field).map(|s| s.value.clone()) else {
			tracing::debug!(field, "touched flag set on unknown field");
			return;
		};
		let error = if touched {
			self.run_rule(field, &value)
		} else {
			None
		};

		if let Some(state) = self.fields.get_mut(field) {
			state.touched = touched;
			state.error = error;
		}

		self.notifier.emit(&FormEvent::FieldTouched {
			field: field.to_string(),
			touched,
		});
	}

	/// Validates every field and marks them all touched
	///
	/// Returns whether the form is free of errors; use it as a pre-submit
	/// gate.
	pub fn validate_all(&mut self) -> bool {
		let results: Vec<(String, Option<String>)> = self
			.fields
			.iter()
			.map(|(name, state)| (name.clone(), self.run_rule(name, &state.value)))
			.collect();

		for (name, error) in results {
			if let Some(state) = self.fields.get_mut(&name) {
				state.touched = true;
				state.error = error;
			}
		}

		let valid = !self.has_errors();
		tracing::debug!(valid, fields = self.fields.len(), "form validated");
		self.notifier.emit(&FormEvent::Validated { valid });
		valid
	}

	/// Restores initial values and clears every error and touched flag
	pub fn reset_form(&mut self) {
		self.fields = self
			.initial
			.iter()
			.map(|(name, value)| (name.clone(), FieldState::pristine(value.clone())))
			.collect();
		tracing::trace!("form reset");
		self.notifier.emit(&FormEvent::Reset);
	}

	/// Validates and, when valid, hands the values to `on_valid`
	///
	/// # Examples
	///
	/// ```
	/// use serde_json::json;
	/// use sitedash_forms::{FormState, ValidationRule};
	///
	/// let mut form = FormState::builder()
	///     .field("title", "", ValidationRule::new().required())
	///     .build();
	///
	/// assert_eq!(form.submit(|_| "saved"), None);
	///
	/// form.set_field_value("title", json!("Daily safety log"));
	/// let payload = form.submit(|values| serde_json::to_value(values).unwrap());
	/// assert_eq!(payload, Some(json!({ "title": "Daily safety log" })));
	/// ```
	pub fn submit<F, R>(&mut self, on_valid: F) -> Option<R>
	where
		F: FnOnce(&IndexMap<String, Value>) -> R,
	{
		if !self.validate_all() {
			return None;
		}
		Some(on_valid(&self.values()))
	}

	/// Whether any field currently shows an error
	pub fn has_errors(&self) -> bool {
		self.fields.values().any(|state| state.error.is_some())
	}

	/// Whether any field has been touched
	pub fn is_touched(&self) -> bool {
		self.fields.values().any(|state| state.touched)
	}

	/// State of one field
	pub fn field(&self, field: &str) -> Option<&FieldState> {
		self.fields.get(field)
	}

	/// Every field, in declaration order
	pub fn fields(&self) -> &IndexMap<String, FieldState> {
		&self.fields
	}

	/// Current value of one field
	pub fn value(&self, field: &str) -> Option<&Value> {
		self.fields.get(field).map(|state| &state.value)
	}

	/// Current error of one field
	pub fn error(&self, field: &str) -> Option<&str> {
		self.fields.get(field).and_then(|state| state.error.as_deref())
	}

	/// Whether one field has been touched
	pub fn touched(&self, field: &str) -> bool {
		self.fields.get(field).is_some_and(|state| state.touched)
	}

	/// All current values, in declaration order
	pub fn values(&self) -> IndexMap<String, Value> {
		self.fields
			.iter()
			.map(|(name, state)| (name.clone(), state.value.clone()))
			.collect()
	}

	/// All current errors, in declaration order
	pub fn errors(&self) -> IndexMap<String, String> {
		self.fields
			.iter()
			.filter_map(|(name, state)| state.error.clone().map(|error| (name.clone(), error)))
			.collect()
	}

	/// Registers a change listener
	pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
	where
		F: FnMut(&FormEvent) + 'static,
	{
		self.notifier.subscribe(listener)
	}

	/// Removes a change listener
	pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		self.notifier.unsubscribe(id)
	}

	fn run_rule(&self, field: &str, value: &Value) -> Option<String> {
		match self.rules.get(field) {
			Some(rule) => validate_field(field, value, rule),
			None => None,
		}
	}
}
