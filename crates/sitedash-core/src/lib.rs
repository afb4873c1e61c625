//! Shared primitives for sitedash
//!
//! The state objects in the sibling crates (paginators, forms, tables) are
//! plain owned values with explicit mutation methods. This crate provides the
//! pieces they have in common:
//!
//! - [`Notifier`]: change notification so a UI layer can re-render when a
//!   state object mutates
//! - [`CoreError`]: errors raised while wiring up the ambient stack
//! - [`logging`]: `tracing` subscriber initialisation
//!
//! ## Example
//!
//! ```
//! use sitedash_core::Notifier;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let seen = Rc::new(Cell::new(0));
//! let mut notifier: Notifier<u32> = Notifier::new();
//!
//! let counter = Rc::clone(&seen);
//! notifier.subscribe(move |n| counter.set(counter.get() + *n));
//!
//! notifier.emit(&5);
//! assert_eq!(seen.get(), 5);
//! ```

#![warn(missing_docs)]

pub mod exception;
pub mod logging;
pub mod notify;

pub use exception::{CoreError, CoreResult};
pub use notify::{Notifier, SubscriptionId};
