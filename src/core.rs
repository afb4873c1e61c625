//! Shared building blocks: errors, change notification and logging setup.
//!
//! # Examples
//!
//! ```
//! use sitedash::core::Notifier;
//!
//! let mut notifier: Notifier<u32> = Notifier::new();
//! let id = notifier.subscribe(|n| println!("got {}", n));
//! notifier.emit(&7);
//! assert!(notifier.unsubscribe(id));
//! ```

pub use sitedash_core::*;
