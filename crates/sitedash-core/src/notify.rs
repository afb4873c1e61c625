//! Change notification for owned state objects
//!
//! A [`Notifier`] lives inside a state object and is driven by that object's
//! mutation methods. Subscribers are plain closures; they run synchronously,
//! in subscription order, on the thread that performed the mutation.
//!
//! Unlike a reactive signal graph there is no dependency tracking: the state
//! object decides which event to emit, and only emits when something actually
//! changed.

use std::fmt;

/// Handle returned by [`Notifier::subscribe`], used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "subscription-{}", self.0)
	}
}

type Listener<E> = Box<dyn FnMut(&E)>;

/// A list of change listeners for events of type `E`
pub struct Notifier<E> {
	next_id: u64,
	listeners: Vec<(SubscriptionId, Listener<E>)>,
}

impl<E> Notifier<E> {
	/// Creates a notifier with no subscribers
	pub fn new() -> Self {
		Self {
			next_id: 0,
			listeners: Vec::new(),
		}
	}

	/// Registers a listener and returns its handle
	///
	/// # Examples
	///
	/// ```
	/// use sitedash_core::Notifier;
	///
	/// let mut notifier: Notifier<&str> = Notifier::new();
	/// let a = notifier.subscribe(|_| {});
	/// let b = notifier.subscribe(|_| {});
	/// assert_ne!(a, b);
	/// assert_eq!(notifier.len(), 2);
	/// ```
	pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
	where
		F: FnMut(&E) + 'static,
	{
		let id = SubscriptionId(self.next_id);
		self.next_id += 1;
		self.listeners.push((id, Box::new(listener)));
		tracing::trace!(%id, "listener subscribed");
		id
	}

	/// Removes a listener, returning whether it was registered
	pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		let before = self.listeners.len();
		self.listeners.retain(|(existing, _)| *existing != id);
		let removed = self.listeners.len() != before;
		if removed {
			tracing::trace!(%id, "listener unsubscribed");
		}
		removed
	}

	/// Delivers an event to every listener
	pub fn emit(&mut self, event: &E) {
		for (_, listener) in self.listeners.iter_mut() {
			listener(event);
		}
	}

	/// Number of registered listeners
	pub fn len(&self) -> usize {
		self.listeners.len()
	}

	/// Whether no listener is registered
	pub fn is_empty(&self) -> bool {
		self.listeners.is_empty()
	}

	/// Drops every listener
	pub fn clear(&mut self) {
		self.listeners.clear();
	}
}

impl<E> Default for Notifier<E> {
	fn default() -> Self {
		Self::new()
	}
}

impl<E> fmt::Debug for Notifier<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Notifier")
			.field("listeners", &self.listeners.len())
			.finish()
	}
}
