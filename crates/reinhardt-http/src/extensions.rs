//! Typed per-request storage.
//!
//! `Extensions` is a shared handle: cloning it yields another view onto the
//! same map. Middleware can keep a clone of `request.extensions` before the
//! request moves into the next handler and inspect what the handler stored
//! once it returns.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

type ExtensionMap = HashMap<TypeId, Box<dyn Any + Send + Sync>>;

/// Type-keyed extension storage attached to a [`Request`](crate::Request).
#[derive(Clone, Default)]
pub struct Extensions {
	map: Arc<Mutex<ExtensionMap>>,
}

impl Extensions {
	/// Create an empty extension map.
	pub fn new() -> Self {
		Self::default()
	}

	fn lock(&self) -> MutexGuard<'_, ExtensionMap> {
		self.map.lock().unwrap_or_else(|e| e.into_inner())
	}

	/// Store a value, replacing any previous value of the same type.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_http::Extensions;
	///
	/// let extensions = Extensions::new();
	/// let observer = extensions.clone();
	/// extensions.insert(7u8);
	///
	/// // Clones share the same storage.
	/// assert_eq!(observer.get::<u8>(), Some(7));
	/// ```
	pub fn insert<T: Send + Sync + 'static>(&self, value: T) {
		self.lock().insert(TypeId::of::<T>(), Box::new(value));
	}

	/// Get a clone of the stored value of type `T`.
	pub fn get<T>(&self) -> Option<T>
	where
		T: Clone + Send + Sync + 'static,
	{
		self.lock()
			.get(&TypeId::of::<T>())
			.and_then(|boxed| boxed.downcast_ref::<T>())
			.cloned()
	}

	/// Whether a value of type `T` is stored.
	pub fn contains<T: Send + Sync + 'static>(&self) -> bool {
		self.lock().contains_key(&TypeId::of::<T>())
	}

	/// Remove and return the value of type `T`.
	pub fn remove<T>(&self) -> Option<T>
	where
		T: Send + Sync + 'static,
	{
		let mut map = self.lock();
		let boxed = map.remove(&TypeId::of::<T>())?;
		match boxed.downcast::<T>() {
			Ok(value) => Some(*value),
			Err(boxed) => {
				map.insert(TypeId::of::<T>(), boxed);
				None
			}
		}
	}

	/// Drop every stored value.
	pub fn clear(&self) {
		self.lock().clear();
	}
}

impl std::fmt::Debug for Extensions {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Extensions")
			.field("len", &self.lock().len())
			.finish()
	}
}
