//! Thread-safe memoizing cache for transformed names.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Write-once cache mapping a raw string to its transformed form.
///
/// Values are computed outside the lock and published as immutable
/// `Arc<str>`; when two callers race on the same key both may compute, but
/// only the first value written is ever returned. Entries are never evicted.
///
/// # Examples
///
/// ```rust
/// use reinhardt_inflection::TransformCache;
///
/// let cache = TransformCache::new("formatted");
/// let value = cache.get_or_insert_with("first_name", |name| name.replace('_', "-"));
/// assert_eq!(&*value, "first-name");
///
/// // Subsequent calls never recompute
/// let again = cache.get_or_insert_with("first_name", |_| unreachable!());
/// assert_eq!(&*again, "first-name");
/// ```
#[derive(Debug)]
pub struct TransformCache {
	name: &'static str,
	entries: RwLock<HashMap<String, Arc<str>>>,
}

impl TransformCache {
	/// Create an empty cache; `name` only appears in log output
	pub fn new(name: &'static str) -> Self {
		Self {
			name,
			entries: RwLock::new(HashMap::new()),
		}
	}

	/// Get the cached value for `key`, computing and publishing it on a miss
	pub fn get_or_insert_with<F>(&self, key: &str, compute: F) -> Arc<str>
	where
		F: FnOnce(&str) -> String,
	{
		if let Some(value) = self.entries.read().get(key) {
			return Arc::clone(value);
		}

		let computed: Arc<str> = Arc::from(compute(key));
		tracing::debug!(cache = self.name, key, value = &*computed, "name cache miss");

		let mut entries = self.entries.write();
		Arc::clone(entries.entry(key.to_string()).or_insert(computed))
	}

	/// Cached value for `key`, if any
	pub fn get(&self, key: &str) -> Option<Arc<str>> {
		self.entries.read().get(key).cloned()
	}

	/// Number of cached entries
	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	/// Whether nothing has been cached yet
	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::sync::atomic::{AtomicUsize, Ordering};
	use std::thread;

	#[rstest]
	fn test_cache_computes_once() {
		let cache = TransformCache::new("test");
		let calls = AtomicUsize::new(0);

		for _ in 0..3 {
			let value = cache.get_or_insert_with("author_name", |key| {
				calls.fetch_add(1, Ordering::SeqCst);
				key.to_uppercase()
			});
			assert_eq!(&*value, "AUTHOR_NAME");
		}

		assert_eq!(calls.load(Ordering::SeqCst), 1);
		assert_eq!(cache.len(), 1);
	}

	#[rstest]
	fn test_cache_get_before_and_after_insert() {
		let cache = TransformCache::new("test");
		assert!(cache.is_empty());
		assert!(cache.get("title").is_none());

		cache.get_or_insert_with("title", |key| key.to_string());
		assert_eq!(cache.get("title").as_deref(), Some("title"));
	}

	#[rstest]
	fn test_cache_concurrent_writers_agree() {
		let cache = Arc::new(TransformCache::new("test"));

		let handles: Vec<_> = (0..8)
			.map(|worker| {
				let cache = Arc::clone(&cache);
				thread::spawn(move || {
					// Each worker would compute a different value; only one may win
					cache.get_or_insert_with("shared", |_| format!("value-{}", worker))
				})
			})
			.collect();

		let results: Vec<Arc<str>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
		let published = cache.get("shared").unwrap();
		assert!(results.iter().all(|value| *value == published));
	}
}
