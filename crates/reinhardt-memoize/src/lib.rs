//! # reinhardt-memoize
//!
//! Memoizing delegation wrapper.
//!
//! [`Memoized`] wraps one target value and caches the result of each
//! `(operation, arguments)` pair the first time it is requested. Serializers
//! use it so that attribute and relationship value sources sharing an
//! expensive computation on the same object only pay for it once.
//!
//! Operations are explicit: every cached call names the operation and hands
//! over the closure that performs it on the target. The wrapper never
//! pretends to be its target; identity-sensitive code reaches the real value
//! through [`Memoized::target`].
//!
//! ## Contract
//!
//! Caching assumes that an operation is deterministic and idempotent for
//! identical arguments. If it is not, which result a caller observes is
//! unspecified.
//!
//! ## Examples
//!
//! ```rust
//! use reinhardt_memoize::Memoized;
//! use std::cell::Cell;
//!
//! struct Report {
//!     computations: Cell<u32>,
//! }
//!
//! impl Report {
//!     fn total(&self, year: u32) -> u64 {
//!         self.computations.set(self.computations.get() + 1);
//!         u64::from(year) * 10
//!     }
//! }
//!
//! let report = Memoized::new(Report { computations: Cell::new(0) });
//!
//! assert_eq!(report.call("total", 2024u32, |r, year| r.total(*year)), 20240);
//! assert_eq!(report.call("total", 2024u32, |r, year| r.total(*year)), 20240);
//! assert_eq!(report.target().computations.get(), 1);
//!
//! // Different arguments run the operation again
//! assert_eq!(report.call("total", 2025u32, |r, year| r.total(*year)), 20250);
//! assert_eq!(report.target().computations.get(), 2);
//! ```

use std::any::{Any, TypeId};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Reproducible hash of a call's arguments.
///
/// Used as a bucket key only; the arguments themselves are compared for
/// equality before a cached result is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArgsSignature(u64);

impl ArgsSignature {
	/// Signature of `args`
	pub fn of<A: Hash + ?Sized>(args: &A) -> Self {
		let mut hasher = DefaultHasher::new();
		args.hash(&mut hasher);
		Self(hasher.finish())
	}

	pub fn value(&self) -> u64 {
		self.0
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CallKey {
	operation: &'static str,
	args_type: TypeId,
	output_type: TypeId,
	signature: ArgsSignature,
}

impl CallKey {
	fn new<A: Hash + 'static, R: 'static>(operation: &'static str, args: &A) -> Self {
		Self {
			operation,
			args_type: TypeId::of::<A>(),
			output_type: TypeId::of::<R>(),
			signature: ArgsSignature::of(args),
		}
	}
}

struct CachedCall {
	args: Box<dyn Any>,
	result: Box<dyn Any>,
}

/// Transparent caching wrapper around a single target.
///
/// The cache lives as long as the wrapper. `Memoized` is `!Sync`: one
/// instance belongs to one caller, so no cross-thread locking is involved.
pub struct Memoized<T> {
	target: T,
	cache: RefCell<HashMap<CallKey, Vec<CachedCall>>>,
	hits: Cell<u64>,
	misses: Cell<u64>,
}

impl<T> Memoized<T> {
	/// Wrap `target` with an empty cache
	pub fn new(target: T) -> Self {
		Self {
			target,
			cache: RefCell::new(HashMap::new()),
			hits: Cell::new(0),
			misses: Cell::new(0),
		}
	}

	/// The wrapped value, bypassing the cache
	pub fn target(&self) -> &T {
		&self.target
	}

	/// Unwrap, dropping every cached result
	pub fn into_inner(self) -> T {
		self.target
	}

	/// Invoke `operation` on the target, or return the result cached for the
	/// same operation and arguments.
	///
	/// The cache is not borrowed while `compute` runs, so an operation may
	/// itself go through the same wrapper.
	pub fn call<A, R, F>(&self, operation: &'static str, args: A, compute: F) -> R
	where
		A: Hash + Eq + 'static,
		R: Clone + 'static,
		F: FnOnce(&T, &A) -> R,
	{
		let key = CallKey::new::<A, R>(operation, &args);
		if let Some(cached) = self.lookup::<A, R>(&key, &args) {
			return cached;
		}

		let result = compute(&self.target, &args);
		self.store(key, args, result.clone());
		result
	}

	/// Like [`call`](Self::call) for fallible operations.
	///
	/// Only successful results are cached; an error is returned to the
	/// caller and the next identical call runs the operation again.
	pub fn try_call<A, R, E, F>(&self, operation: &'static str, args: A, compute: F) -> Result<R, E>
	where
		A: Hash + Eq + 'static,
		R: Clone + 'static,
		F: FnOnce(&T, &A) -> Result<R, E>,
	{
		let key = CallKey::new::<A, R>(operation, &args);
		if let Some(cached) = self.lookup::<A, R>(&key, &args) {
			return Ok(cached);
		}

		let result = compute(&self.target, &args)?;
		self.store(key, args, result.clone());
		Ok(result)
	}

	/// Whether a result is cached for `operation` with `args`
	pub fn is_cached<A, R>(&self, operation: &'static str, args: &A) -> bool
	where
		A: Hash + Eq + 'static,
		R: 'static,
	{
		let key = CallKey::new::<A, R>(operation, args);
		self.cache.borrow().get(&key).is_some_and(|bucket| {
			bucket
				.iter()
				.any(|entry| entry.args.downcast_ref::<A>() == Some(args))
		})
	}

	/// Number of cached results
	pub fn cached_calls(&self) -> usize {
		self.cache.borrow().values().map(Vec::len).sum()
	}

	/// Calls answered from the cache
	pub fn hits(&self) -> u64 {
		self.hits.get()
	}

	/// Calls that ran the operation
	pub fn misses(&self) -> u64 {
		self.misses.get()
	}

	/// Drop every cached result and reset the statistics
	pub fn clear(&mut self) {
		self.cache.get_mut().clear();
		self.hits.set(0);
		self.misses.set(0);
	}

	fn lookup<A, R>(&self, key: &CallKey, args: &A) -> Option<R>
	where
		A: Eq + 'static,
		R: Clone + 'static,
	{
		let cache = self.cache.borrow();
		let cached = cache.get(key).and_then(|bucket| {
			bucket
				.iter()
				.find(|entry| entry.args.downcast_ref::<A>() == Some(args))
				.and_then(|entry| entry.result.downcast_ref::<R>().cloned())
		});

		match cached {
			Some(result) => {
				self.hits.set(self.hits.get() + 1);
				Some(result)
			}
			None => {
				self.misses.set(self.misses.get() + 1);
				tracing::trace!(operation = key.operation, "memoized call miss");
				None
			}
		}
	}

	fn store<A: Eq + 'static, R: 'static>(&self, key: CallKey, args: A, result: R) {
		let mut cache = self.cache.borrow_mut();
		let bucket = cache.entry(key).or_default();
		// A reentrant call may have stored the same arguments meanwhile
		if bucket
			.iter()
			.any(|entry| entry.args.downcast_ref::<A>() == Some(&args))
		{
			return;
		}
		bucket.push(CachedCall {
			args: Box::new(args),
			result: Box::new(result),
		});
	}
}

impl<T: fmt::Debug> fmt::Debug for Memoized<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Memoized")
			.field("target", &self.target)
			.field("cached_calls", &self.cached_calls())
			.field("hits", &self.hits.get())
			.field("misses", &self.misses.get())
			.finish()
	}
}

impl<T> From<T> for Memoized<T> {
	fn from(target: T) -> Self {
		Self::new(target)
	}
}
