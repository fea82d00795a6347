//! Process-wide naming registry with generation-scoped caches.
//!
//! Every [`NameTransformer`] is bound to one configuration generation and
//! owns the caches computed under it. Switching the configuration replaces
//! the whole transformer in a single write, so a reader either sees the old
//! generation with its own caches or the new one, never a mix. Callers that
//! hold an `Arc<NameTransformer>` for the duration of a serialization call
//! keep a consistent view even if the configuration changes concurrently.

use crate::cache::TransformCache;
use crate::inflector::tableize;
use crate::transform::NamingConfig;
use parking_lot::RwLock;
use std::sync::{Arc, LazyLock};

/// Name transforms and resource types computed under one configuration
#[derive(Debug)]
pub struct NameTransformer {
	generation: u64,
	config: NamingConfig,
	formatted: TransformCache,
	unformatted: TransformCache,
	types: TransformCache,
}

impl NameTransformer {
	/// Create a transformer with empty caches for the given generation
	pub fn new(generation: u64, config: NamingConfig) -> Self {
		Self {
			generation,
			config,
			formatted: TransformCache::new("formatted_names"),
			unformatted: TransformCache::new("unformatted_names"),
			types: TransformCache::new("resource_types"),
		}
	}

	/// Configuration generation these caches belong to
	pub fn generation(&self) -> u64 {
		self.generation
	}

	pub fn config(&self) -> &NamingConfig {
		&self.config
	}

	/// Internal name -> wire name
	///
	/// # Examples
	///
	/// ```rust
	/// use reinhardt_inflection::{NameTransformer, NamingConfig};
	///
	/// let naming = NameTransformer::new(0, NamingConfig::default());
	/// assert_eq!(&*naming.format("published_at"), "published-at");
	/// ```
	pub fn format(&self, name: &str) -> Arc<str> {
		self.formatted
			.get_or_insert_with(name, |name| self.config.format_uncached(name))
	}

	/// Wire name -> internal name
	///
	/// # Examples
	///
	/// ```rust
	/// use reinhardt_inflection::{NameTransformer, NamingConfig};
	///
	/// let naming = NameTransformer::new(0, NamingConfig::default());
	/// assert_eq!(&*naming.unformat("published-at"), "published_at");
	/// ```
	pub fn unformat(&self, wire_name: &str) -> Arc<str> {
		self.unformatted
			.get_or_insert_with(wire_name, |wire_name| {
				self.config.unformat_uncached(wire_name)
			})
	}

	/// Resource `type` of a class, keyed by the class identity.
	///
	/// The class name is demodulized, tableized and then formatted:
	/// `MyApp::LongComment` -> `long-comments`.
	pub fn resource_type(&self, class_name: &str) -> Arc<str> {
		self.types.get_or_insert_with(class_name, |class_name| {
			self.config.format_uncached(&tableize(class_name))
		})
	}

	/// Number of cached (formatted, unformatted, type) entries
	pub fn cached_entries(&self) -> (usize, usize, usize) {
		(
			self.formatted.len(),
			self.unformatted.len(),
			self.types.len(),
		)
	}
}

static GLOBAL_REGISTRY: LazyLock<NamingRegistry> =
	LazyLock::new(|| NamingRegistry::new(NamingConfig::default()));

/// Holder of the active [`NameTransformer`].
///
/// # Examples
///
/// ```rust
/// use reinhardt_inflection::{KeyTransform, NamingConfig, NamingRegistry};
///
/// let registry = NamingRegistry::new(NamingConfig::default());
/// let before = registry.transformer();
///
/// let generation = registry.configure(NamingConfig::new(KeyTransform::Underscore));
/// assert_eq!(generation, before.generation() + 1);
///
/// // A snapshot taken before the switch keeps its configuration
/// assert_eq!(&*before.format("first_name"), "first-name");
/// assert!(!registry.is_current(&before));
/// assert_eq!(&*registry.transformer().format("first_name"), "first_name");
/// ```
#[derive(Debug)]
pub struct NamingRegistry {
	current: RwLock<Arc<NameTransformer>>,
}

impl NamingRegistry {
	/// Create a registry starting at generation 0
	pub fn new(config: NamingConfig) -> Self {
		Self {
			current: RwLock::new(Arc::new(NameTransformer::new(0, config))),
		}
	}

	/// The process-wide registry
	pub fn global() -> &'static NamingRegistry {
		&GLOBAL_REGISTRY
	}

	/// Snapshot of the active transformer
	pub fn transformer(&self) -> Arc<NameTransformer> {
		Arc::clone(&self.current.read())
	}

	/// Active configuration generation
	pub fn generation(&self) -> u64 {
		self.current.read().generation()
	}

	/// Whether `transformer` still belongs to the active generation
	pub fn is_current(&self, transformer: &NameTransformer) -> bool {
		self.generation() == transformer.generation()
	}

	/// Switch the active configuration.
	///
	/// Publishes a new transformer with empty caches and returns its
	/// generation. Snapshots handed out earlier are unaffected.
	pub fn configure(&self, config: NamingConfig) -> u64 {
		let mut current = self.current.write();
		let generation = current.generation() + 1;
		tracing::info!(
			generation,
			key_transform = %config.key_transform,
			custom = config.custom.is_some(),
			"naming configuration switched"
		);
		*current = Arc::new(NameTransformer::new(generation, config));
		generation
	}

	/// Restore the default configuration
	pub fn reset(&self) -> u64 {
		self.configure(NamingConfig::default())
	}
}

/// Format a name with the global registry
pub fn format_name(name: &str) -> Arc<str> {
	NamingRegistry::global().transformer().format(name)
}

/// Unformat a wire name with the global registry
pub fn unformat_name(wire_name: &str) -> Arc<str> {
	NamingRegistry::global().transformer().unformat(wire_name)
}

/// Resource type of a class with the global registry
pub fn resource_type(class_name: &str) -> Arc<str> {
	NamingRegistry::global().transformer().resource_type(class_name)
}
