//! # reinhardt-inflection
//!
//! Name inflection for JSON:API resources.
//!
//! Converts internal snake_case names into their wire form (`first_name` ->
//! `first-name` under the default configuration) and back, and derives the
//! resource `type` of a class (`MyApp::LongComment` -> `long-comments`).
//!
//! ## Features
//!
//! - **Key transforms**: dash, underscore, camel, camel_lower and unaltered,
//!   plus user supplied [`NameFormatter`]s
//! - **Inflector**: `underscore`, `demodulize`, `pluralize`, `tableize`
//! - **Process-wide caches**: every transform is memoized per configuration
//!   generation; switching the configuration publishes a fresh generation
//!   atomically
//!
//! ## Examples
//!
//! ```rust
//! use reinhardt_inflection::{KeyTransform, NamingConfig, NamingRegistry};
//!
//! let registry = NamingRegistry::new(NamingConfig::default());
//! let naming = registry.transformer();
//!
//! assert_eq!(&*naming.format("first_name"), "first-name");
//! assert_eq!(&*naming.unformat("first-name"), "first_name");
//! assert_eq!(&*naming.resource_type("MyApp::LongComment"), "long-comments");
//!
//! registry.configure(NamingConfig::new(KeyTransform::CamelLower));
//! assert_eq!(&*registry.transformer().format("first_name"), "firstName");
//! ```

pub mod cache;
pub mod inflector;
pub mod registry;
pub mod transform;

pub use cache::TransformCache;
pub use inflector::{demodulize, pluralize, tableize, underscore};
pub use registry::{NameTransformer, NamingRegistry, format_name, resource_type, unformat_name};
pub use transform::{
	InflectionError, KeyTransform, NameFormatter, NamingConfig, transform_key_casing,
};
