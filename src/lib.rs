//! # Reinhardt JSON:API
//!
//! JSON:API resource serialization for Reinhardt.
//!
//! Given a domain object, a resource schema and per-call options, the
//! serializer produces the resource object of the JSON:API document:
//! `id`, `type`, `attributes`, `relationships`, `links` and `meta`.
//!
//! ## Crates
//!
//! - [`inflection`] - wire naming: key transforms, pluralized resource types,
//!   generation-scoped name caches
//! - [`memoize`] - memoizing wrapper used to share expensive reads between
//!   the fields of one resource
//! - [`serializers`] - schemas, sparse fieldsets, relationship linkage and
//!   resource assembly
//!
//! ## Feature Flags
//!
//! - `settings` (default) - load [`JsonApiSettings`] from TOML or JSON
//!
//! ## Quick Example
//!
//! ```rust
//! use reinhardt_jsonapi::prelude::*;
//! use serde_json::{json, Value};
//!
//! struct Person {
//!     id: i64,
//!     first_name: String,
//! }
//!
//! impl Resource for Person {
//!     fn identity(&self) -> ResourceIdentity {
//!         self.id.into()
//!     }
//!
//!     fn class_name(&self) -> &str {
//!         "Person"
//!     }
//!
//!     fn read_attribute(&self, method: &str) -> Result<Value, FieldError> {
//!         match method {
//!             "first_name" => Ok(json!(self.first_name)),
//!             other => Err(FieldError::unknown_method(self.class_name(), other)),
//!         }
//!     }
//! }
//!
//! let serializer = ResourceSerializer::new(ResourceSchema::new().attribute("first_name"));
//! let person = Person { id: 7, first_name: "Ada".into() };
//! let naming = NamingRegistry::new(NamingConfig::new(KeyTransform::CamelLower)).transformer();
//! let options = SerializeOptions::new().with_naming(naming);
//!
//! let resource = serializer.serialize(&person, &options).unwrap();
//! assert_eq!(
//!     resource.to_value().unwrap(),
//!     json!({"id": "7", "type": "people", "attributes": {"firstName": "Ada"}})
//! );
//! ```

pub mod inflection;
pub mod memoize;
pub mod serializers;

pub use reinhardt_inflection::{
	KeyTransform, NameFormatter, NameTransformer, NamingConfig, NamingRegistry,
};
pub use reinhardt_memoize::Memoized;
pub use reinhardt_jsonapi_serializers::{
	ConventionLookup, FieldError, LookupError, Resource, ResourceIdentity, ResourceObject,
	ResourceSchema, ResourceSerializer, SerializeError, SerializeOptions, SerializerLookup,
	SparseFieldsets,
};

#[cfg(feature = "settings")]
pub use reinhardt_jsonapi_serializers::{JsonApiSettings, SettingsError};

/// Prelude module for convenient imports
///
/// Import everything commonly needed to declare and serialize resources:
///
/// ```rust
/// use reinhardt_jsonapi::prelude::*;
/// ```
pub mod prelude {
	pub use crate::inflection::{KeyTransform, NamingConfig, NamingRegistry};
	pub use crate::memoize::Memoized;
	pub use crate::serializers::{
		ConventionLookup, FieldError, LookupError, RelatedObject, RelationshipDeclaration,
		Resource, ResourceBinding, ResourceIdentity, ResourceObject, ResourceSchema,
		ResourceSerializer, SerializeError, SerializeOptions, SerializerLookup, SparseFieldsets,
		TypeMapping,
	};

	#[cfg(feature = "settings")]
	pub use crate::serializers::JsonApiSettings;
}
