//! # reinhardt-jsonapi-serializers
//!
//! JSON:API resource object serialization.
//!
//! A [`ResourceSchema`] declares the attributes and relationships of one
//! resource class. A [`ResourceSerializer`] binds a domain object to its
//! schema and the options of a call and assembles the resource object:
//!
//! - `id` is the string form of the object's identity
//! - `type` is the pluralized class name in the active key casing
//! - `attributes` and `relationships` honor sparse fieldsets
//! - relationship linkage is only computed when requested
//! - `links.self` is rendered when a base URL is configured
//!
//! Related objects are identified through a [`SerializerLookup`];
//! [`ConventionLookup`] is the default.
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_jsonapi_serializers::{
//!     FieldError, RelatedObject, Resource, ResourceIdentity, ResourceSchema,
//!     ResourceSerializer, SerializeOptions,
//! };
//! use serde_json::{json, Value};
//! use std::sync::Arc;
//!
//! struct Person {
//!     id: i64,
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
//! }
//!
//! struct Article {
//!     id: i64,
//!     title: String,
//!     author: Option<Arc<Person>>,
//! }
//!
//! impl Resource for Article {
//!     fn identity(&self) -> ResourceIdentity {
//!         self.id.into()
//!     }
//!
//!     fn class_name(&self) -> &str {
//!         "Article"
//!     }
//!
//!     fn read_attribute(&self, method: &str) -> Result<Value, FieldError> {
//!         match method {
//!             "title" => Ok(json!(self.title)),
//!             other => Err(FieldError::unknown_method(self.class_name(), other)),
//!         }
//!     }
//!
//!     fn read_to_one(&self, method: &str) -> Result<Option<RelatedObject>, FieldError> {
//!         match method {
//!             "author" => Ok(self.author.clone().map(|author| author as RelatedObject)),
//!             other => Err(FieldError::unknown_method(self.class_name(), other)),
//!         }
//!     }
//! }
//!
//! let serializer = ResourceSerializer::new(
//!     ResourceSchema::new().attribute("title").has_one("author"),
//! );
//! let article = Article {
//!     id: 42,
//!     title: "Hi".into(),
//!     author: Some(Arc::new(Person { id: 7 })),
//! };
//!
//! let options = SerializeOptions::new().include_linkage("author");
//! let resource = serializer.serialize(&article, &options).unwrap();
//!
//! assert_eq!(
//!     resource.to_value().unwrap(),
//!     json!({
//!         "id": "42",
//!         "type": "articles",
//!         "attributes": {"title": "Hi"},
//!         "relationships": {"author": {"data": {"id": "7", "type": "people"}}}
//!     })
//! );
//! ```

pub mod attributes;
pub mod binding;
pub mod declaration;
pub mod document;
pub mod error;
pub mod fieldset;
pub mod lookup;
pub mod relationships;
pub mod resource;
pub mod schema;
pub mod serializer;
#[cfg(feature = "settings")]
pub mod settings;

pub use attributes::resolve_attributes;
pub use binding::{Context, ResourceBinding, SerializeOptions};
pub use declaration::{
	AttributeDeclaration, Cardinality, Computation, RelationshipDeclaration, RelationshipOptions,
	RelationshipSource, ValueSource,
};
pub use document::{
	Linkage, RelationshipLinks, RelationshipObject, ResourceIdentifier, ResourceLinks,
	ResourceObject,
};
pub use error::{BoxError, FieldError, LookupError, SerializeError};
pub use fieldset::SparseFieldsets;
pub use lookup::{ConventionLookup, LookupOptions, MetaFn, SerializerLookup, TypeMapping};
pub use relationships::resolve_relationships;
pub use resource::{RelatedObject, Resource, ResourceIdentity};
pub use schema::{Hook, ResourceSchema};
pub use serializer::ResourceSerializer;
#[cfg(feature = "settings")]
pub use settings::{JsonApiSettings, SettingsError};
