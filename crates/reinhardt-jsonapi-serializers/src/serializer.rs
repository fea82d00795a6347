//! Resource assembly.

use crate::attributes::resolve_attributes;
use crate::binding::{ResourceBinding, SerializeOptions};
use crate::document::{ResourceLinks, ResourceObject};
use crate::error::SerializeError;
use crate::lookup::{ConventionLookup, SerializerLookup};
use crate::relationships::resolve_relationships;
use crate::resource::Resource;
use crate::schema::ResourceSchema;
use std::fmt;
use std::sync::Arc;

/// Serializes objects of one resource class.
///
/// Holds the shared schema and the lookup used to identify related
/// objects. Cloning is cheap; a serializer can be shared across threads and
/// serve concurrent calls.
///
/// # Examples
///
/// ```
/// use reinhardt_jsonapi_serializers::{
///     FieldError, Resource, ResourceIdentity, ResourceSchema, ResourceSerializer,
///     SerializeOptions,
/// };
/// use serde_json::{json, Value};
///
/// struct Article {
///     id: i64,
///     title: String,
/// }
///
/// impl Resource for Article {
///     fn identity(&self) -> ResourceIdentity {
///         self.id.into()
///     }
///
///     fn class_name(&self) -> &str {
///         "Article"
///     }
///
///     fn read_attribute(&self, method: &str) -> Result<Value, FieldError> {
///         match method {
///             "title" => Ok(json!(self.title)),
///             other => Err(FieldError::unknown_method(self.class_name(), other)),
///         }
///     }
/// }
///
/// let serializer = ResourceSerializer::new(ResourceSchema::new().attribute("title"));
/// let article = Article { id: 1, title: "Hello".into() };
/// let options = SerializeOptions::new().with_base_url("https://example.com");
///
/// let resource = serializer.serialize(&article, &options).unwrap();
/// assert_eq!(
///     resource.to_value().unwrap(),
///     json!({
///         "id": "1",
///         "type": "articles",
///         "attributes": {"title": "Hello"},
///         "links": {"self": "https://example.com/articles/1"}
///     })
/// );
/// ```
pub struct ResourceSerializer<T> {
	schema: Arc<ResourceSchema<T>>,
	lookup: Arc<dyn SerializerLookup>,
}

impl<T: Resource> ResourceSerializer<T> {
	/// Serializer identifying related objects by convention
	pub fn new(schema: ResourceSchema<T>) -> Self {
		Self {
			schema: Arc::new(schema),
			lookup: Arc::new(ConventionLookup::new()),
		}
	}

	pub fn with_lookup(mut self, lookup: Arc<dyn SerializerLookup>) -> Self {
		self.lookup = lookup;
		self
	}

	pub fn schema(&self) -> &ResourceSchema<T> {
		&self.schema
	}

	pub fn lookup(&self) -> &dyn SerializerLookup {
		self.lookup.as_ref()
	}

	/// Bind `object` for one call
	pub fn bind<'a>(&'a self, object: &'a T, options: &'a SerializeOptions) -> ResourceBinding<'a, T> {
		ResourceBinding::new(object, &self.schema, options)
	}

	/// Assemble the resource object of a binding.
	///
	/// Fails on the first attribute, relationship, lookup or hook failure;
	/// nothing partial is returned.
	pub fn assemble(&self, binding: &ResourceBinding<'_, T>) -> Result<ResourceObject, SerializeError> {
		let id = binding.id()?.to_string();
		let attributes = resolve_attributes(binding, self.schema.attributes())?;
		let relationships =
			resolve_relationships(binding, self.schema.relationships(), self.lookup.as_ref())?;
		let links = binding.self_link()?.map(|self_link| ResourceLinks {
			self_link: self_link.to_string(),
		});
		let meta = binding.meta()?;

		Ok(ResourceObject {
			id,
			resource_type: binding.resource_type().to_string(),
			attributes,
			relationships,
			links,
			meta,
		})
	}

	/// Bind and assemble in one step
	pub fn serialize(
		&self,
		object: &T,
		options: &SerializeOptions,
	) -> Result<ResourceObject, SerializeError> {
		let binding = self.bind(object, options);
		self.assemble(&binding)
	}

	/// Serialize every object of a collection with the same options
	pub fn serialize_all<'o, I>(
		&self,
		objects: I,
		options: &SerializeOptions,
	) -> Result<Vec<ResourceObject>, SerializeError>
	where
		I: IntoIterator<Item = &'o T>,
		T: 'o,
	{
		objects
			.into_iter()
			.map(|object| self.serialize(object, options))
			.collect()
	}
}

impl<T> Clone for ResourceSerializer<T> {
	fn clone(&self) -> Self {
		Self {
			schema: Arc::clone(&self.schema),
			lookup: Arc::clone(&self.lookup),
		}
	}
}

impl<T> fmt::Debug for ResourceSerializer<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ResourceSerializer")
			.field("schema", &self.schema)
			.finish_non_exhaustive()
	}
}
