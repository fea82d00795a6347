//! Resource schemas.
//!
//! A [`ResourceSchema`] is the ordered list of attribute and relationship
//! declarations of one resource class plus optional hooks overriding how
//! its `type`, `id`, `meta` and self link are produced.

use crate::binding::ResourceBinding;
use crate::declaration::{AttributeDeclaration, RelationshipDeclaration};
use crate::error::FieldError;
use crate::resource::RelatedObject;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Hook computing a per-resource value from the binding
pub type Hook<T, V> = Arc<dyn Fn(&ResourceBinding<'_, T>) -> Result<V, FieldError> + Send + Sync>;

/// Declarations and hooks for one resource class.
///
/// # Examples
///
/// ```
/// use reinhardt_jsonapi_serializers::ResourceSchema;
/// use serde_json::json;
/// # struct Article;
///
/// let schema = ResourceSchema::<Article>::new()
///     .attribute("title")
///     .attribute_with("summary", |_| Ok(json!("...")))
///     .has_one("author")
///     .has_many("comments");
///
/// let names: Vec<_> = schema.attributes().iter().map(|a| a.name()).collect();
/// assert_eq!(names, ["title", "summary"]);
/// assert_eq!(schema.relationships().len(), 2);
/// ```
pub struct ResourceSchema<T> {
	attributes: Vec<AttributeDeclaration<T>>,
	relationships: Vec<RelationshipDeclaration<T>>,
	resource_type: Option<String>,
	id: Option<Hook<T, String>>,
	meta: Option<Hook<T, Option<Value>>>,
	self_link: Option<Hook<T, Option<String>>>,
}

impl<T> ResourceSchema<T> {
	pub fn new() -> Self {
		Self {
			attributes: Vec::new(),
			relationships: Vec::new(),
			resource_type: None,
			id: None,
			meta: None,
			self_link: None,
		}
	}

	/// Attribute read from the method of the same name
	pub fn attribute(self, name: impl Into<String>) -> Self {
		self.declare_attribute(AttributeDeclaration::method(name))
	}

	/// Attribute computed from the binding
	pub fn attribute_with<F>(self, name: impl Into<String>, compute: F) -> Self
	where
		F: Fn(&ResourceBinding<'_, T>) -> Result<Value, FieldError> + Send + Sync + 'static,
	{
		self.declare_attribute(AttributeDeclaration::computed(name, compute))
	}

	pub fn declare_attribute(mut self, declaration: AttributeDeclaration<T>) -> Self {
		self.attributes.push(declaration);
		self
	}

	/// To-one relationship with default options
	pub fn has_one(self, name: impl Into<String>) -> Self {
		self.relationship(RelationshipDeclaration::has_one(name))
	}

	pub fn has_one_with<F>(self, name: impl Into<String>, compute: F) -> Self
	where
		F: Fn(&ResourceBinding<'_, T>) -> Result<Option<RelatedObject>, FieldError>
			+ Send
			+ Sync
			+ 'static,
	{
		self.relationship(RelationshipDeclaration::has_one_with(name, compute))
	}

	/// To-many relationship with default options
	pub fn has_many(self, name: impl Into<String>) -> Self {
		self.relationship(RelationshipDeclaration::has_many(name))
	}

	pub fn has_many_with<F>(self, name: impl Into<String>, compute: F) -> Self
	where
		F: Fn(&ResourceBinding<'_, T>) -> Result<Option<Vec<RelatedObject>>, FieldError>
			+ Send
			+ Sync
			+ 'static,
	{
		self.relationship(RelationshipDeclaration::has_many_with(name, compute))
	}

	pub fn relationship(mut self, declaration: RelationshipDeclaration<T>) -> Self {
		self.relationships.push(declaration);
		self
	}

	/// Fixed resource type instead of the one derived from the class name.
	///
	/// The value is used verbatim, no key transform is applied.
	pub fn with_type(mut self, resource_type: impl Into<String>) -> Self {
		self.resource_type = Some(resource_type.into());
		self
	}

	/// Compute the `id` instead of using the object's identity
	pub fn with_id<F>(mut self, id: F) -> Self
	where
		F: Fn(&ResourceBinding<'_, T>) -> Result<String, FieldError> + Send + Sync + 'static,
	{
		self.id = Some(Arc::new(id));
		self
	}

	/// Resource-level `meta`; empty values are not rendered
	pub fn with_meta<F>(mut self, meta: F) -> Self
	where
		F: Fn(&ResourceBinding<'_, T>) -> Result<Option<Value>, FieldError>
			+ Send
			+ Sync
			+ 'static,
	{
		self.meta = Some(Arc::new(meta));
		self
	}

	/// Compute the self link instead of `{base_url}/{type}/{id}`
	pub fn with_self_link<F>(mut self, self_link: F) -> Self
	where
		F: Fn(&ResourceBinding<'_, T>) -> Result<Option<String>, FieldError>
			+ Send
			+ Sync
			+ 'static,
	{
		self.self_link = Some(Arc::new(self_link));
		self
	}

	pub fn attributes(&self) -> &[AttributeDeclaration<T>] {
		&self.attributes
	}

	pub fn relationships(&self) -> &[RelationshipDeclaration<T>] {
		&self.relationships
	}

	pub fn resource_type(&self) -> Option<&str> {
		self.resource_type.as_deref()
	}

	pub(crate) fn id_hook(&self) -> Option<&Hook<T, String>> {
		self.id.as_ref()
	}

	pub(crate) fn meta_hook(&self) -> Option<&Hook<T, Option<Value>>> {
		self.meta.as_ref()
	}

	pub(crate) fn self_link_hook(&self) -> Option<&Hook<T, Option<String>>> {
		self.self_link.as_ref()
	}
}

impl<T> Default for ResourceSchema<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Clone for ResourceSchema<T> {
	fn clone(&self) -> Self {
		Self {
			attributes: self.attributes.clone(),
			relationships: self.relationships.clone(),
			resource_type: self.resource_type.clone(),
			id: self.id.clone(),
			meta: self.meta.clone(),
			self_link: self.self_link.clone(),
		}
	}
}

impl<T> fmt::Debug for ResourceSchema<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ResourceSchema")
			.field("attributes", &self.attributes)
			.field("relationships", &self.relationships)
			.field("resource_type", &self.resource_type)
			.field("id", &self.id.is_some())
			.field("meta", &self.meta.is_some())
			.field("self_link", &self.self_link.is_some())
			.finish()
	}
}
