//! Identification of related objects.
//!
//! The relationship resolver does not know how related objects are
//! serialized. It asks a [`SerializerLookup`] for the `{id, type, meta?}` of
//! each related object instead.

use crate::binding::Context;
use crate::document::ResourceIdentifier;
use crate::error::LookupError;
use crate::resource::Resource;
use reinhardt_inflection::{NameTransformer, demodulize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Call state handed to a lookup
#[derive(Debug, Clone, Copy)]
pub struct LookupOptions<'a> {
	pub context: &'a Context,
	pub base_url: Option<&'a str>,
	/// Naming generation of the calling serialization
	pub naming: &'a NameTransformer,
	/// Wire name of the relationship being resolved
	pub relationship: &'a str,
}

/// Resolves the identifier of a related object
pub trait SerializerLookup: Send + Sync {
	fn lookup(
		&self,
		object: &dyn Resource,
		options: &LookupOptions<'_>,
	) -> Result<ResourceIdentifier, LookupError>;
}

/// Meta computed for a related object
pub type MetaFn = Arc<dyn Fn(&dyn Resource) -> Option<Value> + Send + Sync>;

/// Registered overrides for one class
#[derive(Clone, Default)]
pub struct TypeMapping {
	resource_type: Option<String>,
	meta: Option<MetaFn>,
}

impl TypeMapping {
	pub fn new() -> Self {
		Self::default()
	}

	/// Fixed resource type, used verbatim
	pub fn with_type(mut self, resource_type: impl Into<String>) -> Self {
		self.resource_type = Some(resource_type.into());
		self
	}

	/// Meta attached to the identifier in to-many linkage
	pub fn with_meta<F>(mut self, meta: F) -> Self
	where
		F: Fn(&dyn Resource) -> Option<Value> + Send + Sync + 'static,
	{
		self.meta = Some(Arc::new(meta));
		self
	}

	pub fn resource_type(&self) -> Option<&str> {
		self.resource_type.as_deref()
	}
}

impl fmt::Debug for TypeMapping {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TypeMapping")
			.field("resource_type", &self.resource_type)
			.field("meta", &self.meta.is_some())
			.finish()
	}
}

/// Identifies objects by convention.
///
/// The id is the string form of the object's identity and the type is the
/// class name run through the active naming generation. Classes can be
/// registered under their full name (`"Admin::User"`) or demodulized name
/// (`"User"`) to override the type or attach meta; if both registrations
/// apply and name different types the lookup is ambiguous.
///
/// # Examples
///
/// ```
/// use reinhardt_jsonapi_serializers::{ConventionLookup, TypeMapping};
///
/// let lookup = ConventionLookup::new()
///     .register("Admin::User", TypeMapping::new().with_type("admins"))
///     .register("User", TypeMapping::new().with_type("users"));
///
/// assert_eq!(lookup.candidates("Admin::User"), ["admins", "users"]);
/// assert_eq!(lookup.candidates("Shop::User"), ["users"]);
/// assert!(lookup.candidates("Article").is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConventionLookup {
	mappings: HashMap<String, TypeMapping>,
	strict: bool,
}

impl ConventionLookup {
	pub fn new() -> Self {
		Self::default()
	}

	/// Fail with [`LookupError::Unregistered`] for classes without a mapping
	pub fn strict(mut self) -> Self {
		self.strict = true;
		self
	}

	pub fn register(mut self, class_name: impl Into<String>, mapping: TypeMapping) -> Self {
		self.mappings.insert(class_name.into(), mapping);
		self
	}

	fn mappings_for<'m>(&'m self, class_name: &str) -> Vec<&'m TypeMapping> {
		let short_name = demodulize(class_name);
		let mut mappings: Vec<&TypeMapping> = self.mappings.get(class_name).into_iter().collect();
		if short_name != class_name {
			mappings.extend(self.mappings.get(short_name));
		}
		mappings
	}

	/// Distinct overridden types registered for `class_name`, most specific first
	pub fn candidates(&self, class_name: &str) -> Vec<String> {
		let mut candidates: Vec<String> = Vec::new();
		for resource_type in self
			.mappings_for(class_name)
			.into_iter()
			.filter_map(TypeMapping::resource_type)
		{
			if !candidates.iter().any(|seen| seen == resource_type) {
				candidates.push(resource_type.to_string());
			}
		}
		candidates
	}
}

impl SerializerLookup for ConventionLookup {
	fn lookup(
		&self,
		object: &dyn Resource,
		options: &LookupOptions<'_>,
	) -> Result<ResourceIdentifier, LookupError> {
		let class_name = object.class_name();
		let mappings = self.mappings_for(class_name);
		if mappings.is_empty() && self.strict {
			tracing::debug!(class_name, relationship = options.relationship, "unregistered class");
			return Err(LookupError::unregistered(class_name));
		}

		let mut candidates = self.candidates(class_name);
		let resource_type = match candidates.len() {
			0 => options.naming.resource_type(class_name).to_string(),
			1 => candidates.remove(0),
			_ => {
				tracing::debug!(
					class_name,
					relationship = options.relationship,
					?candidates,
					"ambiguous resource type"
				);
				return Err(LookupError::ambiguous(class_name, candidates));
			}
		};

		let meta = mappings
			.iter()
			.find_map(|mapping| mapping.meta.as_ref())
			.and_then(|meta| meta(object));

		Ok(ResourceIdentifier {
			id: object.identity().to_string(),
			resource_type,
			meta,
		})
	}
}
