//! Per-call serialization state.

use crate::error::SerializeError;
use crate::fieldset::SparseFieldsets;
use crate::lookup::LookupOptions;
use crate::resource::Resource;
use crate::schema::ResourceSchema;
use reinhardt_inflection::{NameTransformer, NamingRegistry};
use reinhardt_memoize::Memoized;
use serde_json::Value;
use std::cell::OnceCell;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// Caller supplied values available to computations
pub type Context = HashMap<String, Value>;

/// Options of one serialization call.
///
/// # Examples
///
/// ```
/// use reinhardt_jsonapi_serializers::{SerializeOptions, SparseFieldsets};
/// use serde_json::json;
///
/// let options = SerializeOptions::new()
///     .with_base_url("https://example.com/api/")
///     .with_context("current_user", json!(1))
///     .with_fields(SparseFieldsets::new().with("articles", ["title", "author"]))
///     .include_linkage("author");
///
/// assert_eq!(options.base_url(), Some("https://example.com/api"));
/// assert!(options.linkage_requested("author"));
/// assert!(!options.linkage_requested("comments"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SerializeOptions {
	context: Context,
	base_url: Option<String>,
	fields: SparseFieldsets,
	include_linkages: HashSet<String>,
	naming: Option<Arc<NameTransformer>>,
}

impl SerializeOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_context(mut self, key: impl Into<String>, value: Value) -> Self {
		self.context.insert(key.into(), value);
		self
	}

	/// Replace the whole context
	pub fn with_context_map(mut self, context: Context) -> Self {
		self.context = context;
		self
	}

	/// Base URL resource links are built from, without the resource path
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = Some(base_url.into());
		self
	}

	pub fn with_fields(mut self, fields: SparseFieldsets) -> Self {
		self.fields = fields;
		self
	}

	/// Render linkage for the relationship with this wire name
	pub fn include_linkage(mut self, wire_name: impl Into<String>) -> Self {
		self.include_linkages.insert(wire_name.into());
		self
	}

	pub fn include_linkages<I, S>(mut self, wire_names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.include_linkages
			.extend(wire_names.into_iter().map(Into::into));
		self
	}

	/// Pin the naming generation instead of using the global registry's
	pub fn with_naming(mut self, naming: Arc<NameTransformer>) -> Self {
		self.naming = Some(naming);
		self
	}

	pub fn context(&self) -> &Context {
		&self.context
	}

	/// Configured base URL without trailing slashes, `None` if unset or empty
	pub fn base_url(&self) -> Option<&str> {
		self.base_url
			.as_deref()
			.map(|url| url.trim_end_matches('/'))
			.filter(|url| !url.is_empty())
	}

	pub fn fields(&self) -> &SparseFieldsets {
		&self.fields
	}

	pub fn linkage_requested(&self, wire_name: &str) -> bool {
		self.include_linkages.contains(wire_name)
	}

	pub fn naming(&self) -> Option<&Arc<NameTransformer>> {
		self.naming.as_ref()
	}
}

/// One domain object bound to its schema and the options of a call.
///
/// The binding owns the memoizing proxy around the object and a snapshot of
/// the naming generation: reconfiguring names while the call runs does not
/// affect it. Identity, self link and meta are computed at most once.
pub struct ResourceBinding<'a, T> {
	object: Memoized<&'a T>,
	schema: &'a ResourceSchema<T>,
	options: &'a SerializeOptions,
	naming: Arc<NameTransformer>,
	resource_type: Arc<str>,
	id: OnceCell<String>,
	self_link: OnceCell<Option<String>>,
}

impl<'a, T: Resource> ResourceBinding<'a, T> {
	pub fn new(object: &'a T, schema: &'a ResourceSchema<T>, options: &'a SerializeOptions) -> Self {
		let naming = options
			.naming()
			.cloned()
			.unwrap_or_else(|| NamingRegistry::global().transformer());
		let resource_type = match schema.resource_type() {
			Some(resource_type) => Arc::from(resource_type),
			None => naming.resource_type(object.class_name()),
		};

		Self {
			object: Memoized::new(object),
			schema,
			options,
			naming,
			resource_type,
			id: OnceCell::new(),
			self_link: OnceCell::new(),
		}
	}

	/// Memoizing proxy around the domain object
	pub fn object(&self) -> &Memoized<&'a T> {
		&self.object
	}

	/// The domain object itself, bypassing the cache
	pub fn resource(&self) -> &'a T {
		*self.object.target()
	}

	pub fn schema(&self) -> &'a ResourceSchema<T> {
		self.schema
	}

	pub fn options(&self) -> &'a SerializeOptions {
		self.options
	}

	pub fn context(&self) -> &'a Context {
		self.options.context()
	}

	pub fn context_value(&self, key: &str) -> Option<&'a Value> {
		self.options.context().get(key)
	}

	pub fn base_url(&self) -> Option<&'a str> {
		self.options.base_url()
	}

	/// Naming generation this call runs under
	pub fn naming(&self) -> &NameTransformer {
		&self.naming
	}

	pub fn resource_type(&self) -> &str {
		&self.resource_type
	}

	/// Wire form of a declared name
	pub fn format_name(&self, name: &str) -> Arc<str> {
		self.naming.format(name)
	}

	/// Whether the field `wire_name` passes this type's sparse fieldset
	pub fn includes_field(&self, wire_name: &str) -> bool {
		self.options.fields().allows(&self.resource_type, wire_name)
	}

	pub fn linkage_requested(&self, wire_name: &str) -> bool {
		self.options.linkage_requested(wire_name)
	}

	/// String id of the resource.
	///
	/// An `id` hook must not call this method.
	pub fn id(&self) -> Result<&str, SerializeError> {
		if let Some(id) = self.id.get() {
			return Ok(id.as_str());
		}
		let id = match self.schema.id_hook() {
			Some(hook) => hook(self).map_err(|source| SerializeError::Identity {
				resource_type: self.resource_type.to_string(),
				source,
			})?,
			None => self.resource().identity().to_string(),
		};
		Ok(self.id.get_or_init(|| id).as_str())
	}

	/// Self link of the resource, `None` without a base URL or link hook
	pub fn self_link(&self) -> Result<Option<&str>, SerializeError> {
		if let Some(link) = self.self_link.get() {
			return Ok(link.as_deref());
		}
		let link = match self.schema.self_link_hook() {
			Some(hook) => hook(self).map_err(|source| SerializeError::SelfLink {
				resource_type: self.resource_type.to_string(),
				source,
			})?,
			None => match self.base_url() {
				Some(base_url) => Some(format!(
					"{}/{}/{}",
					base_url,
					self.resource_type,
					self.id()?
				)),
				None => None,
			},
		};
		Ok(self.self_link.get_or_init(|| link).as_deref())
	}

	/// Resource meta, `None` when absent or empty
	pub fn meta(&self) -> Result<Option<Value>, SerializeError> {
		let Some(hook) = self.schema.meta_hook() else {
			return Ok(None);
		};
		let meta = hook(self).map_err(|source| SerializeError::Meta {
			resource_type: self.resource_type.to_string(),
			source,
		})?;
		Ok(meta.filter(|meta| !is_empty_meta(meta)))
	}

	/// Options handed to the lookup collaborator for `relationship`
	pub fn lookup_options<'b>(&'b self, relationship: &'b str) -> LookupOptions<'b> {
		LookupOptions {
			context: self.context(),
			base_url: self.base_url(),
			naming: &self.naming,
			relationship,
		}
	}
}

fn is_empty_meta(meta: &Value) -> bool {
	match meta {
		Value::Null => true,
		Value::Object(map) => map.is_empty(),
		Value::Array(items) => items.is_empty(),
		_ => false,
	}
}

impl<T> fmt::Debug for ResourceBinding<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ResourceBinding")
			.field("resource_type", &self.resource_type)
			.field("generation", &self.naming.generation())
			.field("options", &self.options)
			.field("cached_calls", &self.object.cached_calls())
			.finish()
	}
}
