//! Attribute and relationship declarations.
//!
//! A declaration pairs a field name with the [`ValueSource`] that produces
//! its value. Declarations are built once per resource schema and shared by
//! every binding that serializes an object of that schema.

use crate::binding::ResourceBinding;
use crate::error::FieldError;
use crate::resource::{RelatedObject, Resource};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Closure evaluated with the resource binding in scope
pub type Computation<T, V> =
	Arc<dyn Fn(&ResourceBinding<'_, T>) -> Result<V, FieldError> + Send + Sync>;

/// Where a declared value comes from
pub enum ValueSource<T, V> {
	/// Read through the method of that name on the domain object
	Method(String),
	/// Computed from the binding (object, context, options)
	Computation(Computation<T, V>),
}

impl<T, V> ValueSource<T, V> {
	pub fn method(name: impl Into<String>) -> Self {
		ValueSource::Method(name.into())
	}

	pub fn computation<F>(compute: F) -> Self
	where
		F: Fn(&ResourceBinding<'_, T>) -> Result<V, FieldError> + Send + Sync + 'static,
	{
		ValueSource::Computation(Arc::new(compute))
	}
}

impl<T, V> Clone for ValueSource<T, V> {
	fn clone(&self) -> Self {
		match self {
			ValueSource::Method(name) => ValueSource::Method(name.clone()),
			ValueSource::Computation(compute) => ValueSource::Computation(Arc::clone(compute)),
		}
	}
}

impl<T, V> fmt::Debug for ValueSource<T, V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ValueSource::Method(name) => f.debug_tuple("Method").field(name).finish(),
			ValueSource::Computation(_) => f.write_str("Computation(..)"),
		}
	}
}

/// Values a method-reference source can read from a [`Resource`]
pub(crate) trait MethodValue: Clone + 'static {
	/// Memoized operation name
	const OPERATION: &'static str;

	fn read<R: Resource + ?Sized>(object: &R, method: &str) -> Result<Self, FieldError>;
}

impl MethodValue for Value {
	const OPERATION: &'static str = "read_attribute";

	fn read<R: Resource + ?Sized>(object: &R, method: &str) -> Result<Self, FieldError> {
		object.read_attribute(method)
	}
}

impl MethodValue for Option<RelatedObject> {
	const OPERATION: &'static str = "read_to_one";

	fn read<R: Resource + ?Sized>(object: &R, method: &str) -> Result<Self, FieldError> {
		object.read_to_one(method)
	}
}

impl MethodValue for Option<Vec<RelatedObject>> {
	const OPERATION: &'static str = "read_to_many";

	fn read<R: Resource + ?Sized>(object: &R, method: &str) -> Result<Self, FieldError> {
		object.read_to_many(method)
	}
}

/// Evaluate `source` for the bound object.
///
/// Method reads go through the binding's memoizing proxy, so the same
/// method referenced by several declarations runs once per binding.
pub(crate) fn resolve_source<T: Resource, V: MethodValue>(
	source: &ValueSource<T, V>,
	binding: &ResourceBinding<'_, T>,
) -> Result<V, FieldError> {
	match source {
		ValueSource::Method(method) => {
			binding
				.object()
				.try_call(V::OPERATION, method.clone(), |object, method| {
					V::read(*object, method)
				})
		}
		ValueSource::Computation(compute) => compute(binding),
	}
}

/// A declared attribute
pub struct AttributeDeclaration<T> {
	name: String,
	source: ValueSource<T, Value>,
}

impl<T> AttributeDeclaration<T> {
	pub fn new(name: impl Into<String>, source: ValueSource<T, Value>) -> Self {
		Self {
			name: name.into(),
			source,
		}
	}

	/// Attribute read from the method of the same name
	pub fn method(name: impl Into<String>) -> Self {
		let name = name.into();
		let source = ValueSource::Method(name.clone());
		Self { name, source }
	}

	/// Attribute computed by `compute`
	pub fn computed<F>(name: impl Into<String>, compute: F) -> Self
	where
		F: Fn(&ResourceBinding<'_, T>) -> Result<Value, FieldError> + Send + Sync + 'static,
	{
		Self::new(name, ValueSource::computation(compute))
	}

	/// Internal (unformatted) name
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn source(&self) -> &ValueSource<T, Value> {
		&self.source
	}
}

impl<T> Clone for AttributeDeclaration<T> {
	fn clone(&self) -> Self {
		Self {
			name: self.name.clone(),
			source: self.source.clone(),
		}
	}
}

impl<T> fmt::Debug for AttributeDeclaration<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AttributeDeclaration")
			.field("name", &self.name)
			.field("source", &self.source)
			.finish()
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
	One,
	Many,
}

/// Per-relationship rendering options.
///
/// Links are rendered unless disabled; linkage is only rendered on request
/// unless `include_data` forces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationshipOptions {
	pub include_links: bool,
	pub include_data: bool,
}

impl Default for RelationshipOptions {
	fn default() -> Self {
		Self {
			include_links: true,
			include_data: false,
		}
	}
}

/// Value source of a relationship, by cardinality
pub enum RelationshipSource<T> {
	ToOne(ValueSource<T, Option<RelatedObject>>),
	ToMany(ValueSource<T, Option<Vec<RelatedObject>>>),
}

impl<T> RelationshipSource<T> {
	pub fn cardinality(&self) -> Cardinality {
		match self {
			RelationshipSource::ToOne(_) => Cardinality::One,
			RelationshipSource::ToMany(_) => Cardinality::Many,
		}
	}
}

impl<T> Clone for RelationshipSource<T> {
	fn clone(&self) -> Self {
		match self {
			RelationshipSource::ToOne(source) => RelationshipSource::ToOne(source.clone()),
			RelationshipSource::ToMany(source) => RelationshipSource::ToMany(source.clone()),
		}
	}
}

impl<T> fmt::Debug for RelationshipSource<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RelationshipSource::ToOne(source) => f.debug_tuple("ToOne").field(source).finish(),
			RelationshipSource::ToMany(source) => f.debug_tuple("ToMany").field(source).finish(),
		}
	}
}

/// A declared relationship.
///
/// # Examples
///
/// ```
/// use reinhardt_jsonapi_serializers::{Cardinality, RelationshipDeclaration};
/// # struct Article;
///
/// let author = RelationshipDeclaration::<Article>::has_one("author")
///     .include_links(false)
///     .include_data(true);
///
/// assert_eq!(author.cardinality(), Cardinality::One);
/// assert!(!author.options().include_links);
/// assert!(author.options().include_data);
/// ```
pub struct RelationshipDeclaration<T> {
	name: String,
	source: RelationshipSource<T>,
	options: RelationshipOptions,
}

impl<T> RelationshipDeclaration<T> {
	pub fn new(name: impl Into<String>, source: RelationshipSource<T>) -> Self {
		Self {
			name: name.into(),
			source,
			options: RelationshipOptions::default(),
		}
	}

	/// To-one relationship read from the method of the same name
	pub fn has_one(name: impl Into<String>) -> Self {
		let name = name.into();
		let source = RelationshipSource::ToOne(ValueSource::Method(name.clone()));
		Self::new(name, source)
	}

	/// To-one relationship computed by `compute`
	pub fn has_one_with<F>(name: impl Into<String>, compute: F) -> Self
	where
		F: Fn(&ResourceBinding<'_, T>) -> Result<Option<RelatedObject>, FieldError>
			+ Send
			+ Sync
			+ 'static,
	{
		Self::new(
			name,
			RelationshipSource::ToOne(ValueSource::computation(compute)),
		)
	}

	/// To-many relationship read from the method of the same name
	pub fn has_many(name: impl Into<String>) -> Self {
		let name = name.into();
		let source = RelationshipSource::ToMany(ValueSource::Method(name.clone()));
		Self::new(name, source)
	}

	/// To-many relationship computed by `compute`
	pub fn has_many_with<F>(name: impl Into<String>, compute: F) -> Self
	where
		F: Fn(&ResourceBinding<'_, T>) -> Result<Option<Vec<RelatedObject>>, FieldError>
			+ Send
			+ Sync
			+ 'static,
	{
		Self::new(
			name,
			RelationshipSource::ToMany(ValueSource::computation(compute)),
		)
	}

	/// Read the relationship from a differently named method
	pub fn from_method(mut self, method: impl Into<String>) -> Self {
		let method = method.into();
		self.source = match self.source {
			RelationshipSource::ToOne(_) => RelationshipSource::ToOne(ValueSource::Method(method)),
			RelationshipSource::ToMany(_) => {
				RelationshipSource::ToMany(ValueSource::Method(method))
			}
		};
		self
	}

	pub fn include_links(mut self, include: bool) -> Self {
		self.options.include_links = include;
		self
	}

	pub fn include_data(mut self, include: bool) -> Self {
		self.options.include_data = include;
		self
	}

	pub fn with_options(mut self, options: RelationshipOptions) -> Self {
		self.options = options;
		self
	}

	/// Internal (unformatted) name
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn source(&self) -> &RelationshipSource<T> {
		&self.source
	}

	pub fn cardinality(&self) -> Cardinality {
		self.source.cardinality()
	}

	pub fn options(&self) -> RelationshipOptions {
		self.options
	}
}

impl<T> Clone for RelationshipDeclaration<T> {
	fn clone(&self) -> Self {
		Self {
			name: self.name.clone(),
			source: self.source.clone(),
			options: self.options,
		}
	}
}

impl<T> fmt::Debug for RelationshipDeclaration<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RelationshipDeclaration")
			.field("name", &self.name)
			.field("source", &self.source)
			.field("options", &self.options)
			.finish()
	}
}
