//! Sparse fieldsets.
//!
//! A fieldset restricts the fields rendered for one resource type. Types
//! without an entry render every declared field. Requested names that match
//! no declared attribute or relationship are ignored.

use std::collections::{HashMap, HashSet};

/// Requested fields per resource type, keyed by wire type and wire names.
///
/// # Examples
///
/// ```
/// use reinhardt_jsonapi_serializers::SparseFieldsets;
///
/// let fields = SparseFieldsets::from_query([
///     ("fields[articles]", "title, author"),
///     ("page[size]", "10"),
/// ]);
///
/// assert!(fields.allows("articles", "title"));
/// assert!(!fields.allows("articles", "body"));
/// // No fieldset for people: everything is allowed
/// assert!(fields.allows("people", "email"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseFieldsets {
	fields: HashMap<String, HashSet<String>>,
}

impl SparseFieldsets {
	pub fn new() -> Self {
		Self::default()
	}

	/// Restrict `resource_type` to `names`, adding to any earlier entry
	pub fn insert<I, S>(&mut self, resource_type: impl Into<String>, names: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.fields
			.entry(resource_type.into())
			.or_default()
			.extend(names.into_iter().map(Into::into));
		self
	}

	/// Builder form of [`insert`](Self::insert)
	pub fn with<I, S>(mut self, resource_type: impl Into<String>, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.insert(resource_type, names);
		self
	}

	/// Parse a comma separated list (`"title,author"`) for `resource_type`.
	///
	/// Names are trimmed and empty entries dropped; an empty list still
	/// registers the type, hiding all of its fields.
	pub fn insert_list(&mut self, resource_type: impl Into<String>, list: &str) -> &mut Self {
		let names = list
			.split(',')
			.map(str::trim)
			.filter(|name| !name.is_empty());
		self.insert(resource_type, names)
	}

	/// Collect fieldsets from `fields[<type>]` query parameters.
	///
	/// Other parameters are skipped.
	pub fn from_query<I, K, V>(params: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: AsRef<str>,
	{
		let mut fieldsets = Self::new();
		for (key, value) in params {
			let Some(resource_type) = key
				.as_ref()
				.strip_prefix("fields[")
				.and_then(|rest| rest.strip_suffix(']'))
			else {
				continue;
			};
			if resource_type.is_empty() {
				continue;
			}
			fieldsets.insert_list(resource_type, value.as_ref());
		}
		fieldsets
	}

	/// Requested names for `resource_type`, `None` when unrestricted
	pub fn get(&self, resource_type: &str) -> Option<&HashSet<String>> {
		self.fields.get(resource_type)
	}

	/// Whether the field `wire_name` of `resource_type` should be rendered
	pub fn allows(&self, resource_type: &str, wire_name: &str) -> bool {
		self.fields
			.get(resource_type)
			.is_none_or(|names| names.contains(wire_name))
	}

	/// Whether no type is restricted
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}
