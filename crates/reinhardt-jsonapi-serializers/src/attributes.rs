//! Attribute resolution.

use crate::binding::ResourceBinding;
use crate::declaration::{AttributeDeclaration, resolve_source};
use crate::error::SerializeError;
use crate::resource::Resource;
use indexmap::IndexMap;
use serde_json::Value;

/// Compute the `attributes` member of a resource.
///
/// Declarations are visited in order. An attribute filtered out by the
/// resource type's sparse fieldset is skipped without evaluating its source.
/// The first failing source aborts resolution.
pub fn resolve_attributes<T: Resource>(
	binding: &ResourceBinding<'_, T>,
	declarations: &[AttributeDeclaration<T>],
) -> Result<IndexMap<String, Value>, SerializeError> {
	let mut attributes = IndexMap::with_capacity(declarations.len());

	for declaration in declarations {
		let wire_name = binding.format_name(declaration.name());
		if !binding.includes_field(&wire_name) {
			tracing::trace!(
				resource_type = binding.resource_type(),
				attribute = &*wire_name,
				"attribute excluded by sparse fieldset"
			);
			continue;
		}

		let value =
			resolve_source(declaration.source(), binding).map_err(|source| SerializeError::Attribute {
				resource_type: binding.resource_type().to_string(),
				attribute: wire_name.to_string(),
				source,
			})?;
		attributes.insert(wire_name.to_string(), value);
	}

	Ok(attributes)
}
