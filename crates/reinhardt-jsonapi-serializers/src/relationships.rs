//! Relationship resolution.
//!
//! Links are cheap and rendered by default. Linkage requires walking to the
//! related objects, so it is only computed when the relationship is named in
//! the call's linkage requests or declared with `include_data`.

use crate::binding::ResourceBinding;
use crate::declaration::{RelationshipDeclaration, RelationshipSource, resolve_source};
use crate::document::{Linkage, RelationshipLinks, RelationshipObject, ResourceIdentifier};
use crate::error::{FieldError, SerializeError};
use crate::lookup::SerializerLookup;
use crate::resource::Resource;
use indexmap::IndexMap;

/// Compute the `relationships` member of a resource.
///
/// Relationships pass through the same sparse fieldset gate as attributes.
/// A relationship that ends up with neither links nor linkage is left out.
pub fn resolve_relationships<T: Resource>(
	binding: &ResourceBinding<'_, T>,
	declarations: &[RelationshipDeclaration<T>],
	lookup: &dyn SerializerLookup,
) -> Result<IndexMap<String, RelationshipObject>, SerializeError> {
	let mut relationships = IndexMap::with_capacity(declarations.len());

	for declaration in declarations {
		let wire_name = binding.format_name(declaration.name());
		if !binding.includes_field(&wire_name) {
			tracing::trace!(
				resource_type = binding.resource_type(),
				relationship = &*wire_name,
				"relationship excluded by sparse fieldset"
			);
			continue;
		}

		let options = declaration.options();
		let links = if options.include_links {
			relationship_links(binding.self_link()?, &wire_name)
		} else {
			None
		};

		let data = if options.include_data || binding.linkage_requested(&wire_name) {
			Some(resolve_linkage(binding, declaration, &wire_name, lookup)?)
		} else {
			tracing::trace!(
				resource_type = binding.resource_type(),
				relationship = &*wire_name,
				"linkage not requested"
			);
			None
		};

		if links.is_none() && data.is_none() {
			continue;
		}
		relationships.insert(wire_name.to_string(), RelationshipObject { links, data });
	}

	Ok(relationships)
}

fn relationship_links(self_link: Option<&str>, wire_name: &str) -> Option<RelationshipLinks> {
	let self_link = self_link?;
	Some(RelationshipLinks {
		self_link: Some(format!("{}/relationships/{}", self_link, wire_name)),
		related: Some(format!("{}/{}", self_link, wire_name)),
	})
}

fn resolve_linkage<T: Resource>(
	binding: &ResourceBinding<'_, T>,
	declaration: &RelationshipDeclaration<T>,
	wire_name: &str,
	lookup: &dyn SerializerLookup,
) -> Result<Linkage, SerializeError> {
	let relationship_error = |source: FieldError| SerializeError::Relationship {
		resource_type: binding.resource_type().to_string(),
		relationship: wire_name.to_string(),
		source,
	};

	match declaration.source() {
		RelationshipSource::ToOne(source) => {
			let Some(related) = resolve_source(source, binding).map_err(relationship_error)? else {
				return Ok(Linkage::ToOne(None));
			};
			let identifier = identify(binding, lookup, wire_name, related.as_ref())?;
			// Only to-many linkage carries per-member meta
			Ok(Linkage::ToOne(Some(ResourceIdentifier {
				meta: None,
				..identifier
			})))
		}
		RelationshipSource::ToMany(source) => {
			let related = resolve_source(source, binding)
				.map_err(relationship_error)?
				.unwrap_or_default();
			let identifiers = related
				.iter()
				.map(|object| identify(binding, lookup, wire_name, object.as_ref()))
				.collect::<Result<Vec<_>, _>>()?;
			Ok(Linkage::ToMany(identifiers))
		}
	}
}

fn identify<T: Resource>(
	binding: &ResourceBinding<'_, T>,
	lookup: &dyn SerializerLookup,
	wire_name: &str,
	object: &dyn Resource,
) -> Result<ResourceIdentifier, SerializeError> {
	lookup
		.lookup(object, &binding.lookup_options(wire_name))
		.map_err(|source| {
			tracing::debug!(
				resource_type = binding.resource_type(),
				relationship = wire_name,
				class_name = object.class_name(),
				error = %source,
				"related object lookup failed"
			);
			SerializeError::Lookup {
				resource_type: binding.resource_type().to_string(),
				relationship: wire_name.to_string(),
				source,
			}
		})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::binding::SerializeOptions;
	use crate::error::LookupError;
	use crate::fieldset::SparseFieldsets;
	use crate::lookup::{ConventionLookup, LookupOptions, TypeMapping};
	use crate::resource::{RelatedObject, ResourceIdentity};
	use crate::schema::ResourceSchema;
	use assert_json_diff::assert_json_eq;
	use reinhardt_inflection::{NameTransformer, NamingConfig};
	use rstest::{fixture, rstest};
	use serde_json::json;
	use std::cell::Cell;
	use std::sync::Arc;

	struct Person {
		id: i64,
	}

	impl Resource for Person {
		fn identity(&self) -> ResourceIdentity {
			self.id.into()
		}

		fn class_name(&self) -> &str {
			"Person"
		}
	}

	struct Article {
		author: Option<Arc<Person>>,
		reviewers: Vec<Arc<Person>>,
		traversals: Cell<u32>,
	}

	impl Resource for Article {
		fn identity(&self) -> ResourceIdentity {
			42i64.into()
		}

		fn class_name(&self) -> &str {
			"Article"
		}

		fn read_to_one(&self, method: &str) -> Result<Option<RelatedObject>, FieldError> {
			self.traversals.set(self.traversals.get() + 1);
			match method {
				"author" => Ok(self.author.clone().map(|author| author as RelatedObject)),
				other => Err(FieldError::unknown_method(self.class_name(), other)),
			}
		}

		fn read_to_many(&self, method: &str) -> Result<Option<Vec<RelatedObject>>, FieldError> {
			self.traversals.set(self.traversals.get() + 1);
			match method {
				"reviewers" => Ok(Some(
					self.reviewers
						.iter()
						.map(|person| Arc::clone(person) as RelatedObject)
						.collect(),
				)),
				"tags" => Ok(None),
				other => Err(FieldError::unknown_method(self.class_name(), other)),
			}
		}
	}

	#[fixture]
	fn article() -> Article {
		Article {
			author: Some(Arc::new(Person { id: 7 })),
			reviewers: vec![Arc::new(Person { id: 8 }), Arc::new(Person { id: 9 })],
			traversals: Cell::new(0),
		}
	}

	#[fixture]
	fn schema() -> ResourceSchema<Article> {
		ResourceSchema::new()
			.has_one("author")
			.has_many("reviewers")
			.has_many("tags")
	}

	fn options() -> SerializeOptions {
		SerializeOptions::new().with_naming(Arc::new(NameTransformer::new(0, NamingConfig::default())))
	}

	fn resolve(
		article: &Article,
		schema: &ResourceSchema<Article>,
		options: &SerializeOptions,
	) -> Result<serde_json::Value, SerializeError> {
		let binding = ResourceBinding::new(article, schema, options);
		let relationships =
			resolve_relationships(&binding, schema.relationships(), &ConventionLookup::new())?;
		Ok(serde_json::to_value(relationships).unwrap())
	}

	#[rstest]
	fn test_no_base_url_and_no_linkage_omits_everything(
		article: Article,
		schema: ResourceSchema<Article>,
	) {
		let relationships = resolve(&article, &schema, &options()).unwrap();

		assert_json_eq!(relationships, json!({}));
		assert_eq!(article.traversals.get(), 0);
	}

	#[rstest]
	fn test_links_without_linkage(article: Article, schema: ResourceSchema<Article>) {
		let options = options().with_base_url("https://example.com");

		let relationships = resolve(&article, &schema, &options).unwrap();

		assert_json_eq!(
			relationships["author"],
			json!({
				"links": {
					"self": "https://example.com/articles/42/relationships/author",
					"related": "https://example.com/articles/42/author"
				}
			})
		);
		assert_eq!(article.traversals.get(), 0);
	}

	#[rstest]
	fn test_requested_linkage(article: Article, schema: ResourceSchema<Article>) {
		let options = options().include_linkages(["author", "reviewers", "tags"]);

		let relationships = resolve(&article, &schema, &options).unwrap();

		assert_json_eq!(
			relationships,
			json!({
				"author": {"data": {"id": "7", "type": "people"}},
				"reviewers": {"data": [
					{"id": "8", "type": "people"},
					{"id": "9", "type": "people"}
				]},
				"tags": {"data": []}
			})
		);
	}

	#[rstest]
	fn test_missing_to_one_is_null(mut article: Article, schema: ResourceSchema<Article>) {
		article.author = None;
		let options = options().include_linkage("author");

		let relationships = resolve(&article, &schema, &options).unwrap();

		assert_json_eq!(relationships, json!({"author": {"data": null}}));
	}

	#[rstest]
	fn test_include_data_and_disabled_links(article: Article) {
		let schema = ResourceSchema::new().relationship(
			RelationshipDeclaration::has_one("author")
				.include_links(false)
				.include_data(true),
		);
		let options = options().with_base_url("/api");

		let relationships = resolve(&article, &schema, &options).unwrap();

		assert_json_eq!(
			relationships,
			json!({"author": {"data": {"id": "7", "type": "people"}}})
		);
	}

	#[rstest]
	fn test_sparse_fieldset_applies_to_relationships(
		article: Article,
		schema: ResourceSchema<Article>,
	) {
		let options = options()
			.include_linkages(["author", "reviewers"])
			.with_fields(SparseFieldsets::new().with("articles", ["reviewers"]));

		let relationships = resolve(&article, &schema, &options).unwrap();

		assert_eq!(relationships.as_object().unwrap().len(), 1);
		assert!(relationships.get("reviewers").is_some());
	}

	#[rstest]
	fn test_to_many_meta_from_lookup(article: Article, schema: ResourceSchema<Article>) {
		let options = options().include_linkage("reviewers");
		let binding = ResourceBinding::new(&article, &schema, &options);
		let lookup = ConventionLookup::new().register(
			"Person",
			TypeMapping::new().with_meta(|object| Some(json!({"ref": object.identity().to_string()}))),
		);

		let relationships =
			resolve_relationships(&binding, schema.relationships(), &lookup).unwrap();

		assert_json_eq!(
			serde_json::to_value(&relationships["reviewers"]).unwrap(),
			json!({"data": [
				{"id": "8", "type": "people", "meta": {"ref": "8"}},
				{"id": "9", "type": "people", "meta": {"ref": "9"}}
			]})
		);
	}

	struct Ambiguous;

	impl SerializerLookup for Ambiguous {
		fn lookup(
			&self,
			object: &dyn Resource,
			_options: &LookupOptions<'_>,
		) -> Result<ResourceIdentifier, LookupError> {
			Err(LookupError::ambiguous(
				object.class_name(),
				vec!["people".into(), "users".into()],
			))
		}
	}

	#[rstest]
	fn test_lookup_failure_propagates(article: Article, schema: ResourceSchema<Article>) {
		let options = options().include_linkage("author");
		let binding = ResourceBinding::new(&article, &schema, &options);

		let err = resolve_relationships(&binding, schema.relationships(), &Ambiguous).unwrap_err();

		assert!(err.is_ambiguous_lookup());
		assert_eq!(err.field(), Some("author"));
		assert_eq!(err.resource_type(), "articles");
	}

	#[rstest]
	fn test_source_failure_is_relationship_error(article: Article) {
		let schema = ResourceSchema::new().has_many("editors");
		let options = options().include_linkage("editors");

		let err = resolve(&article, &schema, &options).unwrap_err();

		assert!(matches!(err, SerializeError::Relationship { .. }));
		assert!(err.as_field_error().unwrap().is_unknown_method());
	}

	#[rstest]
	fn test_method_read_memoized_across_relationships(article: Article) {
		let schema = ResourceSchema::new()
			.has_one("author")
			.relationship(
				RelationshipDeclaration::has_one("writer")
					.from_method("author")
					.include_data(true),
			);
		let options = options().include_linkage("author");

		let relationships = resolve(&article, &schema, &options).unwrap();

		assert_eq!(relationships["writer"]["data"]["id"], json!("7"));
		assert_eq!(article.traversals.get(), 1);
	}
}
