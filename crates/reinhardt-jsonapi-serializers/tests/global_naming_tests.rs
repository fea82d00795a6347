//! Serialization against the process-wide naming registry.

mod common;

use assert_json_diff::assert_json_eq;
use common::{Article, Person};
use reinhardt_inflection::{KeyTransform, NamingConfig, NamingRegistry};
use reinhardt_jsonapi_serializers::{
	JsonApiSettings, ResourceSchema, ResourceSerializer, SerializeOptions,
};
use rstest::{fixture, rstest};
use serde_json::json;
use serial_test::serial;

#[fixture]
fn serializer() -> ResourceSerializer<Article> {
	ResourceSerializer::new(
		ResourceSchema::<Article>::new()
			.attribute("title")
			.attribute_with("title_length", |binding| {
				Ok(json!(binding.resource().title.len()))
			})
			.has_one("author"),
	)
}

#[rstest]
#[serial(naming)]
fn test_default_global_naming(serializer: ResourceSerializer<Article>) {
	NamingRegistry::global().reset();
	let article = Article::new(1, "Hi").with_author(Person::new(2, "Ada"));
	let options = SerializeOptions::new().include_linkage("author");

	let resource = serializer.serialize(&article, &options).unwrap();

	assert_json_eq!(
		resource.to_value().unwrap(),
		json!({
			"id": "1",
			"type": "articles",
			"attributes": {"title": "Hi", "title-length": 2},
			"relationships": {"author": {"data": {"id": "2", "type": "people"}}}
		})
	);
}

#[rstest]
#[serial(naming)]
fn test_settings_switch_global_naming(serializer: ResourceSerializer<Article>) {
	NamingRegistry::global().reset();
	let settings = JsonApiSettings::from_toml_str(
		r#"
		key_transform = "camel_lower"
		base_url = "https://example.com"
		"#,
	)
	.unwrap();
	settings.apply_global();
	let article = Article::new(1, "Hi").with_author(Person::new(2, "Ada"));
	// Linkage requests use wire names of the active configuration
	let options = settings.serialize_options().include_linkage("author");

	let resource = serializer.serialize(&article, &options).unwrap();

	assert_json_eq!(
		resource.to_value().unwrap(),
		json!({
			"id": "1",
			"type": "articles",
			"attributes": {"title": "Hi", "titleLength": 2},
			"relationships": {
				"author": {
					"links": {
						"self": "https://example.com/articles/1/relationships/author",
						"related": "https://example.com/articles/1/author"
					},
					"data": {"id": "2", "type": "people"}
				}
			},
			"links": {"self": "https://example.com/articles/1"}
		})
	);
	NamingRegistry::global().reset();
}

#[rstest]
#[serial(naming)]
fn test_binding_keeps_generation_across_reconfiguration(serializer: ResourceSerializer<Article>) {
	NamingRegistry::global().reset();
	let article = Article::new(1, "Hi");
	let options = SerializeOptions::new();
	let binding = serializer.bind(&article, &options);

	NamingRegistry::global().configure(NamingConfig::new(KeyTransform::Underscore));
	let resource = serializer.assemble(&binding).unwrap();

	assert!(resource.attributes.contains_key("title-length"));
	assert!(!NamingRegistry::global().is_current(binding.naming()));

	let fresh = serializer.serialize(&article, &options).unwrap();
	assert!(fresh.attributes.contains_key("title_length"));
	NamingRegistry::global().reset();
}
