//! Wire representation of a resource object.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{id, type, meta?}` identifying a resource, as used in linkage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
	pub id: String,
	#[serde(rename = "type")]
	pub resource_type: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub meta: Option<Value>,
}

impl ResourceIdentifier {
	pub fn new(id: impl Into<String>, resource_type: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			resource_type: resource_type.into(),
			meta: None,
		}
	}

	pub fn with_meta(mut self, meta: Value) -> Self {
		self.meta = Some(meta);
		self
	}
}

/// Resource linkage (`data`) of a relationship.
///
/// A to-one linkage to nothing is `null`; a to-many linkage is always an
/// array, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Linkage {
	ToOne(Option<ResourceIdentifier>),
	ToMany(Vec<ResourceIdentifier>),
}

impl Linkage {
	/// Identifiers in this linkage
	pub fn identifiers(&self) -> &[ResourceIdentifier] {
		match self {
			Linkage::ToOne(identifier) => identifier.as_slice(),
			Linkage::ToMany(identifiers) => identifiers,
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelationshipLinks {
	#[serde(rename = "self", skip_serializing_if = "Option::is_none")]
	pub self_link: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub related: Option<String>,
}

impl RelationshipLinks {
	pub fn is_empty(&self) -> bool {
		self.self_link.is_none() && self.related.is_none()
	}
}

/// One entry of `relationships`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelationshipObject {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub links: Option<RelationshipLinks>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<Linkage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceLinks {
	#[serde(rename = "self")]
	pub self_link: String,
}

/// A serialized resource object.
///
/// Empty `attributes` and `relationships` are left out of the JSON form, as
/// are absent `links` and `meta`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceObject {
	pub id: String,
	#[serde(rename = "type")]
	pub resource_type: String,
	#[serde(skip_serializing_if = "IndexMap::is_empty")]
	pub attributes: IndexMap<String, Value>,
	#[serde(skip_serializing_if = "IndexMap::is_empty")]
	pub relationships: IndexMap<String, RelationshipObject>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub links: Option<ResourceLinks>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub meta: Option<Value>,
}

impl ResourceObject {
	/// Identifier of this resource, without meta
	pub fn identifier(&self) -> ResourceIdentifier {
		ResourceIdentifier::new(self.id.clone(), self.resource_type.clone())
	}

	/// JSON form of the resource object
	pub fn to_value(&self) -> serde_json::Result<Value> {
		serde_json::to_value(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_json_diff::assert_json_eq;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_to_one_linkage_null() {
		let relationship = RelationshipObject {
			links: None,
			data: Some(Linkage::ToOne(None)),
		};
		assert_json_eq!(serde_json::to_value(&relationship).unwrap(), json!({"data": null}));
	}

	#[rstest]
	fn test_to_many_linkage_empty_array() {
		let relationship = RelationshipObject {
			links: None,
			data: Some(Linkage::ToMany(vec![])),
		};
		assert_json_eq!(serde_json::to_value(&relationship).unwrap(), json!({"data": []}));
	}

	#[rstest]
	fn test_identifier_meta_only_when_present() {
		let plain = ResourceIdentifier::new("1", "comments");
		let with_meta = ResourceIdentifier::new("2", "comments").with_meta(json!({"pinned": true}));

		assert_json_eq!(
			serde_json::to_value(vec![plain, with_meta]).unwrap(),
			json!([
				{"id": "1", "type": "comments"},
				{"id": "2", "type": "comments", "meta": {"pinned": true}}
			])
		);
	}

	#[rstest]
	fn test_resource_object_omits_empty_members() {
		let resource = ResourceObject {
			id: "1".to_string(),
			resource_type: "tags".to_string(),
			attributes: IndexMap::new(),
			relationships: IndexMap::new(),
			links: None,
			meta: None,
		};
		assert_json_eq!(resource.to_value().unwrap(), json!({"id": "1", "type": "tags"}));
		assert_eq!(resource.identifier(), ResourceIdentifier::new("1", "tags"));
	}

	#[rstest]
	fn test_relationship_links_partial() {
		let links = RelationshipLinks {
			self_link: None,
			related: Some("/articles/1/author".to_string()),
		};
		assert!(!links.is_empty());
		assert_json_eq!(
			serde_json::to_value(&links).unwrap(),
			json!({"related": "/articles/1/author"})
		);
	}

	#[rstest]
	fn test_identifier_deserializes_type_key() {
		let identifier: ResourceIdentifier =
			serde_json::from_value(json!({"id": "7", "type": "people"})).unwrap();
		assert_eq!(identifier, ResourceIdentifier::new("7", "people"));
	}
}
