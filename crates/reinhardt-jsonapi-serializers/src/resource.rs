//! Domain object contract.

use crate::error::FieldError;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Identity of a domain object.
///
/// Rendered on the wire as its string form only.
///
/// # Examples
///
/// ```
/// use reinhardt_jsonapi_serializers::ResourceIdentity;
///
/// assert_eq!(ResourceIdentity::from(42i64).to_string(), "42");
/// assert_eq!(ResourceIdentity::from("intro-post").to_string(), "intro-post");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceIdentity {
	Integer(i64),
	Unsigned(u64),
	Uuid(Uuid),
	Text(String),
}

impl fmt::Display for ResourceIdentity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ResourceIdentity::Integer(value) => write!(f, "{}", value),
			ResourceIdentity::Unsigned(value) => write!(f, "{}", value),
			ResourceIdentity::Uuid(value) => write!(f, "{}", value.hyphenated()),
			ResourceIdentity::Text(value) => f.write_str(value),
		}
	}
}

impl From<i32> for ResourceIdentity {
	fn from(value: i32) -> Self {
		ResourceIdentity::Integer(i64::from(value))
	}
}

impl From<i64> for ResourceIdentity {
	fn from(value: i64) -> Self {
		ResourceIdentity::Integer(value)
	}
}

impl From<u32> for ResourceIdentity {
	fn from(value: u32) -> Self {
		ResourceIdentity::Unsigned(u64::from(value))
	}
}

impl From<u64> for ResourceIdentity {
	fn from(value: u64) -> Self {
		ResourceIdentity::Unsigned(value)
	}
}

impl From<Uuid> for ResourceIdentity {
	fn from(value: Uuid) -> Self {
		ResourceIdentity::Uuid(value)
	}
}

impl From<String> for ResourceIdentity {
	fn from(value: String) -> Self {
		ResourceIdentity::Text(value)
	}
}

impl From<&str> for ResourceIdentity {
	fn from(value: &str) -> Self {
		ResourceIdentity::Text(value.to_string())
	}
}

/// Related object handed to the lookup collaborator
pub type RelatedObject = Arc<dyn Resource>;

/// A domain object that can be serialized as a JSON:API resource.
///
/// `class_name` is the identity the resource type is derived from; it may
/// carry a module path (`"Blog::LongComment"`), which is stripped before the
/// name is pluralized. The `read_*` methods back method-reference value
/// sources: a declaration naming `"title"` calls `read_attribute("title")`.
/// Objects that only use computed declarations can keep the defaults, which
/// report [`FieldError::UnknownMethod`].
///
/// # Examples
///
/// ```
/// use reinhardt_jsonapi_serializers::{FieldError, Resource, ResourceIdentity};
/// use serde_json::{json, Value};
///
/// struct Tag {
///     id: i64,
///     label: String,
/// }
///
/// impl Resource for Tag {
///     fn identity(&self) -> ResourceIdentity {
///         self.id.into()
///     }
///
///     fn class_name(&self) -> &str {
///         "Tag"
///     }
///
///     fn read_attribute(&self, method: &str) -> Result<Value, FieldError> {
///         match method {
///             "label" => Ok(json!(self.label)),
///             other => Err(FieldError::unknown_method(self.class_name(), other)),
///         }
///     }
/// }
///
/// let tag = Tag { id: 3, label: "rust".into() };
/// assert_eq!(tag.read_attribute("label").unwrap(), json!("rust"));
/// assert!(tag.read_attribute("color").unwrap_err().is_unknown_method());
/// ```
pub trait Resource {
	fn identity(&self) -> ResourceIdentity;

	fn class_name(&self) -> &str;

	/// Value of the attribute method `method`
	fn read_attribute(&self, method: &str) -> Result<Value, FieldError> {
		Err(FieldError::unknown_method(self.class_name(), method))
	}

	/// Object behind the to-one relationship method `method`, `None` if unset
	fn read_to_one(&self, method: &str) -> Result<Option<RelatedObject>, FieldError> {
		Err(FieldError::unknown_method(self.class_name(), method))
	}

	/// Objects behind the to-many relationship method `method`.
	///
	/// `None` is treated the same as an empty collection.
	fn read_to_many(&self, method: &str) -> Result<Option<Vec<RelatedObject>>, FieldError> {
		Err(FieldError::unknown_method(self.class_name(), method))
	}
}
