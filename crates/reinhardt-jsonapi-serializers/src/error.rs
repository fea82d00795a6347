//! Errors raised while serializing a resource.
//!
//! Value sources and lookup collaborators report [`FieldError`] and
//! [`LookupError`]. The resolvers wrap them in a [`SerializeError`] that
//! names the resource type and field at the failure point; the original error
//! stays reachable through [`std::error::Error::source`] unchanged.

use std::error::Error as StdError;

/// Boxed error raised by user code
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Failure raised while computing an attribute, relationship or hook value
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
	/// The domain object does not answer the referenced method
	#[error("'{class_name}' does not respond to '{method}'")]
	UnknownMethod { class_name: String, method: String },

	/// A computation reported a failure
	#[error("{message}")]
	Computation { message: String },

	/// Any other error raised by user code
	#[error(transparent)]
	Other(#[from] BoxError),
}

impl FieldError {
	/// Create an unknown method error
	pub fn unknown_method(class_name: impl Into<String>, method: impl Into<String>) -> Self {
		FieldError::UnknownMethod {
			class_name: class_name.into(),
			method: method.into(),
		}
	}

	/// Create a computation error
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_jsonapi_serializers::FieldError;
	///
	/// let err = FieldError::computation("word count unavailable");
	/// assert!(err.is_computation());
	/// assert_eq!(err.to_string(), "word count unavailable");
	/// ```
	pub fn computation(message: impl Into<String>) -> Self {
		FieldError::Computation {
			message: message.into(),
		}
	}

	/// Wrap an arbitrary error
	pub fn custom<E>(error: E) -> Self
	where
		E: StdError + Send + Sync + 'static,
	{
		FieldError::Other(Box::new(error))
	}

	pub fn is_unknown_method(&self) -> bool {
		matches!(self, FieldError::UnknownMethod { .. })
	}

	pub fn is_computation(&self) -> bool {
		matches!(self, FieldError::Computation { .. })
	}
}

/// Failure raised by a [`SerializerLookup`](crate::SerializerLookup)
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
	/// More than one resource type matches the related object's class
	#[error("Ambiguous resource type for '{class_name}': {}", candidates.join(", "))]
	Ambiguous {
		class_name: String,
		candidates: Vec<String>,
	},

	/// The class has no registered mapping and the lookup is strict
	#[error("No resource mapping registered for '{class_name}'")]
	Unregistered { class_name: String },

	/// Any other error raised by a custom lookup
	#[error(transparent)]
	Other(#[from] BoxError),
}

impl LookupError {
	pub fn ambiguous(class_name: impl Into<String>, candidates: Vec<String>) -> Self {
		LookupError::Ambiguous {
			class_name: class_name.into(),
			candidates,
		}
	}

	pub fn unregistered(class_name: impl Into<String>) -> Self {
		LookupError::Unregistered {
			class_name: class_name.into(),
		}
	}

	pub fn is_ambiguous(&self) -> bool {
		matches!(self, LookupError::Ambiguous { .. })
	}
}

/// Failure while assembling one resource object
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
	#[error("Failed to compute attribute '{attribute}' of '{resource_type}': {source}")]
	Attribute {
		resource_type: String,
		attribute: String,
		#[source]
		source: FieldError,
	},

	#[error("Failed to resolve relationship '{relationship}' of '{resource_type}': {source}")]
	Relationship {
		resource_type: String,
		relationship: String,
		#[source]
		source: FieldError,
	},

	/// The lookup collaborator failed for an object in a relationship
	#[error(
		"Failed to identify related object in '{relationship}' of '{resource_type}': {source}"
	)]
	Lookup {
		resource_type: String,
		relationship: String,
		#[source]
		source: LookupError,
	},

	#[error("Failed to compute id of '{resource_type}': {source}")]
	Identity {
		resource_type: String,
		#[source]
		source: FieldError,
	},

	#[error("Failed to compute meta of '{resource_type}': {source}")]
	Meta {
		resource_type: String,
		#[source]
		source: FieldError,
	},

	#[error("Failed to compute self link of '{resource_type}': {source}")]
	SelfLink {
		resource_type: String,
		#[source]
		source: FieldError,
	},
}

impl SerializeError {
	/// Resource type being assembled when the failure happened
	pub fn resource_type(&self) -> &str {
		match self {
			SerializeError::Attribute { resource_type, .. }
			| SerializeError::Relationship { resource_type, .. }
			| SerializeError::Lookup { resource_type, .. }
			| SerializeError::Identity { resource_type, .. }
			| SerializeError::Meta { resource_type, .. }
			| SerializeError::SelfLink { resource_type, .. } => resource_type,
		}
	}

	/// Attribute or relationship name, for field-level failures
	pub fn field(&self) -> Option<&str> {
		match self {
			SerializeError::Attribute { attribute, .. } => Some(attribute),
			SerializeError::Relationship { relationship, .. }
			| SerializeError::Lookup { relationship, .. } => Some(relationship),
			_ => None,
		}
	}

	/// The underlying value source failure, if that is what failed
	pub fn as_field_error(&self) -> Option<&FieldError> {
		match self {
			SerializeError::Attribute { source, .. }
			| SerializeError::Relationship { source, .. }
			| SerializeError::Identity { source, .. }
			| SerializeError::Meta { source, .. }
			| SerializeError::SelfLink { source, .. } => Some(source),
			SerializeError::Lookup { .. } => None,
		}
	}

	/// The underlying lookup failure, if that is what failed
	pub fn as_lookup_error(&self) -> Option<&LookupError> {
		match self {
			SerializeError::Lookup { source, .. } => Some(source),
			_ => None,
		}
	}

	pub fn is_ambiguous_lookup(&self) -> bool {
		self.as_lookup_error().is_some_and(LookupError::is_ambiguous)
	}
}
