//! Key transforms and naming configuration.

use crate::inflector::{convert_words, underscore};
use convert_case::Case;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Errors raised while interpreting naming configuration
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InflectionError {
	/// The key transform name is not one of the supported strategies
	#[error(
		"Unknown key transform '{0}' (expected one of: dash, underscore, camel, camel_lower, unaltered)"
	)]
	UnknownKeyTransform(String),
}

/// Casing applied to attribute, relationship and type names on the wire.
///
/// Follows the JSON:API naming recommendations by default (`dash`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyTransform {
	/// kebab-case: `first_name` -> `first-name`
	#[default]
	Dash,
	/// snake_case: `firstName` -> `first_name`
	Underscore,
	/// UpperCamelCase: `first_name` -> `FirstName`
	Camel,
	/// lowerCamelCase: `first_name` -> `firstName`
	CamelLower,
	/// Names are emitted exactly as declared
	Unaltered,
}

impl KeyTransform {
	/// Configuration name of this transform
	pub fn as_str(&self) -> &'static str {
		match self {
			KeyTransform::Dash => "dash",
			KeyTransform::Underscore => "underscore",
			KeyTransform::Camel => "camel",
			KeyTransform::CamelLower => "camel_lower",
			KeyTransform::Unaltered => "unaltered",
		}
	}
}

impl fmt::Display for KeyTransform {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for KeyTransform {
	type Err = InflectionError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"dash" => Ok(KeyTransform::Dash),
			"underscore" => Ok(KeyTransform::Underscore),
			"camel" => Ok(KeyTransform::Camel),
			"camel_lower" => Ok(KeyTransform::CamelLower),
			"unaltered" => Ok(KeyTransform::Unaltered),
			other => Err(InflectionError::UnknownKeyTransform(other.to_string())),
		}
	}
}

/// Apply a key transform to a name without any caching.
///
/// # Examples
///
/// ```rust
/// use reinhardt_inflection::{KeyTransform, transform_key_casing};
///
/// assert_eq!(transform_key_casing("first_name", KeyTransform::Dash), "first-name");
/// assert_eq!(transform_key_casing("first_name", KeyTransform::Camel), "FirstName");
/// assert_eq!(transform_key_casing("first_name", KeyTransform::CamelLower), "firstName");
/// assert_eq!(transform_key_casing("firstName", KeyTransform::Underscore), "first_name");
/// assert_eq!(transform_key_casing("first_name", KeyTransform::Unaltered), "first_name");
/// ```
pub fn transform_key_casing(name: &str, transform: KeyTransform) -> String {
	if name.is_empty() {
		return String::new();
	}
	match transform {
		KeyTransform::Dash => convert_words(name, Case::Kebab),
		KeyTransform::Underscore => underscore(name),
		KeyTransform::Camel => convert_words(name, Case::Pascal),
		KeyTransform::CamelLower => convert_words(name, Case::Camel),
		KeyTransform::Unaltered => name.to_string(),
	}
}

/// User supplied name formatting strategy.
///
/// A formatter that only overrides [`format`](NameFormatter::format) keeps
/// the default inverse (snake_case of the wire name). Provide
/// [`unformat`](NameFormatter::unformat) when the custom format is not
/// reversible that way.
pub trait NameFormatter: Send + Sync + fmt::Debug {
	/// Internal name -> wire name
	fn format(&self, name: &str) -> String;

	/// Wire name -> internal name, `None` to use the default inverse
	fn unformat(&self, _wire_name: &str) -> Option<String> {
		None
	}
}

/// Active naming strategy.
///
/// # Examples
///
/// ```rust
/// use reinhardt_inflection::{KeyTransform, NamingConfig};
///
/// let config: NamingConfig = serde_json::from_str(r#"{"key_transform":"camel_lower"}"#).unwrap();
/// assert_eq!(config.key_transform, KeyTransform::CamelLower);
/// assert_eq!(config.format_uncached("created_at"), "createdAt");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamingConfig {
	/// Built-in casing used when no custom formatter is installed
	#[serde(default)]
	pub key_transform: KeyTransform,

	/// Custom formatter taking precedence over `key_transform`
	#[serde(skip)]
	pub custom: Option<Arc<dyn NameFormatter>>,
}

impl NamingConfig {
	/// Create a configuration using one of the built-in transforms
	pub fn new(key_transform: KeyTransform) -> Self {
		Self {
			key_transform,
			custom: None,
		}
	}

	/// Install a custom formatter
	pub fn with_custom(mut self, formatter: Arc<dyn NameFormatter>) -> Self {
		self.custom = Some(formatter);
		self
	}

	/// Format a name under this configuration, bypassing every cache
	pub fn format_uncached(&self, name: &str) -> String {
		match &self.custom {
			Some(formatter) => formatter.format(name),
			None => transform_key_casing(name, self.key_transform),
		}
	}

	/// Reverse a wire name under this configuration, bypassing every cache.
	///
	/// Unaltered names are returned as-is; everything else is converted back
	/// to snake_case unless a custom inverse is provided.
	pub fn unformat_uncached(&self, wire_name: &str) -> String {
		if let Some(name) = self
			.custom
			.as_ref()
			.and_then(|formatter| formatter.unformat(wire_name))
		{
			return name;
		}
		if self.custom.is_none() && self.key_transform == KeyTransform::Unaltered {
			return wire_name.to_string();
		}
		underscore(wire_name)
	}
}
