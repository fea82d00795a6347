//! Serializer settings loaded from TOML or JSON.
//!
//! ```toml
//! key_transform = "camel_lower"
//! base_url = "https://example.com/api"
//! ```

use crate::binding::SerializeOptions;
use reinhardt_inflection::{KeyTransform, NamingConfig, NamingRegistry};
use serde::{Deserialize, Serialize};

/// Errors raised while loading settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Invalid TOML settings: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("Invalid JSON settings: {0}")]
	Json(#[from] serde_json::Error),
}

/// Naming and link settings shared by all serializers.
///
/// # Examples
///
/// ```
/// use reinhardt_inflection::{KeyTransform, NamingRegistry};
/// use reinhardt_jsonapi_serializers::JsonApiSettings;
///
/// let settings = JsonApiSettings::from_toml_str(r#"
///     key_transform = "underscore"
///     base_url = "https://example.com"
/// "#).unwrap();
/// assert_eq!(settings.key_transform, KeyTransform::Underscore);
///
/// let registry = NamingRegistry::new(Default::default());
/// settings.apply_to(&registry);
/// assert_eq!(&*registry.transformer().format("firstName"), "first_name");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonApiSettings {
	pub key_transform: KeyTransform,
	pub base_url: Option<String>,
}

impl JsonApiSettings {
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(source)?)
	}

	pub fn from_json_str(source: &str) -> Result<Self, SettingsError> {
		Ok(serde_json::from_str(source)?)
	}

	pub fn naming_config(&self) -> NamingConfig {
		NamingConfig::new(self.key_transform)
	}

	/// Install the naming configuration in `registry`, returning the new generation
	pub fn apply_to(&self, registry: &NamingRegistry) -> u64 {
		registry.configure(self.naming_config())
	}

	/// Install the naming configuration in the global registry
	pub fn apply_global(&self) -> u64 {
		self.apply_to(NamingRegistry::global())
	}

	/// Call options carrying these settings' base URL
	pub fn serialize_options(&self) -> SerializeOptions {
		match &self.base_url {
			Some(base_url) => SerializeOptions::new().with_base_url(base_url.clone()),
			None => SerializeOptions::new(),
		}
	}
}
