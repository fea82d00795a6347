//! Wire naming module.
//!
//! Key transforms, inflector helpers and the process-wide naming registry.
//!
//! # Examples
//!
//! ```rust
//! use reinhardt_jsonapi::inflection::{KeyTransform, transform_key_casing};
//!
//! assert_eq!(transform_key_casing("created_at", KeyTransform::CamelLower), "createdAt");
//! ```

pub use reinhardt_inflection::*;
