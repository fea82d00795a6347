//! Resource serialization module.
//!
//! This module provides resource schemas, the serializer assembling JSON:API
//! resource objects, and the related-object lookup.
//!
//! # Examples
//!
//! ```rust,no_run
//! use reinhardt_jsonapi::serializers::{ResourceSchema, ResourceSerializer, SerializeOptions};
//! ```

pub use reinhardt_jsonapi_serializers::*;
