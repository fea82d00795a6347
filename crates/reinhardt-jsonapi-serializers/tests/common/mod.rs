//! Blog domain shared by the serializer integration tests.

#![allow(dead_code)]

use reinhardt_jsonapi_serializers::{FieldError, RelatedObject, Resource, ResourceIdentity};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

pub struct Person {
	pub id: i64,
	pub name: String,
	pub age: u32,
	pub email: String,
}

impl Person {
	pub fn new(id: i64, name: &str) -> Self {
		Self {
			id,
			name: name.to_string(),
			age: 30,
			email: format!("{}@example.com", name.to_lowercase()),
		}
	}
}

impl Resource for Person {
	fn identity(&self) -> ResourceIdentity {
		self.id.into()
	}

	fn class_name(&self) -> &str {
		"Person"
	}

	fn read_attribute(&self, method: &str) -> Result<Value, FieldError> {
		match method {
			"name" => Ok(json!(self.name)),
			"age" => Ok(json!(self.age)),
			"email" => Ok(json!(self.email)),
			other => Err(FieldError::unknown_method(self.class_name(), other)),
		}
	}
}

pub struct Comment {
	pub id: Uuid,
	pub body: String,
}

impl Resource for Comment {
	fn identity(&self) -> ResourceIdentity {
		self.id.into()
	}

	fn class_name(&self) -> &str {
		"Blog::LongComment"
	}

	fn read_attribute(&self, method: &str) -> Result<Value, FieldError> {
		match method {
			"body" => Ok(json!(self.body)),
			other => Err(FieldError::unknown_method(self.class_name(), other)),
		}
	}
}

pub struct Article {
	pub id: i64,
	pub title: String,
	pub body: String,
	pub author: Option<Arc<Person>>,
	pub comments: Vec<Arc<Comment>>,
	pub body_reads: AtomicUsize,
}

impl Article {
	pub fn new(id: i64, title: &str) -> Self {
		Self {
			id,
			title: title.to_string(),
			body: String::new(),
			author: None,
			comments: Vec::new(),
			body_reads: AtomicUsize::new(0),
		}
	}

	pub fn with_author(mut self, author: Person) -> Self {
		self.author = Some(Arc::new(author));
		self
	}

	pub fn with_body(mut self, body: &str) -> Self {
		self.body = body.to_string();
		self
	}

	pub fn with_comment(mut self, id: Uuid, body: &str) -> Self {
		self.comments.push(Arc::new(Comment {
			id,
			body: body.to_string(),
		}));
		self
	}

	pub fn body_reads(&self) -> usize {
		self.body_reads.load(Ordering::SeqCst)
	}
}

impl Resource for Article {
	fn identity(&self) -> ResourceIdentity {
		self.id.into()
	}

	fn class_name(&self) -> &str {
		"Article"
	}

	fn read_attribute(&self, method: &str) -> Result<Value, FieldError> {
		match method {
			"title" => Ok(json!(self.title)),
			"body" => {
				self.body_reads.fetch_add(1, Ordering::SeqCst);
				Ok(json!(self.body))
			}
			other => Err(FieldError::unknown_method(self.class_name(), other)),
		}
	}

	fn read_to_one(&self, method: &str) -> Result<Option<RelatedObject>, FieldError> {
		match method {
			"author" => Ok(self.author.clone().map(|author| author as RelatedObject)),
			other => Err(FieldError::unknown_method(self.class_name(), other)),
		}
	}

	fn read_to_many(&self, method: &str) -> Result<Option<Vec<RelatedObject>>, FieldError> {
		match method {
			"comments" => Ok(Some(
				self.comments
					.iter()
					.map(|comment| Arc::clone(comment) as RelatedObject)
					.collect(),
			)),
			"tags" => Ok(None),
			other => Err(FieldError::unknown_method(self.class_name(), other)),
		}
	}
}

/// Resource identified by a free-form string
pub struct Page {
	pub slug: String,
}

impl Resource for Page {
	fn identity(&self) -> ResourceIdentity {
		self.slug.as_str().into()
	}

	fn class_name(&self) -> &str {
		"Cms::StaticPage"
	}
}
