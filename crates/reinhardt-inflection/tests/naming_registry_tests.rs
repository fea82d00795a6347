//! Naming registry integration tests
//!
//! Covers the process-wide registry and concurrent readers racing a
//! configuration switch.

use reinhardt_inflection::{
	KeyTransform, NamingConfig, NamingRegistry, format_name, resource_type, unformat_name,
};
use rstest::*;
use serial_test::serial;
use std::sync::Arc;
use std::thread;

#[rstest]
#[serial(naming)]
fn test_global_registry_defaults_to_dash() {
	NamingRegistry::global().reset();

	assert_eq!(&*format_name("first_name"), "first-name");
	assert_eq!(&*unformat_name("first-name"), "first_name");
	assert_eq!(&*resource_type("MyApp::LongComment"), "long-comments");
}

#[rstest]
#[serial(naming)]
fn test_global_configure_invalidates_cached_names() {
	let registry = NamingRegistry::global();
	registry.reset();
	assert_eq!(&*format_name("created_at"), "created-at");

	registry.configure(NamingConfig::new(KeyTransform::CamelLower));
	assert_eq!(&*format_name("created_at"), "createdAt");
	assert_eq!(&*resource_type("BlogPost"), "blogPosts");

	registry.reset();
	assert_eq!(&*format_name("created_at"), "created-at");
}

#[rstest]
fn test_concurrent_readers_see_one_generation_per_snapshot() {
	let registry = Arc::new(NamingRegistry::new(NamingConfig::default()));

	let readers: Vec<_> = (0..4)
		.map(|_| {
			let registry = Arc::clone(&registry);
			thread::spawn(move || {
				for _ in 0..200 {
					let naming = registry.transformer();
					let wire = naming.format("first_name");
					let kind = naming.resource_type("LineItem");
					// Both values must come from the snapshot's own configuration
					match naming.config().key_transform {
						KeyTransform::Dash => {
							assert_eq!(&*wire, "first-name");
							assert_eq!(&*kind, "line-items");
						}
						KeyTransform::Underscore => {
							assert_eq!(&*wire, "first_name");
							assert_eq!(&*kind, "line_items");
						}
						other => panic!("unexpected transform {other}"),
					}
				}
			})
		})
		.collect();

	let writer = {
		let registry = Arc::clone(&registry);
		thread::spawn(move || {
			for round in 0..50 {
				let transform = if round % 2 == 0 {
					KeyTransform::Underscore
				} else {
					KeyTransform::Dash
				};
				registry.configure(NamingConfig::new(transform));
			}
		})
	};

	writer.join().unwrap();
	for reader in readers {
		reader.join().unwrap();
	}
	assert_eq!(registry.generation(), 50);
}
