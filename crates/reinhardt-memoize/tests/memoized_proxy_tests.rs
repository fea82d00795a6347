//! Memoized delegation tests
//!
//! Exercises the wrapper the way serializers use it: keyword-style argument
//! tuples, borrowed targets and many distinct calls.

use proptest::prelude::*;
use reinhardt_memoize::Memoized;
use rstest::*;
use std::cell::RefCell;
use std::collections::HashSet;

/// Target recording every invocation it receives
#[derive(Debug, Default)]
struct Recorder {
	calls: RefCell<Vec<(String, Option<(String, i32)>)>>,
}

impl Recorder {
	fn foo(&self, params: Option<&(String, i32)>) -> &'static str {
		self.calls
			.borrow_mut()
			.push(("foo".to_string(), params.cloned()));
		match params {
			None => "bar",
			Some(_) => "bar2",
		}
	}
}

#[rstest]
fn test_delegates_and_caches_per_argument_set() {
	let proxy = Memoized::new(Recorder::default());
	let params = Some(("1".to_string(), 2));

	assert_eq!(proxy.call("foo", None, |t, p: &Option<(String, i32)>| t.foo(p.as_ref())), "bar");
	assert_eq!(proxy.call("foo", None, |t, p: &Option<(String, i32)>| t.foo(p.as_ref())), "bar");
	assert_eq!(proxy.call("foo", params.clone(), |t, p| t.foo(p.as_ref())), "bar2");
	assert_eq!(proxy.call("foo", params, |t, p| t.foo(p.as_ref())), "bar2");

	let calls = proxy.target().calls.borrow();
	assert_eq!(calls.len(), 2);
	assert_eq!(calls[0], ("foo".to_string(), None));
	assert_eq!(calls[1], ("foo".to_string(), Some(("1".to_string(), 2))));
}

#[rstest]
fn test_wraps_borrowed_target() {
	let recorder = Recorder::default();
	{
		let proxy = Memoized::new(&recorder);
		proxy.call("foo", (), |t, _| t.foo(None));
		proxy.call("foo", (), |t, _| t.foo(None));
		// Identity of the wrapped value is reachable explicitly
		assert!(std::ptr::eq(*proxy.target(), &recorder));
	}
	assert_eq!(recorder.calls.borrow().len(), 1);
}

proptest! {
	/// Test: target invocations equal distinct argument count
	///
	/// Category: Property
	/// Verifies each distinct argument reaches the target exactly once.
	#[rstest]
	fn prop_invocations_match_distinct_arguments(args in prop::collection::vec(0u8..16, 0..64)) {
		let counter = RefCell::new(0usize);
		let proxy = Memoized::new(());

		for arg in &args {
			let value = proxy.call("square", *arg, |_, a| {
				*counter.borrow_mut() += 1;
				u32::from(*a) * u32::from(*a)
			});
			prop_assert_eq!(value, u32::from(*arg) * u32::from(*arg));
		}

		let distinct: HashSet<u8> = args.iter().copied().collect();
		prop_assert_eq!(*counter.borrow(), distinct.len());
		prop_assert_eq!(proxy.cached_calls(), distinct.len());
		prop_assert_eq!(proxy.hits() as usize, args.len() - distinct.len());
	}
}
