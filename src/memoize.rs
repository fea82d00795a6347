//! Memoizing delegation module.
//!
//! # Examples
//!
//! ```rust
//! use reinhardt_jsonapi::memoize::Memoized;
//!
//! let proxy = Memoized::new(vec![3, 1, 2]);
//! let max = proxy.call("max", (), |values, _| values.iter().copied().max());
//! assert_eq!(max, Some(3));
//! assert_eq!(proxy.misses(), 1);
//! ```

pub use reinhardt_memoize::*;
