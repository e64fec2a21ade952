//! # setkit
//!
//! A mutable, unordered hash set with value semantics and a complete
//! set-algebra API.
//!
//! ## Overview
//!
//! The crate is built around a single type, [`Set`], which stores unique
//! elements of any `Eq + Hash` type in a `HashMap<T, ()>`. On top of the
//! expected O(1) membership, insertion and removal it provides:
//!
//! - **Bulk queries**: [`Set::contains_all`], [`Set::contains_any`]
//! - **Set algebra**: union, intersection, difference and symmetric
//!   difference, each returning a freshly allocated set
//! - **Relations**: subset, superset and disjointness tests
//! - **Transformations**: [`Set::filter`], [`Set::map`], [`Set::retain`]
//! - **Conversions**: [`Set::to_vec`], [`Set::into_vec`], [`FromIterator`],
//!   the [`set!`] macro
//!
//! Iteration order is unspecified and must not be relied upon.
//!
//! ## Feature Flags
//!
//! - `fxhash`: `FxSet`, a set hashed with `rustc-hash`
//! - `ahash`: `AHashSet`, a set hashed with `ahash`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use setkit::prelude::*;
//!
//! let primes = set![2, 3, 5, 7];
//! let odds = set![1, 3, 5, 7, 9];
//!
//! assert_eq!(primes.intersection(&odds), set![3, 5, 7]);
//! assert_eq!(primes.difference(&odds), set![2]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the set type, its iterators and the [`set!`] macro.
///
/// # Usage
///
/// ```rust
/// use setkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set;
    pub use crate::set::*;
}

pub mod set;

#[doc(inline)]
pub use set::Set;
