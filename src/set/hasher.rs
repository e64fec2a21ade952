//! Sets hashed with faster, non-default strategies.
//!
//! Both strategies trade the HashDoS resistance of the standard
//! `RandomState` for speed. Only use them for trusted input.

use super::Set;

/// A [`Set`] hashed with `rustc-hash`'s `FxHasher`.
///
/// # Examples
///
/// ```rust
/// use setkit::set::FxSet;
///
/// let mut set = FxSet::default();
/// set.insert("fast");
/// assert!(set.contains("fast"));
/// ```
#[cfg(feature = "fxhash")]
pub type FxSet<T> = Set<T, rustc_hash::FxBuildHasher>;

/// A [`Set`] hashed with `ahash`.
///
/// # Examples
///
/// ```rust
/// use setkit::set::AHashSet;
///
/// let set: AHashSet<i32> = (0..10).collect();
/// assert_eq!(set.len(), 10);
/// ```
#[cfg(feature = "ahash")]
pub type AHashSet<T> = Set<T, ahash::RandomState>;
