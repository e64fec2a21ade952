//! Mutable hash set and its supporting types.
//!
//! This module provides [`Set`], an unordered collection of unique
//! elements backed by `HashMap<T, (), S>`:
//!
//! - [`Set`]: the set itself
//! - [`Iter`] / [`IntoIter`]: borrowed and owned iteration
//! - [`set!`](crate::set!): literal construction
//! - `FxSet` / `AHashSet`: aliases using faster hash strategies (behind the
//!   `fxhash` and `ahash` features)
//!
//! # Value Semantics
//!
//! Every algebraic operation returns a freshly allocated set. Operands are
//! never modified and the result never shares storage with them.
//!
//! ```rust
//! use setkit::Set;
//!
//! let left: Set<i32> = [1, 2].into_iter().collect();
//! let right: Set<i32> = [2, 3].into_iter().collect();
//!
//! let mut union = left.union(&right);
//! union.insert(4);
//!
//! assert_eq!(union.len(), 4);
//! assert_eq!(left.len(), 2);  // Operand unchanged
//! assert_eq!(right.len(), 2); // Operand unchanged
//! ```
//!
//! # Concurrency
//!
//! [`Set`] carries no internal synchronization. It is `Send` and `Sync`
//! whenever its element and hasher types are, so a shared set that needs
//! mutation from several threads must be guarded by a mutex.

mod hash_set;
mod iter;
mod macros;
mod ops;

#[cfg(any(feature = "fxhash", feature = "ahash"))]
mod hasher;

pub use hash_set::Set;
pub use iter::{IntoIter, Iter};

#[cfg(feature = "ahash")]
pub use hasher::AHashSet;
#[cfg(feature = "fxhash")]
pub use hasher::FxSet;
