//! Operator forms of the set algebra.
//!
//! Each operator takes both operands by reference and returns a new
//! [`Set`]:
//!
//! | Operator | Method                       |
//! |----------|------------------------------|
//! | `&a \| &b` | [`Set::union`]               |
//! | `&a & &b`  | [`Set::intersection`]        |
//! | `&a - &b`  | [`Set::difference`]          |
//! | `&a ^ &b`  | [`Set::symmetric_difference`] |

use std::hash::{BuildHasher, Hash};
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use super::Set;

impl<T: Eq + Hash + Clone, S: BuildHasher + Clone> BitOr for &Set<T, S> {
    type Output = Set<T, S>;

    /// ```rust
    /// use setkit::Set;
    ///
    /// let set_a = Set::from_elements([1, 2]);
    /// let set_b = Set::from_elements([2, 3]);
    /// assert_eq!(&set_a | &set_b, Set::from_elements([1, 2, 3]));
    /// ```
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T: Eq + Hash + Clone, S: BuildHasher + Clone> BitAnd for &Set<T, S> {
    type Output = Set<T, S>;

    /// ```rust
    /// use setkit::Set;
    ///
    /// let set_a = Set::from_elements([1, 2]);
    /// let set_b = Set::from_elements([2, 3]);
    /// assert_eq!(&set_a & &set_b, Set::from_elements([2]));
    /// ```
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T: Eq + Hash + Clone, S: BuildHasher + Clone> Sub for &Set<T, S> {
    type Output = Set<T, S>;

    /// ```rust
    /// use setkit::Set;
    ///
    /// let set_a = Set::from_elements([1, 2]);
    /// let set_b = Set::from_elements([2, 3]);
    /// assert_eq!(&set_a - &set_b, Set::from_elements([1]));
    /// ```
    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl<T: Eq + Hash + Clone, S: BuildHasher + Clone> BitXor for &Set<T, S> {
    type Output = Set<T, S>;

    /// ```rust
    /// use setkit::Set;
    ///
    /// let set_a = Set::from_elements([1, 2]);
    /// let set_b = Set::from_elements([2, 3]);
    /// assert_eq!(&set_a ^ &set_b, Set::from_elements([1, 3]));
    /// ```
    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}
