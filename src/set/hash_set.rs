//! Mutable hash set.
//!
//! This module provides [`Set`], a collection of unique elements that
//! wraps `HashMap<T, (), S>`. The unit value is only a presence marker,
//! so every operation reduces to key lookups and traversals of the map.
//!
//! - O(1) expected `contains`, `insert` and `remove`
//! - O(1) `len` and `is_empty`
//! - O(min(n, m)) `intersection` and `is_disjoint`
//!
//! All algebraic operations return new sets without modifying their
//! operands.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::Iter;

// =============================================================================
// Set Definition
// =============================================================================

/// An unordered collection of unique elements.
///
/// `Set` is backed by a `HashMap<T, (), S>`, where `S` is the hash
/// strategy. The default strategy is [`RandomState`]; any other
/// [`BuildHasher`] can be supplied with [`Set::with_hasher`].
///
/// Iteration order is unspecified and may differ between two sets holding
/// the same elements. Equality only considers membership.
///
/// It is a logic error for an element to be modified in a way that changes
/// its hash or equality while it is in the set.
///
/// # Time Complexity
///
/// | Operation              | Complexity        |
/// |------------------------|-------------------|
/// | `new`                  | O(1)              |
/// | `from_elements`        | O(n)              |
/// | `contains`             | O(1)*             |
/// | `insert`               | O(1)**            |
/// | `remove`               | O(1)*             |
/// | `contains_all`         | O(k)              |
/// | `contains_any`         | O(k)              |
/// | `len`                  | O(1)              |
/// | `clear`                | O(n)              |
/// | `clone`                | O(n)              |
/// | `==`                   | O(n)              |
/// | `to_vec`               | O(n)              |
/// | `union`                | O(n + m)          |
/// | `intersection`         | O(min(n, m))      |
/// | `difference`           | O(n)              |
/// | `symmetric_difference` | O(n + m)          |
/// | `is_subset`            | O(n)              |
///
/// \* Expected; degrades with hash collisions.
///
/// \** Amortized; inserting into a full table reallocates in O(n).
///
/// # Examples
///
/// ```rust
/// use setkit::Set;
///
/// let mut set = Set::new();
/// set.insert("apple");
/// set.insert("pear");
/// set.insert("apple");
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains("pear"));
/// ```
#[derive(Clone)]
pub struct Set<T, S = RandomState> {
    pub(super) inner: HashMap<T, (), S>,
}

static_assertions::assert_impl_all!(Set<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Set<String>: Send, Sync);
static_assertions::assert_not_impl_any!(Set<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Construction with the default hash strategy
// =============================================================================

impl<T> Set<T> {
    /// Creates a new empty set.
    ///
    /// No memory is allocated until the first insertion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    /// Creates an empty set able to hold at least `capacity` elements
    /// without reallocating.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashMap::with_capacity(capacity),
        }
    }
}

impl<T: Eq + Hash> Set<T> {
    /// Creates a set from a sequence of elements.
    ///
    /// Duplicates in the input are collapsed silently. An empty input
    /// produces an empty set.
    ///
    /// # Arguments
    ///
    /// * `elements` - The initial elements
    ///
    /// # Complexity
    ///
    /// O(n), where n is the number of provided elements
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set = Set::from_elements(["a", "b", "a", "c"]);
    /// assert_eq!(set.len(), 3);
    ///
    /// let empty: Set<i32> = Set::from_elements([]);
    /// assert!(empty.is_empty());
    /// ```
    #[must_use]
    pub fn from_elements<I: IntoIterator<Item = T>>(elements: I) -> Self {
        elements.into_iter().collect()
    }

    /// Creates a set containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set = Set::singleton(42);
    /// assert_eq!(set.len(), 1);
    /// assert!(set.contains(&42));
    /// ```
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut set = Self::with_capacity(1);
        set.insert(element);
        set
    }
}

// =============================================================================
// Strategy-independent operations
// =============================================================================

impl<T, S> Set<T, S> {
    /// Creates an empty set which hashes its elements with `hasher`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::hash_map::RandomState;
    /// use setkit::Set;
    ///
    /// let mut set = Set::with_hasher(RandomState::new());
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_hasher(hasher: S) -> Self {
        Self {
            inner: HashMap::with_hasher(hasher),
        }
    }

    /// Creates an empty set with room for `capacity` elements which hashes
    /// its elements with `hasher`.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            inner: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set = Set::from_elements([1, 2, 3]);
    /// assert_eq!(set.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements the set can hold without
    /// reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns a reference to the set's hash strategy.
    #[inline]
    #[must_use]
    pub fn hasher(&self) -> &S {
        self.inner.hasher()
    }

    /// Returns a read-only view over the elements of the set.
    ///
    /// The view borrows the set, so the set cannot be mutated while the
    /// view is alive. No order is guaranteed.
    ///
    /// # Complexity
    ///
    /// O(1) to obtain, O(n) to exhaust
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set = Set::from_elements([1, 2, 3]);
    /// let total: i32 = set.elements().sum();
    /// assert_eq!(total, 6);
    /// ```
    #[inline]
    #[must_use]
    pub fn elements(&self) -> Iter<'_, T> {
        Iter::new(self.inner.keys())
    }

    /// Returns an iterator over the elements of the set.
    ///
    /// Equivalent to [`Set::elements`].
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        self.elements()
    }

    /// Removes every element from the set.
    ///
    /// The allocated capacity is kept for reuse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let mut set = Set::from_elements([1, 2, 3]);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Consumes the set and returns its elements as a vector, in
    /// unspecified order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.inner.into_keys().collect()
    }
}

impl<T: Clone, S> Set<T, S> {
    /// Returns a vector containing each element of the set exactly once.
    ///
    /// The order of the vector is unspecified. Every call produces a new,
    /// independent vector.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set = Set::from_elements([3, 1, 2]);
    /// let mut elements = set.to_vec();
    /// elements.sort_unstable();
    /// assert_eq!(elements, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// Membership and mutation
// =============================================================================

impl<T: Eq + Hash, S: BuildHasher> Set<T, S> {
    /// Returns `true` if the set contains the specified element.
    ///
    /// The element may be any borrowed form of the set's element type,
    /// but `Hash` and `Eq` on the borrowed form must match those for
    /// the element type.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to check for
    ///
    /// # Complexity
    ///
    /// O(1) expected
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set = Set::from_elements(["hello".to_string(), "world".to_string()]);
    ///
    /// // Can use &str to look up String elements
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("other"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(element)
    }

    /// Adds an element to the set.
    ///
    /// Returns `true` if the element was newly inserted, `false` if it was
    /// already present. An element that is already present is left
    /// untouched.
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.insert(1));   // New element
    /// assert!(!set.insert(1));  // Already exists
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        // An existing key is kept as-is; only the unit marker is replaced.
        self.inner.insert(element, ()).is_none()
    }

    /// Removes an element from the set.
    ///
    /// Returns `true` if the element was present. Removing an element that
    /// is not in the set is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let mut set = Set::from_elements([1, 2]);
    /// assert!(set.remove(&1));   // Was present
    /// assert!(!set.remove(&1));  // Already removed
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(element).is_some()
    }

    /// Returns `true` if every given element is in the set.
    ///
    /// Vacuously `true` for an empty input. Stops at the first missing
    /// element.
    ///
    /// # Complexity
    ///
    /// O(k), where k is the number of given elements
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set = Set::from_elements([1, 2, 3]);
    /// assert!(set.contains_all(&[1, 3]));
    /// assert!(!set.contains_all(&[1, 4]));
    /// ```
    #[must_use]
    pub fn contains_all<'a, I>(&self, elements: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        elements.into_iter().all(|element| self.contains(element))
    }

    /// Returns `true` if at least one given element is in the set.
    ///
    /// Vacuously `false` for an empty input. Stops at the first element
    /// found.
    ///
    /// # Complexity
    ///
    /// O(k), where k is the number of given elements
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set = Set::from_elements([1, 2, 3]);
    /// assert!(set.contains_any(&[4, 3]));
    /// assert!(!set.contains_any(&[4, 5]));
    /// ```
    #[must_use]
    pub fn contains_any<'a, I>(&self, elements: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        elements.into_iter().any(|element| self.contains(element))
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.inner.reserve(additional);
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let mut set = Set::from_elements(1..=6);
    /// set.retain(|element| element % 2 == 0);
    /// assert_eq!(set, Set::from_elements([2, 4, 6]));
    /// ```
    pub fn retain<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.inner.retain(|element, _| predicate(element));
    }

    /// Returns `true` if `self` is a subset of `other`.
    ///
    /// Every set is a subset of itself, and the empty set is a subset of
    /// every set. A receiver larger than `other` is rejected without
    /// scanning.
    ///
    /// # Arguments
    ///
    /// * `other` - The potential superset
    ///
    /// # Complexity
    ///
    /// O(n), where n = `self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let subset = Set::from_elements(["x"]);
    /// let superset = Set::from_elements(["x", "y"]);
    ///
    /// assert!(subset.is_subset(&superset));
    /// assert!(!superset.is_subset(&subset));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }

        self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if `self` is a superset of `other`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    ///
    /// # Complexity
    ///
    /// O(min(n, m))
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set_a = Set::from_elements([1, 2]);
    /// let set_b = Set::from_elements([3, 4]);
    /// let set_c = Set::from_elements([2, 3]);
    ///
    /// assert!(set_a.is_disjoint(&set_b));
    /// assert!(!set_a.is_disjoint(&set_c));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (smaller, larger) = smaller_first(self, other);
        !smaller.iter().any(|element| larger.contains(element))
    }
}

// =============================================================================
// Set algebra
// =============================================================================

impl<T: Eq + Hash + Clone, S: BuildHasher + Clone> Set<T, S> {
    /// Returns the union of two sets.
    ///
    /// The union contains all elements that are in either set. The result
    /// uses a copy of `self`'s hash strategy.
    ///
    /// # Arguments
    ///
    /// * `other` - The other set to union with
    ///
    /// # Complexity
    ///
    /// O(n + m) where n and m are the sizes of the two sets
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set_a = Set::from_elements([1, 2]);
    /// let set_b = Set::from_elements([2, 3]);
    ///
    /// assert_eq!(set_a.union(&set_b), Set::from_elements([1, 2, 3]));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for element in other {
            if !result.contains(element) {
                result.inner.insert(element.clone(), ());
            }
        }
        result
    }

    /// Returns the intersection of two sets.
    ///
    /// The intersection contains only elements that are in both sets. The
    /// smaller operand is traversed and the larger one probed, so the cost
    /// depends only on the smaller set.
    ///
    /// # Arguments
    ///
    /// * `other` - The other set to intersect with
    ///
    /// # Complexity
    ///
    /// O(min(n, m))
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set_a = Set::from_elements([1, 2, 3]);
    /// let set_b = Set::from_elements([2, 3, 4]);
    ///
    /// assert_eq!(set_a.intersection(&set_b), Set::from_elements([2, 3]));
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (smaller, larger) = smaller_first(self, other);

        let mut result = Self::with_capacity_and_hasher(smaller.len(), self.hasher().clone());
        for element in smaller {
            if larger.contains(element) {
                result.inner.insert(element.clone(), ());
            }
        }
        result
    }

    /// Returns the difference of two sets.
    ///
    /// The difference contains elements that are in `self` but not in
    /// `other`. Only `self` is traversed.
    ///
    /// # Arguments
    ///
    /// * `other` - The set to subtract
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set_a = Set::from_elements([1, 2, 3]);
    /// let set_b = Set::from_elements([2, 3, 4]);
    ///
    /// assert_eq!(set_a.difference(&set_b), Set::from_elements([1]));
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = Self::with_hasher(self.hasher().clone());
        for element in self {
            if !other.contains(element) {
                result.inner.insert(element.clone(), ());
            }
        }
        result
    }

    /// Returns the symmetric difference of two sets.
    ///
    /// The symmetric difference contains elements that are in exactly one
    /// of the two sets. It always equals
    /// `self.union(other).difference(&self.intersection(other))`, but is
    /// built in a single pass over each operand.
    ///
    /// # Complexity
    ///
    /// O(n + m)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set_a = Set::from_elements([0, 2, 3]);
    /// let set_b = Set::from_elements([0, 1, 2]);
    ///
    /// assert_eq!(set_a.symmetric_difference(&set_b), Set::from_elements([3, 1]));
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        // (A \ B) ∪ (B \ A); the two halves never overlap.
        let mut result = self.difference(other);
        for element in other {
            if !self.contains(element) {
                result.inner.insert(element.clone(), ());
            }
        }
        result
    }

    /// Returns a new set with the elements for which `predicate` returns
    /// `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set = Set::from_elements(1..=5);
    /// let odd = set.filter(|element| element % 2 == 1);
    ///
    /// assert_eq!(odd, Set::from_elements([1, 3, 5]));
    /// assert_eq!(set.len(), 5); // Original unchanged
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut result = Self::with_hasher(self.hasher().clone());
        for element in self {
            if predicate(element) {
                result.inner.insert(element.clone(), ());
            }
        }
        result
    }
}

impl<T, S: BuildHasher + Clone> Set<T, S> {
    /// Returns a new set containing `function` applied to every element.
    ///
    /// Images that compare equal collapse into one element, so the result
    /// can be smaller than `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set = Set::from_elements([-2, -1, 1, 2, 3]);
    /// let magnitudes = set.map(|element: &i32| element.abs());
    ///
    /// assert_eq!(magnitudes, Set::from_elements([1, 2, 3]));
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, mut function: F) -> Set<U, S>
    where
        U: Eq + Hash,
        F: FnMut(&T) -> U,
    {
        let mut result = Set::with_capacity_and_hasher(self.len(), self.hasher().clone());
        for element in self {
            result.insert(function(element));
        }
        result
    }
}

/// Orders two sets so that the first is the one with fewer elements.
fn smaller_first<'a, T, S>(
    left: &'a Set<T, S>,
    right: &'a Set<T, S>,
) -> (&'a Set<T, S>, &'a Set<T, S>) {
    if left.len() <= right.len() {
        (left, right)
    } else {
        (right, left)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: Default> Default for Set<T, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: Eq + Hash, S: BuildHasher + Default> FromIterator<T> for Set<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_elements(elements)
    }
}

impl<T: Eq + Hash, S: BuildHasher> Extend<T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter.into_iter().map(|element| (element, ())));
    }
}

impl<'a, T: Eq + Hash + Copy + 'a, S: BuildHasher> Extend<&'a T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Eq + Hash, S: BuildHasher> PartialEq for Set<T, S> {
    /// Two sets are equal when they hold the same elements. Sizes are
    /// compared first; only sets of equal size are scanned.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Eq + Hash, S: BuildHasher> Eq for Set<T, S> {}

impl<T: fmt::Debug, S> fmt::Debug for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Tests
// =============================================================================
