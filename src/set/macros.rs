/// Creates a [`Set`](crate::Set) containing the given elements.
///
/// Duplicate elements are collapsed. `set![]` creates an empty set whose
/// element type is inferred from context.
///
/// # Examples
///
/// ```
/// use setkit::{Set, set};
///
/// let letters = set!["a", "b", "c", "a"];
/// assert_eq!(letters.len(), 3);
///
/// let empty: Set<i32> = set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };

    ($($element:expr),+ $(,)?) => {
        $crate::Set::from_elements([$($element),+])
    };
}
