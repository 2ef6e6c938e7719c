//! Instances for documentation tests

use crate::list::DynList;

/// A list holding the digits 0 up to 9.
///
/// ```rust
/// use dynlist::doc_tests::digits_list;
/// assert_eq!(digits_list().len(), 10);
/// ```
pub fn digits_list() -> DynList<i32> {
  (0..10).collect()
}

/// A list of optional values with an absent value in the middle.
///
/// ```rust
/// use dynlist::doc_tests::option_list;
/// assert_eq!(option_list().as_slice(), &[Some(1), None, Some(3)]);
/// ```
pub fn option_list() -> DynList<Option<i32>> {
  [Some(1), None, Some(3)].iter().copied().collect()
}
