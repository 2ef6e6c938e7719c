use core::fmt;

/// Any error related to `DynList` operations
#[derive(Debug, PartialEq)]
pub enum ListError {
  /// An index argument is outside the valid range of the requested operation
  ///
  /// ```rust
  /// use dynlist::list::{DynList, ListError};
  /// let mut list = DynList::<i32>::new();
  /// assert_eq!(list.get(0), Err(dynlist::Error::List(ListError::IndexOutOfRange)));
  /// assert_eq!(list.set(0, 1), Err(dynlist::Error::List(ListError::IndexOutOfRange)));
  /// assert_eq!(list.insert(1, 1), Err(dynlist::Error::List(ListError::IndexOutOfRange)));
  /// assert_eq!(list.remove_at(0), Err(dynlist::Error::List(ListError::IndexOutOfRange)));
  /// ```
  IndexOutOfRange,

  /// `copy_to` was called without a destination
  ///
  /// ```rust
  /// use dynlist::{doc_tests::digits_list, list::ListError};
  /// let outcome = digits_list().copy_to(None, 0);
  /// assert_eq!(outcome, Err(dynlist::Error::List(ListError::NullDestination)));
  /// ```
  NullDestination,

  /// `copy_to` was called with a negative destination offset
  ///
  /// ```rust
  /// use dynlist::{doc_tests::digits_list, list::ListError};
  /// let mut destination = [0; 10];
  /// let outcome = digits_list().copy_to(Some(&mut destination), -1);
  /// assert_eq!(outcome, Err(dynlist::Error::List(ListError::OffsetOutOfRange)));
  /// ```
  OffsetOutOfRange,

  /// The destination can't hold all live elements from the given offset onwards
  ///
  /// ```rust
  /// use dynlist::{doc_tests::digits_list, list::ListError};
  /// let mut destination = [0; 10];
  /// let outcome = digits_list().copy_to(Some(&mut destination), 1);
  /// assert_eq!(outcome, Err(dynlist::Error::List(ListError::InsufficientSpace)));
  /// ```
  InsufficientSpace,
}

impl fmt::Display for ListError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      Self::IndexOutOfRange => "IndexOutOfRange",
      Self::NullDestination => "NullDestination",
      Self::OffsetOutOfRange => "OffsetOutOfRange",
      Self::InsufficientSpace => "InsufficientSpace",
    };
    write!(f, "{}", s)
  }
}

#[cfg(feature = "std")]
impl std::error::Error for ListError {}
