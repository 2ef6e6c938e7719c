use crate::list::ListError;
use core::fmt;

/// Contains all errors related to dynlist
#[derive(Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
  /// ListError
  List(ListError),
}

impl fmt::Display for Error {
  #[inline]
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::List(ref x) => write!(f, "List({})", x),
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<ListError> for Error {
  #[inline]
  fn from(f: ListError) -> Self {
    Self::List(f)
  }
}
