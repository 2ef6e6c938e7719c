//! Collection capabilities.
//!
//! Each trait carries one capability of the "standard mutable indexable collection" contract,
//! so a caller can require exactly the capabilities it needs and accept anything that provides
//! them, `DynList` or otherwise.
//!
//! # Example
//!
//! ```rust
//! use dynlist::{collection::Push, list::DynList};
//! fn fill<S>(storage: &mut S)
//! where
//!   S: Push<Input = i32>,
//! {
//!   storage.push(1);
//!   storage.push(2);
//! }
//! let mut list = DynList::new();
//! let mut vec = Vec::new();
//! fill(&mut list);
//! fill(&mut vec);
//! assert_eq!(list.as_slice(), &vec[..]);
//! ```

use alloc::vec::Vec;

/// Anything that can report the total number of slots it has allocated.
pub trait Capacity {
  /// Capacity
  fn capacity(&self) -> usize;
}

/// Anything that can discard all of its elements at once.
pub trait Clear {
  /// Clear
  fn clear(&mut self);
}

/// Anything that can report the number of elements it currently holds.
pub trait Length {
  /// Length
  fn length(&self) -> usize;

  /// Whether there are no elements.
  #[inline]
  fn is_empty(&self) -> bool {
    self.length() == 0
  }
}

/// Anything that can receive an additional element at its end.
pub trait Push {
  /// Input
  type Input;

  /// Push
  fn push(&mut self, input: Self::Input);
}

/// Anything that can be created with an initial capacity.
pub trait WithCapacity {
  /// Input
  type Input;

  /// With capacity
  fn with_capacity(input: Self::Input) -> Self;
}

impl<T> Capacity for Vec<T> {
  #[inline]
  fn capacity(&self) -> usize {
    self.capacity()
  }
}

impl<T> Clear for Vec<T> {
  #[inline]
  fn clear(&mut self) {
    self.clear()
  }
}

impl<T> Length for Vec<T> {
  #[inline]
  fn length(&self) -> usize {
    self.len()
  }
}

impl<T> Push for Vec<T> {
  type Input = T;

  #[inline]
  fn push(&mut self, input: Self::Input) {
    self.push(input)
  }
}

impl<T> WithCapacity for Vec<T> {
  type Input = usize;

  #[inline]
  fn with_capacity(input: Self::Input) -> Self {
    Self::with_capacity(input)
  }
}
