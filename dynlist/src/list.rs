//! Growable array list.
//!
//! A mutable ordered sequence stored in one contiguous heap block. The block is reallocated
//! with twice the previous capacity whenever an insertion would overflow it and never shrinks.

mod list_error;
mod list_iter;
#[cfg(test)]
mod list_quickcheck;
#[cfg(feature = "with-rand")]
mod list_rnd;
#[cfg(feature = "with-serde")]
mod list_serde;

use crate::{
  collection::{Capacity, Clear, Length, Push, WithCapacity},
  utils::default_slots,
};
use alloc::boxed::Box;
use core::{fmt, iter::FromIterator, mem};
pub use list_error::*;
pub use list_iter::*;

const DEFAULT_CAPACITY: usize = 4;
const GROWTH_FACTOR: usize = 2;

/// A growable array list.
///
/// Live elements occupy `items[0..count]` in insertion/positional order. The remaining slots
/// hold `T::default()` values and are not part of the sequence, which is why most operations
/// require `T: Default`.
///
/// # Example
///
/// ```rust
/// use dynlist::list::DynList;
/// let mut list = DynList::new();
/// list.append(1);
/// list.append(2);
/// list.insert(1, 3)?;
/// assert_eq!(list.as_slice(), &[1, 3, 2]);
/// # Ok::<(), dynlist::Error>(())
/// ```
#[derive(Clone)]
pub struct DynList<T> {
  count: usize,
  items: Box<[T]>,
}

impl<T> DynList<T>
where
  T: Default,
{
  /// Creates an empty instance with the default capacity of 4.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynlist::list::DynList;
  /// let list = DynList::<i32>::new();
  /// assert_eq!(list.len(), 0);
  /// assert_eq!(list.capacity(), 4);
  /// ```
  pub fn new() -> Self {
    Self::with_capacity(DEFAULT_CAPACITY)
  }

  /// Creates an empty instance with an explicit capacity, which may be zero.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynlist::list::DynList;
  /// let list = DynList::<i32>::with_capacity(0);
  /// assert_eq!(list.capacity(), 0);
  /// ```
  pub fn with_capacity(capacity: usize) -> Self {
    Self { count: 0, items: default_slots(capacity) }
  }

  /// Places `value` after the last live element, enlarging the storage beforehand when full.
  ///
  /// Amortized O(1); O(n) on a growth event.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynlist::list::DynList;
  /// let mut list = DynList::new();
  /// list.append(3);
  /// list.append(7);
  /// assert_eq!(list.as_slice(), &[3, 7]);
  /// ```
  pub fn append(&mut self, value: T) {
    if self.count == self.items.len() {
      self.enlarge();
    }
    self.items[self.count] = value;
    self.count += 1;
  }

  /// Resets all live slots to `T::default()`, dropping the previous values, and sets the
  /// length to zero. The capacity is unchanged.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynlist::doc_tests::digits_list;
  /// let mut list = digits_list();
  /// let capacity = list.capacity();
  /// list.clear();
  /// assert!(list.is_empty());
  /// assert_eq!(list.capacity(), capacity);
  /// ```
  pub fn clear(&mut self) {
    for slot in self.items.iter_mut().take(self.count) {
      *slot = T::default();
    }
    self.count = 0;
  }

  /// Places `value` at `index`, shifting the elements at `[index, len)` one slot to the
  /// right. `index == len` is valid and behaves like [`append`](#method.append).
  ///
  /// O(n) due to shifting.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynlist::{doc_tests::digits_list, list::ListError};
  /// let mut list = digits_list();
  /// assert_eq!(list.insert(5, 1618), Ok(()));
  /// assert_eq!(list.as_slice(), &[0, 1, 2, 3, 4, 1618, 5, 6, 7, 8, 9]);
  /// assert_eq!(list.insert(100, 0), Err(ListError::IndexOutOfRange.into()));
  /// ```
  pub fn insert(&mut self, index: usize, value: T) -> crate::Result<()> {
    if index > self.count {
      return Err(ListError::IndexOutOfRange.into());
    }
    if self.count == self.items.len() {
      self.enlarge();
    }
    self.items[index..=self.count].rotate_right(1);
    self.items[index] = value;
    self.count += 1;
    Ok(())
  }

  /// Removes the element at `index`, shifting the elements at `(index, len)` one slot to the
  /// left and resetting the vacated slot to `T::default()`.
  ///
  /// O(n) due to shifting.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynlist::{doc_tests::digits_list, list::ListError};
  /// let mut list = digits_list();
  /// assert_eq!(list.remove_at(0), Ok(()));
  /// assert_eq!(list.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
  /// assert_eq!(list.remove_at(9), Err(ListError::IndexOutOfRange.into()));
  /// ```
  pub fn remove_at(&mut self, index: usize) -> crate::Result<()> {
    if index >= self.count {
      return Err(ListError::IndexOutOfRange.into());
    }
    self.items[index..self.count].rotate_left(1);
    self.count -= 1;
    self.items[self.count] = T::default();
    Ok(())
  }

  fn enlarge(&mut self) {
    // max(1, ..) guarantees forward progress from a zero capacity
    let new_capacity = self.items.len().saturating_mul(GROWTH_FACTOR).max(1);
    let mut items = default_slots(new_capacity);
    for (new_slot, old_slot) in items.iter_mut().zip(self.items.iter_mut().take(self.count)) {
      *new_slot = mem::take(old_slot);
    }
    self.items = items;
  }
}

impl<T> DynList<T>
where
  T: Default + PartialEq,
{
  /// Removes the first live element equal to `value`, returning whether one was found.
  ///
  /// Absence is a normal negative outcome, not an error.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynlist::doc_tests::digits_list;
  /// let mut list = digits_list();
  /// assert!(list.remove(&4));
  /// assert!(!list.remove(&4));
  /// assert_eq!(list.as_slice(), &[0, 1, 2, 3, 5, 6, 7, 8, 9]);
  /// ```
  pub fn remove(&mut self, value: &T) -> bool {
    match self.index_of(value) {
      Some(index) => self.remove_at(index).is_ok(),
      None => false,
    }
  }
}

impl<T> DynList<T> {
  /// A view of the live elements.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynlist::doc_tests::digits_list;
  /// assert_eq!(digits_list().as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
  /// ```
  #[inline]
  pub fn as_slice(&self) -> &[T] {
    &self.items[..self.count]
  }

  /// Total number of allocated slots, live or not.
  #[inline]
  pub fn capacity(&self) -> usize {
    self.items.len()
  }

  /// An immutable reference to the element at `index`.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynlist::{doc_tests::digits_list, list::ListError};
  /// let list = digits_list();
  /// assert_eq!(list.get(3), Ok(&3));
  /// assert_eq!(list.get(10), Err(ListError::IndexOutOfRange.into()));
  /// ```
  pub fn get(&self, index: usize) -> crate::Result<&T> {
    self.as_slice().get(index).ok_or_else(|| ListError::IndexOutOfRange.into())
  }

  /// Mutable version of [`get`](#method.get).
  pub fn get_mut(&mut self, index: usize) -> crate::Result<&mut T> {
    let count = self.count;
    self.items[..count].get_mut(index).ok_or_else(|| ListError::IndexOutOfRange.into())
  }

  /// Whether there are no live elements.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.count == 0
  }

  /// Always `false`. Present only to fulfill the mutable-collection capability contract.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynlist::list::DynList;
  /// assert!(!DynList::<i32>::new().is_read_only());
  /// ```
  #[inline]
  pub const fn is_read_only(&self) -> bool {
    false
  }

  /// A fresh, lazy and finite traversal of the live elements in order.
  ///
  /// Every call restarts from the first element. Traversal borrows the list, so the sequence
  /// observed by an iterator can not be mutated out from under it.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynlist::doc_tests::digits_list;
  /// let list = digits_list();
  /// assert_eq!(list.iter().copied().sum::<i32>(), 45);
  /// assert_eq!(list.iter().next(), Some(&0));
  /// ```
  #[inline]
  pub fn iter(&self) -> ListIter<'_, T> {
    ListIter::new(self.as_slice())
  }

  /// Number of live elements.
  #[inline]
  pub fn len(&self) -> usize {
    self.count
  }

  /// Overwrites the element at `index` with `value` in place.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynlist::doc_tests::digits_list;
  /// let mut list = digits_list();
  /// assert_eq!(list.set(2, -1), Ok(()));
  /// assert_eq!(list.get(2), Ok(&-1));
  /// ```
  pub fn set(&mut self, index: usize, value: T) -> crate::Result<()> {
    *self.get_mut(index)? = value;
    Ok(())
  }
}

impl<T> DynList<T>
where
  T: PartialEq,
{
  /// Whether any live element equals `value`, established by a linear scan.
  ///
  /// The scan is correct regardless of element order. For element types like `Option<U>` an
  /// absent query matches only absent stored values, which `PartialEq` already guarantees.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynlist::doc_tests::digits_list;
  /// let list = digits_list();
  /// assert!(list.contains(&7));
  /// assert!(!list.contains(&10));
  /// ```
  pub fn contains(&self, value: &T) -> bool {
    self.index_of(value).is_some()
  }

  /// The index of the first live element equal to `value`, if any.
  ///
  /// O(n).
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynlist::doc_tests::option_list;
  /// let list = option_list();
  /// assert_eq!(list.index_of(&None), Some(1));
  /// assert_eq!(list.index_of(&Some(2)), None);
  /// ```
  pub fn index_of(&self, value: &T) -> Option<usize> {
    self.as_slice().iter().position(|item| item == value)
  }
}

impl<T> DynList<T>
where
  T: Ord,
{
  /// Ordered-search version of [`contains`](#method.contains).
  ///
  /// The live elements MUST be sorted in ascending order, otherwise false negatives are
  /// possible. Callers that can not uphold that precondition should use
  /// [`contains`](#method.contains), which never requires it.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynlist::doc_tests::digits_list;
  /// let list = digits_list();
  /// assert!(list.contains_sorted(&7));
  /// assert!(!list.contains_sorted(&10));
  /// ```
  pub fn contains_sorted(&self, value: &T) -> bool {
    self.as_slice().binary_search(value).is_ok()
  }
}

impl<T> DynList<T>
where
  T: Clone,
{
  /// Copies the live elements, in order, into `destination` starting at `destination_offset`.
  ///
  /// The source is untouched and all validation happens before the first write, so a failed
  /// call also leaves the destination untouched.
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynlist::{doc_tests::digits_list, list::ListError};
  /// let list = digits_list();
  /// let mut destination = [0; 12];
  /// assert_eq!(list.copy_to(Some(&mut destination), 2), Ok(()));
  /// assert_eq!(destination, [0, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
  /// assert_eq!(list.copy_to(None, 0), Err(ListError::NullDestination.into()));
  /// assert_eq!(
  ///   list.copy_to(Some(&mut destination), -3),
  ///   Err(ListError::OffsetOutOfRange.into())
  /// );
  /// assert_eq!(
  ///   list.copy_to(Some(&mut destination), 3),
  ///   Err(ListError::InsufficientSpace.into())
  /// );
  /// ```
  pub fn copy_to(
    &self,
    destination: Option<&mut [T]>,
    destination_offset: isize,
  ) -> crate::Result<()> {
    let destination = destination.ok_or(ListError::NullDestination)?;
    if destination_offset < 0 {
      return Err(ListError::OffsetOutOfRange.into());
    }
    let offset = destination_offset as usize;
    let has_room = destination.len().checked_sub(offset).map_or(false, |room| room >= self.count);
    if !has_room {
      return Err(ListError::InsufficientSpace.into());
    }
    destination[offset..offset + self.count].clone_from_slice(self.as_slice());
    Ok(())
  }
}

impl<T> Capacity for DynList<T> {
  #[inline]
  fn capacity(&self) -> usize {
    self.capacity()
  }
}

impl<T> Clear for DynList<T>
where
  T: Default,
{
  #[inline]
  fn clear(&mut self) {
    self.clear()
  }
}

impl<T> fmt::Debug for DynList<T>
where
  T: fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<T> Default for DynList<T>
where
  T: Default,
{
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Eq for DynList<T> where T: Eq {}

impl<T> Extend<T> for DynList<T>
where
  T: Default,
{
  fn extend<I>(&mut self, into_iter: I)
  where
    I: IntoIterator<Item = T>,
  {
    for value in into_iter {
      self.append(value);
    }
  }
}

impl<T> FromIterator<T> for DynList<T>
where
  T: Default,
{
  fn from_iter<I>(into_iter: I) -> Self
  where
    I: IntoIterator<Item = T>,
  {
    let iter = into_iter.into_iter();
    let mut list = Self::with_capacity(iter.size_hint().0);
    list.extend(iter);
    list
  }
}

impl<'a, T> IntoIterator for &'a DynList<T> {
  type IntoIter = ListIter<'a, T>;
  type Item = &'a T;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<T> Length for DynList<T> {
  #[inline]
  fn length(&self) -> usize {
    self.len()
  }
}

impl<T> PartialEq for DynList<T>
where
  T: PartialEq,
{
  fn eq(&self, other: &Self) -> bool {
    self.as_slice() == other.as_slice()
  }
}

impl<T> Push for DynList<T>
where
  T: Default,
{
  type Input = T;

  #[inline]
  fn push(&mut self, input: Self::Input) {
    self.append(input)
  }
}

impl<T> WithCapacity for DynList<T>
where
  T: Default,
{
  type Input = usize;

  #[inline]
  fn with_capacity(input: Self::Input) -> Self {
    Self::with_capacity(input)
  }
}
