use alloc::{boxed::Box, vec::Vec};

pub(crate) fn default_slots<T>(capacity: usize) -> Box<[T]>
where
  T: Default,
{
  let mut slots = Vec::with_capacity(capacity);
  slots.resize_with(capacity, T::default);
  slots.into_boxed_slice()
}
