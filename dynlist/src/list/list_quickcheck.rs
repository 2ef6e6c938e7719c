use crate::list::DynList;
use alloc::{vec, vec::Vec};

impl<T> quickcheck::Arbitrary for DynList<T>
where
  T: Default + quickcheck::Arbitrary,
{
  #[inline]
  fn arbitrary<G>(g: &mut G) -> Self
  where
    G: quickcheck::Gen,
  {
    Vec::<T>::arbitrary(g).into_iter().collect()
  }
}

#[quickcheck_macros::quickcheck]
fn append_preserves_count_and_order(values: Vec<i32>) -> bool {
  let mut list = DynList::new();
  for value in values.iter().copied() {
    list.append(value);
  }
  list.len() == values.len() && list.iter().eq(values.iter())
}

#[quickcheck_macros::quickcheck]
fn clear_empties_but_keeps_capacity(list: DynList<i32>) -> bool {
  let mut list = list;
  let capacity = list.capacity();
  list.clear();
  list.is_empty() && list.iter().next().is_none() && list.capacity() == capacity
}

#[quickcheck_macros::quickcheck]
fn contains_ignores_element_order(values: Vec<i32>) -> bool {
  let list: DynList<i32> = values.iter().copied().collect();
  values.iter().all(|value| list.contains(value))
}

#[quickcheck_macros::quickcheck]
fn copy_to_round_trips(list: DynList<i32>) -> bool {
  let mut destination = vec![0; list.len()];
  list.copy_to(Some(&mut destination), 0).is_ok() && list.as_slice() == &destination[..]
}

#[quickcheck_macros::quickcheck]
fn insert_then_remove_at_is_identity(list: DynList<i32>, index: usize, value: i32) -> bool {
  let mut copy = list.clone();
  let index = index % (list.len() + 1);
  copy.insert(index, value).is_ok() && copy.remove_at(index).is_ok() && copy == list
}

#[quickcheck_macros::quickcheck]
fn iter_is_restartable(list: DynList<i32>) -> bool {
  list.iter().eq(list.iter()) && list.iter().rev().eq(list.iter().rev())
}

#[quickcheck_macros::quickcheck]
fn remove_matches_index_of(list: DynList<i32>, value: i32) -> bool {
  let mut copy = list.clone();
  match list.index_of(&value) {
    Some(index) => {
      copy.remove(&value)
        && copy.len() == list.len() - 1
        && copy.as_slice()[..index] == list.as_slice()[..index]
        && copy.as_slice()[index..] == list.as_slice()[index + 1..]
    }
    None => !copy.remove(&value) && copy == list,
  }
}

#[quickcheck_macros::quickcheck]
fn set_then_get(list: DynList<i32>, index: usize, value: i32) -> bool {
  let mut list = list;
  if list.is_empty() {
    return true;
  }
  let index = index % list.len();
  list.set(index, value).is_ok() && list.get(index) == Ok(&value)
}
