//! Capability storages
//!
//! The same routine filling two different storages through the granular collection traits.

use dynlist::{
  collection::{Length, Push},
  list::DynList,
};

fn fill_with_squares<S>(storage: &mut S, how_many: i64)
where
  S: Length + Push<Input = i64>,
{
  for n in 0..how_many {
    storage.push(n * n);
  }
  assert_eq!(storage.length(), how_many as usize);
}

fn main() -> dynlist::Result<()> {
  let mut list = DynList::new();
  let mut vec = Vec::new();
  fill_with_squares(&mut list, 10);
  fill_with_squares(&mut vec, 10);
  assert_eq!(list.as_slice(), &vec[..]);

  list.insert(0, -1)?;
  list.set(1, 1618)?;
  list.remove_at(2)?;
  assert!(list.remove(&81));
  assert_eq!(list.get(0), Ok(&-1));

  let mut destination = vec![0; list.len()];
  list.copy_to(Some(&mut destination), 0)?;
  assert!(list.iter().copied().eq(destination.iter().copied()));
  Ok(())
}
