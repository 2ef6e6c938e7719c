/// Iterator over the live elements of a list.
///
/// Created by [`DynList::iter`](crate::list::DynList::iter), which starts a fresh traversal on
/// every call.
#[derive(Clone, Debug)]
pub struct ListIter<'a, T> {
  items: &'a [T],
}

impl<'a, T> ListIter<'a, T> {
  pub(crate) fn new(items: &'a [T]) -> Self {
    ListIter { items }
  }
}

impl<'a, T> DoubleEndedIterator for ListIter<'a, T> {
  fn next_back(&mut self) -> Option<Self::Item> {
    let (last, rest) = self.items.split_last()?;
    self.items = rest;
    Some(last)
  }
}

impl<'a, T> ExactSizeIterator for ListIter<'a, T> {}

impl<'a, T> Iterator for ListIter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    let (first, rest) = self.items.split_first()?;
    self.items = rest;
    Some(first)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.items.len(), Some(self.items.len()))
  }
}
