use crate::list::DynList;

impl<T> DynList<T>
where
  T: Default,
  rand::distributions::Standard: rand::distributions::Distribution<T>,
{
  /// Creates a new instance with a random number of random elements.
  ///
  /// # Arguments
  ///
  /// * `rng`: `rand::Rng` trait
  /// * `upper_bound`: The maximum allowed exclusive length
  ///
  /// # Example
  ///
  /// ```rust
  /// use dynlist::list::DynList;
  /// use rand::thread_rng;
  /// let mut rng = thread_rng();
  /// let upper_bound = 5;
  /// let random: DynList<u8> = DynList::new_random_with_rand(&mut rng, upper_bound);
  /// assert!(random.len() < upper_bound);
  /// ```
  pub fn new_random_with_rand<R>(rng: &mut R, upper_bound: usize) -> Self
  where
    R: rand::Rng,
  {
    let count = match upper_bound {
      0 => 0,
      _ => rng.gen_range(0, upper_bound),
    };
    let mut list = Self::with_capacity(count);
    for _ in 0..count {
      list.append(rng.gen());
    }
    list
  }
}
