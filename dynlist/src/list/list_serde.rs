//! Serde integration.
//!
//! A derive would also serialize the spare `items[count..]` slots, so both directions are
//! written by hand over the live elements only.

use crate::list::DynList;
use core::{fmt, marker::PhantomData};
use serde::{
  de::{Deserialize, Deserializer, SeqAccess, Visitor},
  ser::{Serialize, SerializeSeq, Serializer},
};

impl<T> Serialize for DynList<T>
where
  T: Serialize,
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    let mut seq = serializer.serialize_seq(Some(self.len()))?;
    for item in self {
      seq.serialize_element(item)?;
    }
    seq.end()
  }
}

impl<'de, T> Deserialize<'de> for DynList<T>
where
  T: Default + Deserialize<'de>,
{
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    struct ListVisitor<T>(PhantomData<T>);

    impl<'de, T> Visitor<'de> for ListVisitor<T>
    where
      T: Default + Deserialize<'de>,
    {
      type Value = DynList<T>;

      fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence")
      }

      fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
      where
        A: SeqAccess<'de>,
      {
        let mut list = DynList::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
          list.append(item);
        }
        Ok(list)
      }
    }

    deserializer.deserialize_seq(ListVisitor(PhantomData))
  }
}
