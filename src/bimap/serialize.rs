use crate::bimap::BiMap;
use crate::compare::Compare;
use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Serialized as a sequence of `(left, right)` pairs in left order.
impl<L, R, CL, CR> Serialize for BiMap<L, R, CL, CR>
where
    L: Serialize,
    R: Serialize,
    CL: Compare<L>,
    CR: Compare<R>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for pair in self.iter_left() {
            seq.serialize_element(&pair)?;
        }
        seq.end()
    }
}

struct BiMapVisitor<L, R, CL, CR> {
    marker: PhantomData<fn() -> BiMap<L, R, CL, CR>>,
}

impl<'de, L, R, CL, CR> Visitor<'de> for BiMapVisitor<L, R, CL, CR>
where
    L: Deserialize<'de>,
    R: Deserialize<'de>,
    CL: Compare<L> + Default,
    CR: Compare<R> + Default,
{
    type Value = BiMap<L, R, CL, CR>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of (left, right) pairs")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut map = BiMap::default();
        while let Some((left, right)) = seq.next_element()? {
            if let Err(error) = map.try_insert(left, right) {
                return Err(de::Error::custom(error));
            }
        }
        Ok(map)
    }
}

/// Fails if a left or a right key occurs twice.
impl<'de, L, R, CL, CR> Deserialize<'de> for BiMap<L, R, CL, CR>
where
    L: Deserialize<'de>,
    R: Deserialize<'de>,
    CL: Compare<L> + Default,
    CR: Compare<R> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(BiMapVisitor {
            marker: PhantomData,
        })
    }
}
