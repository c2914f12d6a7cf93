//! Serialization as a pre-order sequence of values.
//!
//! Deserialization re-inserts the values in sequence order: the result holds
//! the same values and satisfies every invariant, but its shape may differ
//! from the tree that was serialized.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::tree::AvlTree;

impl<T: Serialize> Serialize for AvlTree<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(None)?;
        for value in self.pre_order() {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

struct AvlTreeVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for AvlTreeVisitor<T>
where
    T: Deserialize<'de> + Ord,
{
    type Value = AvlTree<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of tree values")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut tree = AvlTree::new();
        while let Some(value) = seq.next_element()? {
            tree.insert(value);
        }
        Ok(tree)
    }
}

impl<'de, T> Deserialize<'de> for AvlTree<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(AvlTreeVisitor(PhantomData))
    }
}
