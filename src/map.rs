//! Persistent association-list map
//!
//! [`Map`] keeps its entries in a persistent cons list. Insertion prepends
//! and lookup scans front to back, so the most recent binding of a key
//! shadows every earlier one. Suited to small maps with heavy sharing
//! between versions, such as scope chains and environment frames; for a
//! large shared base with small per-version overlays, see
//! [`ChainMap`](crate::ChainMap).

use crate::list::{List, ListIterator};
use std::{
    borrow::Borrow,
    collections::{HashMap, HashSet},
    fmt::{self, Debug, Formatter},
    hash::Hash,
    ops::Index,
};

/// A persistent map backed by an association list.
pub struct Map<K, V>(List<(K, V)>);

impl<K, V> Map<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self(Default::default())
    }

    /// True if the map holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up the most recent binding of `key`.
    pub fn get<Q: Eq + ?Sized>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
    {
        self.0.iter().find_map(|(other_key, value)| {
            if other_key.borrow() == key {
                Some(value)
            } else {
                None
            }
        })
    }

    pub fn contains_key<Q: Eq + ?Sized>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
    {
        self.get(key).is_some()
    }

    /// Returns a new map with the binding added; the receiver is unchanged.
    pub fn insert(&self, key: K, value: V) -> Self {
        Self(self.0.push_front((key, value)))
    }

    /// Inserts each entry in iteration order; later entries shadow earlier
    /// ones.
    pub fn insert_many(&self, entries: impl IntoIterator<Item = (K, V)>) -> Self {
        Self(self.0.push_front_many(entries))
    }
}

impl<K: Eq + Hash, V> Map<K, V> {
    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Iterates the distinct keys with their most recent values, most
    /// recently inserted first.
    pub fn iter(&self) -> MapIterator<'_, K, V> {
        self.into_iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }
}

impl<Q: Eq + ?Sized, K: Eq, V> Index<&Q> for Map<K, V>
where
    K: Borrow<Q>,
{
    type Output = V;

    fn index(&self, key: &Q) -> &Self::Output {
        self.get(key).expect("existent key")
    }
}

// Not derived: the inner list clones without `K: Clone` or `V: Clone`.
impl<K, V> Clone for Map<K, V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<K, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug + Eq + Hash, V: Debug> Debug for Map<K, V> {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for Map<K, V> {
    // Unordered equality over distinct keys. Checking inclusion of `other`
    // alone would accept proper subsets, so the distinct-key counts must
    // match as well.
    fn eq(&self, other: &Self) -> bool {
        let entries = self.iter().collect::<HashMap<_, _>>();
        let mut matched = 0;

        for (key, value) in other {
            match entries.get(key) {
                Some(existing) if *existing == value => matched += 1,
                _ => return false,
            }
        }

        matched == entries.len()
    }
}

impl<K: Eq + Hash, V: Eq> Eq for Map<K, V> {}

impl<K, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        Self::new().insert_many(entries)
    }
}

/// Borrowing iterator over a [`Map`]; yields each distinct key exactly once
/// with its most recent value, most recently inserted first.
pub struct MapIterator<'a, K: Eq + Hash, V> {
    entries: ListIterator<'a, (K, V)>,
    seen: HashSet<&'a K>,
}

impl<'a, K: Eq + Hash, V> IntoIterator for &'a Map<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = MapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        MapIterator {
            entries: self.0.iter(),
            seen: HashSet::new(),
        }
    }
}

impl<'a, K: Eq + Hash, V> Iterator for MapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        for (key, value) in self.entries.by_ref() {
            if self.seen.insert(key) {
                return Some((key, value));
            }
        }

        None
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Map;
    use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
    use serde::ser::{Serialize, SerializeMap, Serializer};
    use std::fmt;
    use std::hash::Hash;
    use std::marker::PhantomData;

    impl<K: Serialize + Eq + Hash, V: Serialize> Serialize for Map<K, V> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;

            for (key, value) in self {
                map.serialize_entry(key, value)?;
            }

            map.end()
        }
    }

    impl<'de, K: Deserialize<'de>, V: Deserialize<'de>> Deserialize<'de> for Map<K, V> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(MapVisitor(PhantomData))
        }
    }

    struct MapVisitor<K, V>(PhantomData<(K, V)>);

    impl<'de, K: Deserialize<'de>, V: Deserialize<'de>> Visitor<'de> for MapVisitor<K, V> {
        type Value = Map<K, V>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut map = Map::new();

            while let Some((key, value)) = access.next_entry()? {
                map = map.insert(key, value);
            }

            Ok(map)
        }
    }
}
