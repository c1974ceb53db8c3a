//! Persistent overlay over a shared hash map
//!
//! [`ChainMap`] layers a persistent [`Map`] of local bindings over a base
//! `HashMap` that is shared by reference among every descendant. The base
//! gives O(1) expected lookups for the bulk of the entries; the chain
//! records per-version additions without ever copying the base.

use crate::map::{Map, MapIterator};
use std::{
    borrow::Borrow,
    collections::{hash_map, HashMap, HashSet},
    fmt::{self, Debug, Formatter},
    hash::Hash,
    ops::Index,
    rc::Rc,
};

/// A persistent map layered over a shared base `HashMap`.
pub struct ChainMap<K, V> {
    chain: Map<K, V>,
    head: Rc<HashMap<K, V>>,
}

impl<K, V> ChainMap<K, V> {
    /// Wraps a base map. The base is shared by reference from here on and
    /// never copied.
    pub fn new(head: HashMap<K, V>) -> Self {
        Self {
            chain: Default::default(),
            head: head.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty() && self.head.is_empty()
    }

    /// Returns a new map with the binding added to the chain; the receiver
    /// and the shared base are unchanged.
    pub fn insert(&self, key: K, value: V) -> Self {
        Self {
            chain: self.chain.insert(key, value),
            head: self.head.clone(),
        }
    }

    /// Inserts each entry in iteration order; later entries shadow earlier
    /// ones.
    pub fn insert_many(&self, entries: impl IntoIterator<Item = (K, V)>) -> Self {
        Self {
            chain: self.chain.insert_many(entries),
            head: self.head.clone(),
        }
    }
}

impl<K: Eq + Hash, V> ChainMap<K, V> {
    /// Number of distinct keys across the chain and the base.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Chain bindings shadow base bindings for the same key.
    pub fn get<Q: Eq + Hash + ?Sized>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
    {
        self.chain.get(key).or_else(|| self.head.get(key))
    }

    pub fn contains_key<Q: Eq + Hash + ?Sized>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
    {
        self.get(key).is_some()
    }

    /// Iterates the distinct keys: chain entries (most recent first), then
    /// base entries not shadowed by the chain.
    pub fn iter(&self) -> ChainMapIterator<'_, K, V> {
        self.into_iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }
}

impl<Q: Eq + Hash + ?Sized, K: Eq + Hash, V> Index<&Q> for ChainMap<K, V>
where
    K: Borrow<Q>,
{
    type Output = V;

    fn index(&self, key: &Q) -> &Self::Output {
        self.get(key).expect("existent key")
    }
}

// Not derived: clones the chain handle and bumps the base's reference count,
// no `K: Clone` or `V: Clone` required.
impl<K, V> Clone for ChainMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            chain: self.chain.clone(),
            head: self.head.clone(),
        }
    }
}

impl<K, V> Default for ChainMap<K, V> {
    fn default() -> Self {
        Self::new(Default::default())
    }
}

impl<K: Debug + Eq + Hash, V: Debug> Debug for ChainMap<K, V> {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for ChainMap<K, V> {
    // Unordered equality over distinct keys, regardless of how the entries
    // are split between chain and base. The distinct-key counts must match;
    // inclusion of `other` alone would accept proper subsets.
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

impl<K: Eq + Hash, V: Eq> Eq for ChainMap<K, V> {}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for ChainMap<K, V> {
    /// Collects into the base, the efficient form for bulk construction.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        Self::new(entries.into_iter().collect())
    }
}

/// Borrowing iterator over a [`ChainMap`]; yields each distinct key exactly
/// once, chain entries before unshadowed base entries.
pub struct ChainMapIterator<'a, K: Eq + Hash, V> {
    chain: MapIterator<'a, K, V>,
    head: hash_map::Iter<'a, K, V>,
    seen: HashSet<&'a K>,
}

impl<'a, K: Eq + Hash, V> IntoIterator for &'a ChainMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = ChainMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        ChainMapIterator {
            chain: self.chain.iter(),
            head: self.head.iter(),
            seen: HashSet::new(),
        }
    }
}

impl<'a, K: Eq + Hash, V> Iterator for ChainMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        // Chain entries are already distinct among themselves; the seen set
        // is what shadows the base.
        for (key, value) in self.chain.by_ref() {
            if self.seen.insert(key) {
                return Some((key, value));
            }
        }

        for (key, value) in self.head.by_ref() {
            if self.seen.insert(key) {
                return Some((key, value));
            }
        }

        None
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::ChainMap;
    use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
    use serde::ser::{Serialize, SerializeMap, Serializer};
    use std::collections::HashMap;
    use std::fmt;
    use std::hash::Hash;
    use std::marker::PhantomData;

    impl<K: Serialize + Eq + Hash, V: Serialize> Serialize for ChainMap<K, V> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;

            for (key, value) in self {
                map.serialize_entry(key, value)?;
            }

            map.end()
        }
    }

    impl<'de, K: Deserialize<'de> + Eq + Hash, V: Deserialize<'de>> Deserialize<'de>
        for ChainMap<K, V>
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(ChainMapVisitor(PhantomData))
        }
    }

    struct ChainMapVisitor<K, V>(PhantomData<(K, V)>);

    impl<'de, K: Deserialize<'de> + Eq + Hash, V: Deserialize<'de>> Visitor<'de>
        for ChainMapVisitor<K, V>
    {
        type Value = ChainMap<K, V>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut head = HashMap::new();

            while let Some((key, value)) = access.next_entry()? {
                head.insert(key, value);
            }

            Ok(ChainMap::new(head))
        }
    }
}
