//! Persistent singly-linked list
//!
//! The building block for [`Map`](crate::Map): a cons list with O(1) prepend
//! and structural sharing. Pushing never mutates; every derived list keeps
//! the list it came from as its shared tail.

use std::sync::Arc;

/// A persistent singly-linked list with O(1) prepend.
#[derive(Debug, Eq, PartialEq, PartialOrd, Ord)]
pub struct List<T> {
    cons: Option<Arc<Cons<T>>>,
    size: usize,
}

#[derive(Debug, Eq, PartialEq, PartialOrd, Ord)]
struct Cons<T> {
    head: T,
    tail: Option<Arc<Cons<T>>>,
}

impl<T> List<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            cons: None,
            size: 0,
        }
    }

    /// Number of elements, O(1).
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns a new list with `head` prepended. The receiver is unchanged
    /// and becomes the shared tail of the result.
    pub fn push_front(&self, head: T) -> Self {
        Self {
            cons: Arc::new(Cons {
                head,
                tail: self.cons.clone(),
            })
            .into(),
            size: self.size + 1,
        }
    }

    /// Prepends each item in iteration order; the last item pushed ends up
    /// at the front.
    pub fn push_front_many(&self, items: impl IntoIterator<Item = T>) -> Self {
        let mut list = self.clone();

        for item in items {
            list = list.push_front(item);
        }

        list
    }

    /// Iterates front to back.
    pub fn iter(&self) -> ListIterator<'_, T> {
        self.into_iter()
    }
}

// Not derived: a derive would demand `T: Clone`, but cloning only copies the
// head pointer and the cached size.
impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        Self {
            cons: self.cons.clone(),
            size: self.size,
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink nodes iteratively; the compiler-generated drop recurses once per
// node and overflows the stack on long unshared lists.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut cons = self.cons.take();

        while let Some(node) = cons {
            match Arc::try_unwrap(node) {
                Ok(mut inner) => cons = inner.tail.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut items = items.into_iter().collect::<Vec<_>>();
        items.reverse();

        let mut list = Self::new();

        for item in items {
            list = list.push_front(item);
        }

        list
    }
}

/// Borrowing iterator over a [`List`], front to back.
pub struct ListIterator<'a, T>(&'a Option<Arc<Cons<T>>>);

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = ListIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        ListIterator(&self.cons)
    }
}

impl<'a, T> Iterator for ListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(cons) = self.0 {
            self.0 = &cons.tail;

            Some(&cons.head)
        } else {
            None
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::List;
    use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
    use serde::ser::{Serialize, SerializeSeq, Serializer};
    use std::fmt;
    use std::marker::PhantomData;

    impl<T: Serialize> Serialize for List<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;

            for item in self {
                seq.serialize_element(item)?;
            }

            seq.end()
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for List<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_seq(ListVisitor(PhantomData))
        }
    }

    struct ListVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for ListVisitor<T> {
        type Value = List<T>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a sequence")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut items = Vec::new();

            while let Some(item) = seq.next_element()? {
                items.push(item);
            }

            Ok(items.into_iter().collect())
        }
    }
}
