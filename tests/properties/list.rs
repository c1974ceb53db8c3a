//! Property tests for `List`.

use proptest::prelude::*;

use chainmap::List;

fn items() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..=64)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Collecting preserves iteration order and length.
    #[test]
    fn property_from_iter_round_trips(items in items()) {
        let list = items.iter().copied().collect::<List<_>>();

        prop_assert_eq!(list.len(), items.len());
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), items);
    }

    /// PROPERTY: `push_front` never changes previously taken versions.
    #[test]
    fn property_push_front_is_persistent(items in items(), extra in any::<u8>()) {
        let before = items.iter().copied().collect::<List<_>>();
        let snapshot = before.iter().copied().collect::<Vec<_>>();

        let after = before.push_front(extra);

        prop_assert_eq!(before.iter().copied().collect::<Vec<_>>(), snapshot);
        prop_assert_eq!(after.len(), before.len() + 1);
        prop_assert_eq!(after.iter().next(), Some(&extra));
    }

    /// PROPERTY: Lists built from the same items are equal; prepending makes
    /// them unequal.
    #[test]
    fn property_equality_is_structural(items in items(), extra in any::<u8>()) {
        let first = items.iter().copied().collect::<List<_>>();
        let second = items.iter().copied().collect::<List<_>>();

        prop_assert_eq!(&first, &second);
        prop_assert_ne!(&first.push_front(extra), &second);
    }
}
