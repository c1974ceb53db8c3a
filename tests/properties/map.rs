//! Property tests for `Map` against a `HashMap` model.

use proptest::prelude::*;
use std::collections::HashMap;

use chainmap::Map;

fn entries() -> impl Strategy<Value = Vec<(u8, u16)>> {
    proptest::collection::vec((any::<u8>(), any::<u16>()), 0..=64)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: After any insertion sequence, lookups agree with `HashMap`.
    #[test]
    fn property_get_agrees_with_model(entries in entries(), probe in any::<u8>()) {
        let map = Map::new().insert_many(entries.clone());
        let model = entries.iter().copied().collect::<HashMap<_, _>>();

        prop_assert_eq!(map.get(&probe), model.get(&probe));
    }

    /// PROPERTY: `len` counts distinct keys, like the model.
    #[test]
    fn property_len_agrees_with_model(entries in entries()) {
        let map = Map::new().insert_many(entries.clone());
        let model = entries.iter().copied().collect::<HashMap<_, _>>();

        prop_assert_eq!(map.len(), model.len());
    }

    /// PROPERTY: Iteration yields each distinct key exactly once, bound to
    /// the model's value.
    #[test]
    fn property_iter_agrees_with_model(entries in entries()) {
        let map = Map::new().insert_many(entries.clone());
        let model = entries.iter().copied().collect::<HashMap<_, _>>();

        let collected = map
            .iter()
            .map(|(key, value)| (*key, *value))
            .collect::<HashMap<_, _>>();

        prop_assert_eq!(map.iter().count(), collected.len());
        prop_assert_eq!(collected, model);
    }

    /// PROPERTY: Inserting never changes previously taken versions.
    #[test]
    fn property_insert_is_persistent(
        entries in entries(),
        key in any::<u8>(),
        value in any::<u16>(),
    ) {
        let before = Map::new().insert_many(entries);
        let snapshot = before
            .iter()
            .map(|(key, value)| (*key, *value))
            .collect::<Vec<_>>();

        let after = before.insert(key, value);

        let replayed = before
            .iter()
            .map(|(key, value)| (*key, *value))
            .collect::<Vec<_>>();

        prop_assert_eq!(snapshot, replayed);
        prop_assert_eq!(after.get(&key), Some(&value));
    }

    /// PROPERTY: Equality ignores the construction order of distinct keys.
    #[test]
    fn property_equality_ignores_order(entries in entries()) {
        let model = entries.iter().copied().collect::<HashMap<_, _>>();
        // Reversal changes which duplicate wins; keep distinct-key inputs.
        prop_assume!(model.len() == entries.len());

        let forward = Map::new().insert_many(entries.clone());
        let reversed = Map::new().insert_many(entries.into_iter().rev());

        prop_assert_eq!(forward, reversed);
    }

    /// PROPERTY: A map is never equal to itself with one entry dropped,
    /// from either side of the comparison.
    #[test]
    fn property_not_equal_to_proper_subset(entries in entries()) {
        let model = entries.iter().copied().collect::<HashMap<_, _>>();
        prop_assume!(!model.is_empty());

        let full = Map::new().insert_many(model.iter().map(|(&key, &value)| (key, value)));
        let partial =
            Map::new().insert_many(model.iter().skip(1).map(|(&key, &value)| (key, value)));

        prop_assert_ne!(&full, &partial);
        prop_assert_ne!(&partial, &full);
    }
}
