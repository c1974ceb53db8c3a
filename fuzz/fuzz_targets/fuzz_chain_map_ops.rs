#![no_main]

use libfuzzer_sys::fuzz_target;
use std::collections::HashMap;

fuzz_target!(|data: &[u8]| {
    // The first byte sizes the shared base; the rest is an insert/lookup
    // sequence applied to both the chain map and a `HashMap` model.
    let Some((&base_len, rest)) = data.split_first() else {
        return;
    };

    let pairs = rest
        .chunks_exact(2)
        .map(|chunk| (chunk[0], chunk[1]))
        .collect::<Vec<_>>();
    let split = (base_len as usize).min(pairs.len());

    let mut model: HashMap<u8, u8> = pairs[..split].iter().copied().collect();
    let mut map = chainmap::ChainMap::new(model.clone());

    for &(key, value) in &pairs[split..] {
        if value == 0 {
            assert_eq!(map.get(&key), model.get(&key));
        } else {
            map = map.insert(key, value);
            model.insert(key, value);
        }
    }

    assert_eq!(map.len(), model.len());

    for (key, value) in &map {
        assert_eq!(model.get(key), Some(value));
    }
});
