#![no_main]

use libfuzzer_sys::fuzz_target;
use std::collections::HashMap;

fuzz_target!(|data: &[u8]| {
    // Differential test: a byte-driven insert/lookup sequence must behave
    // exactly like `HashMap`. A value byte of zero means "look up".
    let mut map = chainmap::Map::new();
    let mut model = HashMap::new();

    for chunk in data.chunks_exact(2) {
        let (key, value) = (chunk[0], chunk[1]);

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
