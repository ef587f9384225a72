//! Property Tests
//!
//! Randomized checks of the map against a std HashMap model.

use std::collections::{HashMap, HashSet};

use bytemap::buffer::GrowableBuffer;
use bytemap::map::ByteMap;
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 1..24)
}

fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..48)
}

proptest! {
    #[test]
    fn prop_insert_then_get_round_trips(
        entries in proptest::collection::hash_map(key_strategy(), value_strategy(), 1..200),
        buckets in 1usize..32,
    ) {
        let mut map = ByteMap::new(buckets).unwrap();
        for (key, value) in &entries {
            map.insert(key, value).unwrap();
        }

        prop_assert_eq!(map.len(), entries.len());
        for (key, value) in &entries {
            let entry = map.get(key).unwrap();
            prop_assert_eq!(entry.key, key.as_slice());
            prop_assert_eq!(entry.value, value.as_slice());
        }
    }

    #[test]
    fn prop_remove_is_complete(
        entries in proptest::collection::hash_map(key_strategy(), value_strategy(), 1..150),
        buckets in 1usize..16,
        remove_mask in proptest::collection::vec(any::<bool>(), 150),
    ) {
        let mut map = ByteMap::new(buckets).unwrap();
        for (key, value) in &entries {
            map.insert(key, value).unwrap();
        }

        let mut expected: HashMap<Vec<u8>, Vec<u8>> = HashMap::new();
        for ((key, value), remove) in entries.iter().zip(remove_mask.iter()) {
            if *remove {
                map.remove(key).unwrap();
                prop_assert!(map.get(key).is_none());
            } else {
                expected.insert(key.clone(), value.clone());
            }
        }

        prop_assert_eq!(map.len(), expected.len());
        for (key, value) in &expected {
            prop_assert_eq!(map.get(key).unwrap().value, value.as_slice());
        }
    }

    #[test]
    fn prop_iteration_matches_live_set(
        entries in proptest::collection::hash_map(key_strategy(), value_strategy(), 0..150),
        buckets in 1usize..16,
        remove_mask in proptest::collection::vec(any::<bool>(), 150),
    ) {
        let mut map = ByteMap::new(buckets).unwrap();
        for (key, value) in &entries {
            map.insert(key, value).unwrap();
        }

        let mut live = HashSet::new();
        for ((key, value), remove) in entries.iter().zip(remove_mask.iter()) {
            if *remove {
                map.remove(key).unwrap();
            } else {
                live.insert((key.clone(), value.clone()));
            }
        }

        let yielded: Vec<(Vec<u8>, Vec<u8>)> = map
            .iter()
            .map(|e| (e.key.to_vec(), e.value.to_vec()))
            .collect();
        let yielded_set: HashSet<_> = yielded.iter().cloned().collect();

        prop_assert_eq!(yielded.len(), yielded_set.len());
        prop_assert_eq!(yielded_set, live);
    }

    #[test]
    fn prop_compact_and_rehash_preserve_contents(
        entries in proptest::collection::hash_map(key_strategy(), value_strategy(), 0..100),
        remove_mask in proptest::collection::vec(any::<bool>(), 100),
        new_buckets in 1usize..64,
    ) {
        let mut map = ByteMap::new(4).unwrap();
        for (key, value) in &entries {
            map.insert(key, value).unwrap();
        }
        for ((key, _), remove) in entries.iter().zip(remove_mask.iter()) {
            if *remove {
                map.remove(key).unwrap();
            }
        }

        let before: HashSet<(Vec<u8>, Vec<u8>)> = map
            .iter()
            .map(|e| (e.key.to_vec(), e.value.to_vec()))
            .collect();

        map.compact().unwrap();
        prop_assert_eq!(map.tombstone_count(), 0);
        map.rehash(new_buckets).unwrap();

        let after: HashSet<(Vec<u8>, Vec<u8>)> = map
            .iter()
            .map(|e| (e.key.to_vec(), e.value.to_vec()))
            .collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(map.stats().bytes_used, map.stats().live_bytes);
    }

    #[test]
    fn prop_buffer_growth_preserves_bytes(
        chunks in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..300), 0..100),
    ) {
        let mut buffer = GrowableBuffer::new();
        let mut expected = Vec::new();

        for chunk in &chunks {
            buffer.append(chunk).unwrap();
            expected.extend_from_slice(chunk);
            prop_assert!(buffer.capacity() >= buffer.len());
            prop_assert_eq!(buffer.data(), expected.as_slice());
        }
    }
}
