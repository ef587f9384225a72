//! Iteration Tests
//!
//! Tests for whole-map and per-bucket iteration.

use std::collections::HashSet;

use bytemap::map::{ByteMap, OwnedEntry};

// =============================================================================
// Whole-Map Iteration Tests
// =============================================================================

#[test]
fn test_iter_yields_all_live_entries() {
    let mut map = ByteMap::new(5).unwrap();
    for i in 0..1000u32 {
        map.insert(format!("key{}", i).as_bytes(), format!("val{}", i).as_bytes())
            .unwrap();
    }

    let pairs: HashSet<(Vec<u8>, Vec<u8>)> = map
        .iter()
        .map(|e| (e.key.to_vec(), e.value.to_vec()))
        .collect();

    assert_eq!(map.iter().count(), 1000);
    assert_eq!(pairs.len(), 1000);
    for i in 0..1000u32 {
        assert!(pairs.contains(&(
            format!("key{}", i).into_bytes(),
            format!("val{}", i).into_bytes()
        )));
    }
}

#[test]
fn test_iter_skips_tombstones() {
    let mut map = ByteMap::new(3).unwrap();
    for key in ["a", "b", "c", "d", "e"] {
        map.insert(key.as_bytes(), b"v").unwrap();
    }
    map.remove(b"b").unwrap();
    map.remove(b"d").unwrap();

    let keys: HashSet<Vec<u8>> = map.iter().map(|e| e.key.to_vec()).collect();

    let expected: HashSet<Vec<u8>> = ["a", "c", "e"].iter().map(|k| k.as_bytes().to_vec()).collect();
    assert_eq!(keys, expected);
}

#[test]
fn test_iter_includes_duplicates() {
    let mut map = ByteMap::new(2).unwrap();
    map.insert(b"dup", b"1").unwrap();
    map.insert(b"dup", b"2").unwrap();

    let values: Vec<&[u8]> = map.iter().map(|e| e.value).collect();

    assert_eq!(values, vec![&b"1"[..], &b"2"[..]]);
}

#[test]
fn test_iter_is_restartable() {
    let mut map = ByteMap::new(4).unwrap();
    map.insert_all(vec![("x", "1"), ("y", "2"), ("z", "3")]).unwrap();

    let first: Vec<_> = map.iter().collect();
    let second: Vec<_> = map.iter().collect();

    assert_eq!(first, second);
}

#[test]
fn test_iter_is_bucket_major() {
    let mut map = ByteMap::new(4).unwrap();
    for i in 0..64u32 {
        map.insert(&i.to_le_bytes(), b"").unwrap();
    }

    let indices: Vec<usize> = map.iter().map(|e| map.bucket_index(e.key)).collect();

    assert!(indices.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_iter_insertion_order_within_bucket() {
    let mut map = ByteMap::new(1).unwrap();
    map.insert(b"first", b"1").unwrap();
    map.insert(b"second", b"2").unwrap();
    map.insert(b"third", b"3").unwrap();
    map.remove(b"second").unwrap();

    let keys: Vec<&[u8]> = map.iter().map(|e| e.key).collect();

    assert_eq!(keys, vec![&b"first"[..], &b"third"[..]]);
}

#[test]
fn test_into_iterator_for_reference() {
    let mut map = ByteMap::new(2).unwrap();
    map.insert(b"k", b"v").unwrap();

    let mut count = 0;
    for entry in &map {
        assert_eq!(entry.key, b"k");
        count += 1;
    }
    assert_eq!(count, 1);
}

#[test]
fn test_iter_empty_map() {
    let map = ByteMap::new(16).unwrap();
    assert!(map.iter().next().is_none());
}

// =============================================================================
// Bucket Iteration Tests
// =============================================================================

#[test]
fn test_bucket_iter_matches_bucket_index() {
    let mut map = ByteMap::new(6).unwrap();
    for i in 0..200u32 {
        map.insert(&i.to_le_bytes(), b"v").unwrap();
    }

    let mut total = 0;
    for index in 0..map.bucket_count() {
        let bucket = map.bucket(index).unwrap();
        assert_eq!(bucket.index(), index);
        for entry in bucket {
            assert_eq!(map.bucket_index(entry.key), index);
            total += 1;
        }
    }
    assert_eq!(total, 200);
}

#[test]
fn test_bucket_out_of_range() {
    let map = ByteMap::new(3).unwrap();
    assert!(map.bucket(3).is_none());
}

// =============================================================================
// Owned Entry Tests
// =============================================================================

#[test]
fn test_owned_entry_outlives_mutation() {
    let mut map = ByteMap::new(2).unwrap();
    map.insert(b"key", b"value").unwrap();

    let owned: OwnedEntry = map.get(b"key").unwrap().into_owned();
    map.remove(b"key").unwrap();
    map.free();

    assert_eq!(&owned.key[..], b"key");
    assert_eq!(&owned.value[..], b"value");
    assert_eq!(owned.as_entry().value, b"value");
}
