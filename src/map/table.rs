//! ByteMap implementation
//!
//! Fixed bucket count, one GrowableBuffer per bucket, linear scan within a
//! bucket.

use std::hash::BuildHasher;

use crate::buffer::GrowableBuffer;
use crate::config::Config;
use crate::error::{MapError, Result};

use super::hasher::{hash_key, KeyHasher};
use super::iter::{BucketIter, Entry, Iter};
use super::record::{encoded_len, RawRecord, RecordCursor, RecordHeader};

/// Chained-bucket hash map over byte-string keys and values
///
/// ## Semantics
/// - `insert` never deduplicates: a second insert of the same key appends
///   another record, and lookups return the first one in scan order.
///   Callers that want update semantics must `remove` first.
/// - `remove` tombstones the first matching record in place. Space is only
///   reclaimed by an explicit `compact` or `rehash`.
/// - Views returned by `get` / `iter` borrow the map, so any mutation ends
///   them.
///
/// Not internally synchronized; see [`SyncByteMap`](super::SyncByteMap).
#[derive(Debug, Clone)]
pub struct ByteMap<S = KeyHasher> {
    /// One packed record buffer per bucket
    buckets: Vec<GrowableBuffer>,

    /// Picks the bucket for a key
    hasher: S,

    /// Records reachable by lookup
    live: usize,

    /// Removed records still occupying bucket space
    tombstones: usize,
}

/// Snapshot of a map's occupancy and memory use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MapStats {
    pub buckets: usize,
    pub live_entries: usize,
    pub tombstones: usize,
    /// Bytes in use across all buckets (live records + tombstones)
    pub bytes_used: usize,
    /// Bytes allocated across all buckets
    pub bytes_reserved: usize,
    /// Bytes held by live records only
    pub live_bytes: usize,
}

impl ByteMap<KeyHasher> {
    /// Create a map with `bucket_count` empty buckets and the default hasher
    pub fn new(bucket_count: usize) -> Result<Self> {
        Self::with_hasher(bucket_count, KeyHasher::default())
    }

    /// Create a map from a validated config
    pub fn with_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let mut map = Self::with_hasher(config.bucket_count, KeyHasher::from_kind(config.hasher))?;
        if config.initial_bucket_capacity > 0 {
            for bucket in &mut map.buckets {
                *bucket = GrowableBuffer::with_capacity(config.initial_bucket_capacity)?;
            }
        }
        Ok(map)
    }
}

impl<S: BuildHasher> ByteMap<S> {
    /// Create a map with a caller-supplied hasher
    pub fn with_hasher(bucket_count: usize, hasher: S) -> Result<Self> {
        let buckets = Self::empty_buckets(bucket_count)?;

        tracing::debug!(bucket_count, "byte map created");

        Ok(Self {
            buckets,
            hasher,
            live: 0,
            tombstones: 0,
        })
    }

    fn empty_buckets(bucket_count: usize) -> Result<Vec<GrowableBuffer>> {
        if bucket_count == 0 {
            return Err(MapError::InvalidBucketCount(bucket_count));
        }

        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(bucket_count)
            .map_err(|_| MapError::AllocationFailed {
                requested: bucket_count.saturating_mul(std::mem::size_of::<GrowableBuffer>()),
            })?;
        buckets.resize_with(bucket_count, GrowableBuffer::new);
        Ok(buckets)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of live records (duplicates counted individually)
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn tombstone_count(&self) -> usize {
        self.tombstones
    }

    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// Bucket a key maps to
    pub fn bucket_index(&self, key: &[u8]) -> usize {
        (hash_key(&self.hasher, key) % self.buckets.len() as u64) as usize
    }

    // =========================================================================
    // Core Operations
    // =========================================================================

    /// Append a record for `key` / `value` to the key's bucket
    ///
    /// The record is written whole or not at all.
    pub fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        if key.is_empty() {
            return Err(MapError::EmptyKey);
        }

        let index = self.bucket_index(key);
        let header = RecordHeader::for_entry(key, value).encode();
        self.buckets[index].append_all(&[&header[..], key, value])?;
        self.live += 1;

        tracing::trace!(bucket = index, key_len = key.len(), val_len = value.len(), "insert");
        Ok(())
    }

    /// Insert every pair, stopping at the first failure
    ///
    /// Returns the number of records inserted.
    pub fn insert_all<I, K, V>(&mut self, entries: I) -> Result<usize>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<[u8]>,
        V: AsRef<[u8]>,
    {
        let mut count = 0;
        for (key, value) in entries {
            self.insert(key.as_ref(), value.as_ref())?;
            count += 1;
        }
        Ok(count)
    }

    /// First live record for `key` in scan order
    pub fn get(&self, key: &[u8]) -> Option<Entry<'_>> {
        let index = self.bucket_index(key);
        self.find(index, key).map(|record| Entry {
            key: record.key,
            value: record.value,
        })
    }

    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }

    /// Tombstone the first live record for `key`
    ///
    /// Fails with `KeyNotFound` if there is none; the map is then unchanged.
    pub fn remove(&mut self, key: &[u8]) -> Result<()> {
        let index = self.bucket_index(key);
        let (offset, header) = self
            .find(index, key)
            .map(|record| (record.offset, record.header))
            .ok_or(MapError::KeyNotFound)?;

        self.buckets[index].overwrite(offset, &header.to_tombstone().encode())?;
        self.live -= 1;
        self.tombstones += 1;

        tracing::trace!(bucket = index, offset, "remove");
        Ok(())
    }

    /// Scan one bucket for the first live record whose key equals `key`
    fn find(&self, index: usize, key: &[u8]) -> Option<RawRecord<'_>> {
        for record in RecordCursor::new(self.buckets[index].data()) {
            match record {
                Ok(record) if !record.is_tombstone() && record.key == key => return Some(record),
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!(bucket = index, error = %e, "stopping bucket scan");
                    return None;
                }
            }
        }
        None
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// All live records, bucket-major, insertion order within a bucket
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.buckets)
    }

    /// Live records of one bucket
    pub fn bucket(&self, index: usize) -> Option<BucketIter<'_>> {
        self.buckets
            .get(index)
            .map(|bucket| BucketIter::new(index, bucket))
    }

    // =========================================================================
    // Maintenance
    // =========================================================================

    /// Occupancy and memory use, computed by scanning every bucket
    pub fn stats(&self) -> MapStats {
        let mut stats = MapStats {
            buckets: self.buckets.len(),
            live_entries: self.live,
            tombstones: self.tombstones,
            ..MapStats::default()
        };

        for bucket in &self.buckets {
            stats.bytes_used += bucket.len();
            stats.bytes_reserved += bucket.capacity();
        }
        stats.live_bytes = self
            .iter()
            .map(|entry| encoded_len(entry.key, entry.value))
            .sum();

        stats
    }

    /// Rewrite every bucket without its tombstones
    ///
    /// Scan order of live records is preserved. Returns the number of bytes
    /// reclaimed. On failure the map is left unchanged.
    pub fn compact(&mut self) -> Result<usize> {
        let before: usize = self.buckets.iter().map(GrowableBuffer::len).sum();

        let mut compacted = Vec::new();
        compacted
            .try_reserve_exact(self.buckets.len())
            .map_err(|_| MapError::AllocationFailed {
                requested: self.buckets.len(),
            })?;

        for bucket in &self.buckets {
            let live = Self::live_records(bucket)?;
            let size = live.iter().map(RawRecord::encoded_len).sum();
            let mut fresh = GrowableBuffer::with_capacity(size)?;
            for record in &live {
                Self::append_record(&mut fresh, record)?;
            }
            compacted.push(fresh);
        }

        let after: usize = compacted.iter().map(GrowableBuffer::len).sum();
        let removed = self.tombstones;
        self.buckets = compacted;
        self.tombstones = 0;

        tracing::debug!(tombstones = removed, reclaimed = before - after, "compaction complete");
        Ok(before - after)
    }

    /// Redistribute live records across `bucket_count` buckets
    ///
    /// Duplicate keys keep their relative order. Tombstones are dropped.
    /// On failure the map is left unchanged.
    pub fn rehash(&mut self, bucket_count: usize) -> Result<()> {
        let mut rehashed = Self::empty_buckets(bucket_count)?;

        for bucket in &self.buckets {
            for record in Self::live_records(bucket)? {
                let index = (hash_key(&self.hasher, record.key) % bucket_count as u64) as usize;
                Self::append_record(&mut rehashed[index], &record)?;
            }
        }

        tracing::debug!(
            from = self.buckets.len(),
            to = bucket_count,
            entries = self.live,
            "rehash complete"
        );

        self.buckets = rehashed;
        self.tombstones = 0;
        Ok(())
    }

    /// Remove every record, keeping bucket allocations for reuse
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.live = 0;
        self.tombstones = 0;
    }

    /// Release every bucket's allocation
    ///
    /// The map stays usable with the same bucket count. Calling this twice
    /// is a no-op.
    pub fn free(&mut self) {
        for bucket in &mut self.buckets {
            bucket.free();
        }
        self.live = 0;
        self.tombstones = 0;
    }

    fn live_records(bucket: &GrowableBuffer) -> Result<Vec<RawRecord<'_>>> {
        let mut live = Vec::new();
        for record in RecordCursor::new(bucket.data()) {
            let record = record?;
            if !record.is_tombstone() {
                live.push(record);
            }
        }
        Ok(live)
    }

    fn append_record(bucket: &mut GrowableBuffer, record: &RawRecord<'_>) -> Result<()> {
        let header = RecordHeader::for_entry(record.key, record.value).encode();
        bucket.append_all(&[&header[..], record.key, record.value])
    }
}

impl<'a, S: BuildHasher> IntoIterator for &'a ByteMap<S> {
    type Item = Entry<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
