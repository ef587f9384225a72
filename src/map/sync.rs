//! SyncByteMap implementation
//!
//! ByteMap behind a parking_lot RwLock for shared use across threads.

use std::hash::BuildHasher;

use parking_lot::RwLock;

use crate::config::Config;
use crate::error::Result;

use super::hasher::KeyHasher;
use super::iter::OwnedEntry;
use super::table::{ByteMap, MapStats};

/// Internally synchronized ByteMap
///
/// ## Concurrency Model: Single-Writer / Multiple-Reader
///
/// - **Writes** (insert/remove/compact/rehash/free): exclusive write lock
/// - **Reads** (get/len/stats): shared read lock, many concurrent readers
///
/// Lookups copy the entry out, since a borrowed view cannot outlive the
/// lock guard. Use [`read`](Self::read) for zero-copy access inside a
/// closure.
#[derive(Debug)]
pub struct SyncByteMap<S = KeyHasher> {
    inner: RwLock<ByteMap<S>>,
}

impl SyncByteMap<KeyHasher> {
    pub fn new(bucket_count: usize) -> Result<Self> {
        ByteMap::new(bucket_count).map(Self::from_map)
    }

    pub fn with_config(config: &Config) -> Result<Self> {
        ByteMap::with_config(config).map(Self::from_map)
    }
}

impl<S: BuildHasher> SyncByteMap<S> {
    /// Wrap an existing map
    pub fn from_map(map: ByteMap<S>) -> Self {
        Self {
            inner: RwLock::new(map),
        }
    }

    /// Unwrap into the plain map
    pub fn into_inner(self) -> ByteMap<S> {
        self.inner.into_inner()
    }

    pub fn insert(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.inner.write().insert(key, value)
    }

    pub fn remove(&self, key: &[u8]) -> Result<()> {
        self.inner.write().remove(key)
    }

    /// Copy of the first live record for `key`
    pub fn get(&self, key: &[u8]) -> Option<OwnedEntry> {
        self.inner.read().get(key).map(|entry| entry.into_owned())
    }

    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.inner.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn stats(&self) -> MapStats {
        self.inner.read().stats()
    }

    /// Copy of every live record, bucket-major
    pub fn snapshot(&self) -> Vec<OwnedEntry> {
        self.inner
            .read()
            .iter()
            .map(|entry| entry.into_owned())
            .collect()
    }

    pub fn compact(&self) -> Result<usize> {
        self.inner.write().compact()
    }

    pub fn rehash(&self, bucket_count: usize) -> Result<()> {
        self.inner.write().rehash(bucket_count)
    }

    pub fn free(&self) {
        self.inner.write().free()
    }

    /// Run `f` with shared access to the map
    pub fn read<R>(&self, f: impl FnOnce(&ByteMap<S>) -> R) -> R {
        f(&*self.inner.read())
    }

    /// Run `f` with exclusive access to the map
    pub fn write<R>(&self, f: impl FnOnce(&mut ByteMap<S>) -> R) -> R {
        f(&mut *self.inner.write())
    }
}
