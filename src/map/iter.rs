//! Entry views and iterators
//!
//! Views borrow from the map, so they cannot outlive the next mutation.

use std::iter::Enumerate;
use std::slice;

use bytes::Bytes;

use crate::buffer::GrowableBuffer;
use super::record::RecordCursor;

/// Borrowed key/value pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub key: &'a [u8],
    pub value: &'a [u8],
}

impl<'a> Entry<'a> {
    /// Copy the entry out of the map
    pub fn into_owned(self) -> OwnedEntry {
        OwnedEntry {
            key: Bytes::copy_from_slice(self.key),
            value: Bytes::copy_from_slice(self.value),
        }
    }
}

/// Key/value pair copied out of the map
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnedEntry {
    pub key: Bytes,
    pub value: Bytes,
}

impl OwnedEntry {
    pub fn as_entry(&self) -> Entry<'_> {
        Entry {
            key: &self.key,
            value: &self.value,
        }
    }
}

/// Live records of a single bucket, front to back
#[derive(Debug, Clone)]
pub struct BucketIter<'a> {
    index: usize,
    cursor: RecordCursor<'a>,
}

impl<'a> BucketIter<'a> {
    pub(super) fn new(index: usize, bucket: &'a GrowableBuffer) -> Self {
        Self {
            index,
            cursor: RecordCursor::new(bucket.data()),
        }
    }

    /// Bucket this iterator walks
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<'a> Iterator for BucketIter<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.cursor.next()? {
                Ok(record) if record.is_tombstone() => continue,
                Ok(record) => {
                    return Some(Entry {
                        key: record.key,
                        value: record.value,
                    })
                }
                Err(e) => {
                    tracing::warn!(bucket = self.index, error = %e, "stopping bucket scan");
                    return None;
                }
            }
        }
    }
}

/// Live records of the whole map, bucket-major
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    buckets: Enumerate<slice::Iter<'a, GrowableBuffer>>,
    current: Option<BucketIter<'a>>,
}

impl<'a> Iter<'a> {
    pub(super) fn new(buckets: &'a [GrowableBuffer]) -> Self {
        Self {
            buckets: buckets.iter().enumerate(),
            current: None,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.as_mut().and_then(Iterator::next) {
                return Some(entry);
            }
            let (index, bucket) = self.buckets.next()?;
            self.current = Some(BucketIter::new(index, bucket));
        }
    }
}
