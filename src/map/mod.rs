//! Map Module
//!
//! Chained-bucket hash map over byte-string keys and values.
//!
//! ## Responsibilities
//! - Hash a key to one of a fixed number of buckets
//! - Pack each key/value pair as a length-prefixed record in that bucket
//! - Linear-scan a bucket for lookup and in-place removal
//! - Iterate live records bucket by bucket
//! - Opt-in compaction and rehashing
//!
//! ## Bucket Layout
//! ```text
//! bucket[i]: ┌──────────┬──────────┬──────────┬─────┐
//!            │ Record 1 │ Tombstone│ Record 3 │ ... │
//!            └──────────┴──────────┴──────────┴─────┘
//! ```
//!
//! ## Entry States
//! - absent: no record for the key
//! - live: record with non-zero key_len, reachable by scan
//! - tombstoned: key_len zeroed, skipped by scans, space kept until
//!   `compact` / `rehash`

mod hasher;
mod iter;
mod record;
mod sync;
mod table;

pub use hasher::{hash_key, KeyHasher, KeyHasherState};
pub use iter::{BucketIter, Entry, Iter, OwnedEntry};
pub use record::{encoded_len, RawRecord, RecordCursor, RecordHeader, RECORD_HEADER_SIZE};
pub use sync::SyncByteMap;
pub use table::{ByteMap, MapStats};
