//! Record layout
//!
//! Encoding and bounds-checked decoding of the packed records stored in a
//! bucket buffer.
//!
//! ## Record Format
//! ```text
//! ┌──────────────┬──────────────┬───────────────┬─────────────────┐
//! │ key_len (8)  │ val_len (8)  │ key (key_len) │ value (val_len) │
//! └──────────────┴──────────────┴───────────────┴─────────────────┘
//! ```
//!
//! Lengths are little-endian `u64`. A record with `key_len == 0` is a
//! tombstone: its `val_len` covers every byte the removed record used to
//! occupy, so a scan can step over it.

use bytes::{Buf, BufMut};

use crate::error::{MapError, Result};

/// Header size: 8 bytes key_len + 8 bytes val_len
pub const RECORD_HEADER_SIZE: usize = 16;

/// Fixed-size prefix of every record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    pub key_len: u64,
    pub val_len: u64,
}

impl RecordHeader {
    /// Header for a live record holding `key` and `value`
    pub fn for_entry(key: &[u8], value: &[u8]) -> Self {
        Self {
            key_len: key.len() as u64,
            val_len: value.len() as u64,
        }
    }

    pub fn is_tombstone(&self) -> bool {
        self.key_len == 0
    }

    /// Header that replaces this one when the record is removed
    ///
    /// The tombstone keeps the record's total size unchanged.
    pub fn to_tombstone(&self) -> Self {
        Self {
            key_len: 0,
            val_len: self.key_len + self.val_len,
        }
    }

    /// Bytes following the header, if addressable on this platform
    pub fn body_len(&self) -> Option<usize> {
        let key_len = usize::try_from(self.key_len).ok()?;
        let val_len = usize::try_from(self.val_len).ok()?;
        key_len.checked_add(val_len)
    }

    /// Encode to the on-buffer byte form
    pub fn encode(&self) -> [u8; RECORD_HEADER_SIZE] {
        let mut out = [0u8; RECORD_HEADER_SIZE];
        let mut dst = &mut out[..];
        dst.put_u64_le(self.key_len);
        dst.put_u64_le(self.val_len);
        out
    }
}

/// Total encoded size of a record for the given key and value
pub fn encoded_len(key: &[u8], value: &[u8]) -> usize {
    RECORD_HEADER_SIZE + key.len() + value.len()
}

/// A decoded record borrowing from the bucket buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    /// Offset of the header within the bucket
    pub offset: usize,
    pub header: RecordHeader,
    pub key: &'a [u8],
    pub value: &'a [u8],
}

impl<'a> RawRecord<'a> {
    pub fn is_tombstone(&self) -> bool {
        self.header.is_tombstone()
    }

    /// Total bytes this record occupies in the bucket
    pub fn encoded_len(&self) -> usize {
        RECORD_HEADER_SIZE + self.key.len() + self.value.len()
    }
}

/// Forward cursor over the records of one bucket
///
/// Every read is checked against the remaining bytes; a record that would
/// run past the end of the buffer is reported as corruption and ends the
/// scan.
#[derive(Debug, Clone)]
pub struct RecordCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> RecordCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Offset of the next record header
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Decode the next record (live or tombstone)
    ///
    /// Returns `Ok(None)` at the end of the buffer.
    pub fn next_record(&mut self) -> Result<Option<RawRecord<'a>>> {
        if self.pos >= self.buf.len() {
            return Ok(None);
        }

        let buf = self.buf;
        let offset = self.pos;
        let mut rest = &buf[offset..];

        if rest.remaining() < RECORD_HEADER_SIZE {
            return Err(MapError::Corruption(format!(
                "truncated record header at offset {}: {} bytes remain",
                offset,
                rest.remaining()
            )));
        }

        let header = RecordHeader {
            key_len: rest.get_u64_le(),
            val_len: rest.get_u64_le(),
        };

        let body_len = header.body_len().ok_or_else(|| {
            MapError::Corruption(format!(
                "record at offset {} has unaddressable lengths ({}, {})",
                offset, header.key_len, header.val_len
            ))
        })?;

        if rest.remaining() < body_len {
            return Err(MapError::Corruption(format!(
                "record at offset {} needs {} body bytes, {} remain",
                offset,
                body_len,
                rest.remaining()
            )));
        }

        // body_len fits in usize, so key_len does too
        let key_len = header.key_len as usize;
        let key = &rest[..key_len];
        let value = &rest[key_len..body_len];

        self.pos = offset + RECORD_HEADER_SIZE + body_len;

        Ok(Some(RawRecord {
            offset,
            header,
            key,
            value,
        }))
    }
}

impl<'a> Iterator for RecordCursor<'a> {
    type Item = Result<RawRecord<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => {
                // No resynchronisation point after a bad header
                self.pos = self.buf.len();
                Some(Err(e))
            }
        }
    }
}
