//! GrowableBuffer implementation
//!
//! Vec-backed byte buffer with fallible, explicitly controlled growth.

use crate::error::{MapError, Result};

/// Smallest allocation made when a buffer first grows
pub const MIN_CAPACITY: usize = 64;

/// Contiguous, append-only byte buffer
#[derive(Debug, Clone, Default)]
pub struct GrowableBuffer {
    /// Backing storage; `data.len()` is the in-use length
    data: Vec<u8>,
}

impl GrowableBuffer {
    /// Create an empty buffer (no allocation)
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a buffer with at least `capacity` bytes reserved
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut buffer = Self::new();
        if capacity > 0 {
            buffer
                .data
                .try_reserve_exact(capacity)
                .map_err(|_| MapError::AllocationFailed { requested: capacity })?;
        }
        Ok(buffer)
    }

    /// Bytes currently in use
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes currently allocated
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Borrowed view of `[0, len)`
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Append `bytes` to the end, growing if needed
    pub fn append(&mut self, bytes: &[u8]) -> Result<()> {
        self.append_all(&[bytes])
    }

    /// Append several slices as one unit
    ///
    /// Capacity for the combined length is reserved before any byte is
    /// copied, so on failure the buffer is exactly as it was.
    pub fn append_all(&mut self, parts: &[&[u8]]) -> Result<()> {
        let additional = parts
            .iter()
            .try_fold(0usize, |acc, part| acc.checked_add(part.len()))
            .ok_or(MapError::AllocationFailed {
                requested: usize::MAX,
            })?;

        self.reserve(additional)?;

        for part in parts {
            self.data.extend_from_slice(part);
        }
        Ok(())
    }

    /// Ensure room for `additional` more bytes
    ///
    /// Growth policy: new capacity is the larger of twice the current
    /// capacity and the required size, never below `MIN_CAPACITY`.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        let required = self
            .data
            .len()
            .checked_add(additional)
            .ok_or(MapError::AllocationFailed {
                requested: usize::MAX,
            })?;

        let old_capacity = self.data.capacity();
        if required <= old_capacity {
            return Ok(());
        }

        let target = required
            .max(old_capacity.saturating_mul(2))
            .max(MIN_CAPACITY);

        self.data
            .try_reserve_exact(target - self.data.len())
            .map_err(|_| MapError::AllocationFailed { requested: target })?;

        tracing::trace!(
            old_capacity,
            new_capacity = self.data.capacity(),
            len = self.data.len(),
            "buffer grown"
        );
        Ok(())
    }

    /// Overwrite bytes in place within `[0, len)`
    ///
    /// Never changes length or capacity.
    pub fn overwrite(&mut self, offset: usize, bytes: &[u8]) -> Result<()> {
        let end = offset
            .checked_add(bytes.len())
            .filter(|&end| end <= self.data.len())
            .ok_or(MapError::OutOfBounds {
                offset,
                len: bytes.len(),
                buffer_len: self.data.len(),
            })?;

        self.data[offset..end].copy_from_slice(bytes);
        Ok(())
    }

    /// Drop all contents but keep the allocation
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Release the allocation; length and capacity become zero
    ///
    /// Calling this on an already-freed buffer is a no-op.
    pub fn free(&mut self) {
        self.data = Vec::new();
    }
}

impl AsRef<[u8]> for GrowableBuffer {
    fn as_ref(&self) -> &[u8] {
        self.data()
    }
}
