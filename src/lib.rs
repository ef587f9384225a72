//! # bytemap
//!
//! A minimal embedded key-value store:
//! - Chained-bucket hash map over arbitrary byte-string keys and values
//! - Each bucket is one growable byte buffer of packed records
//! - In-place tombstoning, with opt-in compaction and rehashing
//! - Borrowed views checked by the compiler against later mutation
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Caller / bytemap-shell / SyncByteMap            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ insert / get / remove / iter
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        ByteMap                               │
//! │            hash(key) % bucket_count → bucket                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼────────────┐
//!          ▼            ▼            ▼
//!   ┌────────────┐┌────────────┐┌────────────┐
//!   │  bucket 0  ││  bucket 1  ││    ...     │
//!   │ (Growable  ││ (Growable  ││            │
//!   │  Buffer)   ││  Buffer)   ││            │
//!   └────────────┘└────────────┘└────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use bytemap::ByteMap;
//!
//! # fn main() -> bytemap::Result<()> {
//! let mut map = ByteMap::new(8)?;
//! map.insert(b"hello", b"world")?;
//!
//! let entry = map.get(b"hello").expect("present");
//! assert_eq!(entry.value, b"world");
//!
//! map.remove(b"hello")?;
//! assert!(map.get(b"hello").is_none());
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod buffer;
pub mod map;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{MapError, Result};
pub use config::{Config, HashKind};
pub use buffer::GrowableBuffer;
pub use map::{ByteMap, Entry, MapStats, OwnedEntry, SyncByteMap};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of bytemap
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
