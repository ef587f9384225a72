//! Bucket hashing
//!
//! Keys are hashed by feeding their raw bytes to the hasher (no length
//! prefix) and reducing `finish()` modulo the bucket count.

use std::fmt;
use std::hash::{BuildHasher, Hasher};

use foldhash::fast::FixedState;

use crate::config::HashKind;

/// Deterministic hasher selected by [`HashKind`]
#[derive(Clone)]
pub enum KeyHasher {
    Fold { seed: u64, state: FixedState },
    Crc32,
}

impl KeyHasher {
    pub fn from_kind(kind: HashKind) -> Self {
        match kind {
            HashKind::Fold { seed } => KeyHasher::Fold {
                seed,
                state: FixedState::with_seed(seed),
            },
            HashKind::Crc32 => KeyHasher::Crc32,
        }
    }

    pub fn kind(&self) -> HashKind {
        match self {
            KeyHasher::Fold { seed, .. } => HashKind::Fold { seed: *seed },
            KeyHasher::Crc32 => HashKind::Crc32,
        }
    }
}

impl Default for KeyHasher {
    fn default() -> Self {
        Self::from_kind(HashKind::default())
    }
}

impl fmt::Debug for KeyHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyHasher::Fold { seed, .. } => f.debug_struct("Fold").field("seed", seed).finish(),
            KeyHasher::Crc32 => f.write_str("Crc32"),
        }
    }
}

/// Running state produced by [`KeyHasher`]
pub enum KeyHasherState {
    Fold(<FixedState as BuildHasher>::Hasher),
    Crc32(crc32fast::Hasher),
}

impl Hasher for KeyHasherState {
    fn write(&mut self, bytes: &[u8]) {
        match self {
            KeyHasherState::Fold(h) => h.write(bytes),
            KeyHasherState::Crc32(h) => h.write(bytes),
        }
    }

    fn finish(&self) -> u64 {
        match self {
            KeyHasherState::Fold(h) => h.finish(),
            KeyHasherState::Crc32(h) => h.finish(),
        }
    }
}

impl BuildHasher for KeyHasher {
    type Hasher = KeyHasherState;

    fn build_hasher(&self) -> Self::Hasher {
        match self {
            KeyHasher::Fold { state, .. } => KeyHasherState::Fold(state.build_hasher()),
            KeyHasher::Crc32 => KeyHasherState::Crc32(crc32fast::Hasher::new()),
        }
    }
}

/// Hash raw key bytes with any `BuildHasher`
pub fn hash_key<S: BuildHasher>(state: &S, key: &[u8]) -> u64 {
    let mut hasher = state.build_hasher();
    hasher.write(key);
    hasher.finish()
}
