//! Configuration for bytemap
//!
//! Centralized configuration with sensible defaults.

use crate::error::{MapError, Result};

/// Main configuration for a ByteMap instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Table Configuration
    // -------------------------------------------------------------------------
    /// Number of buckets, fixed for the lifetime of the map (until `rehash`)
    pub bucket_count: usize,

    /// Hash function used to pick a bucket for each key
    pub hasher: HashKind,

    // -------------------------------------------------------------------------
    // Buffer Configuration
    // -------------------------------------------------------------------------
    /// Bytes reserved up front in every bucket (0 = allocate lazily)
    pub initial_bucket_capacity: usize,
}

/// Hash function selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashKind {
    /// foldhash with a fixed seed (fast, default)
    Fold { seed: u64 },

    /// CRC32 of the key bytes
    Crc32,
}

impl Default for HashKind {
    fn default() -> Self {
        HashKind::Fold { seed: 0 }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bucket_count: 8,
            hasher: HashKind::default(),
            initial_bucket_capacity: 0,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the config describes a constructible map
    pub fn validate(&self) -> Result<()> {
        if self.bucket_count == 0 {
            return Err(MapError::InvalidBucketCount(0));
        }
        if self
            .bucket_count
            .checked_mul(self.initial_bucket_capacity)
            .is_none()
        {
            return Err(MapError::Config(format!(
                "initial_bucket_capacity {} overflows across {} buckets",
                self.initial_bucket_capacity, self.bucket_count
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the number of buckets
    pub fn bucket_count(mut self, count: usize) -> Self {
        self.config.bucket_count = count;
        self
    }

    /// Set the hash function
    pub fn hasher(mut self, kind: HashKind) -> Self {
        self.config.hasher = kind;
        self
    }

    /// Set the per-bucket capacity reserved at construction (in bytes)
    pub fn initial_bucket_capacity(mut self, bytes: usize) -> Self {
        self.config.initial_bucket_capacity = bytes;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
