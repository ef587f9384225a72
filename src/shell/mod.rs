//! Shell Module
//!
//! Line-oriented front end over a [`ByteMap`], used by the `bytemap-shell`
//! binary.
//!
//! ## Commands
//! - `insert: <key>, <value>`
//! - `remove: <key>`
//! - `get: <key>`
//!
//! After every successful command the shell can render the live keys and a
//! per-bucket dump of the map.

mod command;

pub use command::{Command, CommandType};

use std::fmt::{self, Write as _};
use std::hash::BuildHasher;

use crate::error::{MapError, Result};
use crate::map::{ByteMap, KeyHasher, OwnedEntry};

/// Usage text printed on startup
pub const USAGE: &str = "Usage:\n  > insert: <key>, <value>\n  > remove: <key>\n  > get: <key>\n";

/// Result of executing one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Inserted,
    Removed,
    Found(OwnedEntry),
    NotFound { key: Vec<u8> },
}

impl Outcome {
    /// Whether the command did what it asked for
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::NotFound { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Inserted => write!(f, "inserted"),
            Outcome::Removed => write!(f, "removed"),
            Outcome::Found(entry) => write!(
                f,
                "found: ({}, {})",
                String::from_utf8_lossy(&entry.key),
                String::from_utf8_lossy(&entry.value)
            ),
            Outcome::NotFound { key } => {
                write!(f, "key not found: {}", String::from_utf8_lossy(key))
            }
        }
    }
}

/// Interactive command executor
pub struct Shell<S = KeyHasher> {
    map: ByteMap<S>,
}

impl<S: BuildHasher> Shell<S> {
    pub fn new(map: ByteMap<S>) -> Self {
        Self { map }
    }

    pub fn map(&self) -> &ByteMap<S> {
        &self.map
    }

    pub fn into_map(self) -> ByteMap<S> {
        self.map
    }

    /// Parse and execute one input line
    pub fn execute_line(&mut self, line: &str) -> Result<Outcome> {
        let command = Command::parse(line)?;
        self.execute(command)
    }

    /// Execute a parsed command
    ///
    /// A missing key is reported as `Outcome::NotFound`, not as an error.
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        tracing::debug!(command = ?command.command_type(), "executing");

        match command {
            Command::Insert { key, value } => {
                self.map.insert(&key, &value)?;
                Ok(Outcome::Inserted)
            }
            Command::Remove { key } => match self.map.remove(&key) {
                Ok(()) => Ok(Outcome::Removed),
                Err(MapError::KeyNotFound) => Ok(Outcome::NotFound { key }),
                Err(e) => Err(e),
            },
            Command::Get { key } => Ok(match self.map.get(&key) {
                Some(entry) => Outcome::Found(entry.into_owned()),
                None => Outcome::NotFound { key },
            }),
        }
    }

    /// `keys: k1, k2, ...` in iteration order
    pub fn dump_keys(&self) -> String {
        let keys: Vec<_> = self
            .map
            .iter()
            .map(|entry| String::from_utf8_lossy(entry.key).into_owned())
            .collect();
        format!("keys: {}", keys.join(", "))
    }

    /// One line per bucket listing its live `(key, value)` pairs
    pub fn dump_buckets(&self) -> String {
        let mut out = String::from("buckets:");
        for index in 0..self.map.bucket_count() {
            let _ = write!(out, "\n{}:", index);
            if let Some(bucket) = self.map.bucket(index) {
                for entry in bucket {
                    let _ = write!(
                        out,
                        " ({}, {})",
                        String::from_utf8_lossy(entry.key),
                        String::from_utf8_lossy(entry.value)
                    );
                }
            }
        }
        out
    }
}
