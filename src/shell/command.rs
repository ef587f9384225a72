//! Command definitions
//!
//! Parses shell input lines of the form `<command>: <arguments>`.

use crate::error::{MapError, Result};

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Insert,
    Remove,
    Get,
}

impl CommandType {
    /// Look up a command by its name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "insert" => Some(CommandType::Insert),
            "remove" => Some(CommandType::Remove),
            "get" => Some(CommandType::Get),
            _ => None,
        }
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `insert: <key>, <value>`
    Insert { key: Vec<u8>, value: Vec<u8> },

    /// `remove: <key>`
    Remove { key: Vec<u8> },

    /// `get: <key>`
    Get { key: Vec<u8> },
}

impl Command {
    /// Parse one input line
    ///
    /// The command name ends at the first `:`. For `insert`, the key ends at
    /// the first `,` and the value is the rest of the line. All fields are
    /// trimmed.
    pub fn parse(line: &str) -> Result<Self> {
        let (name, args) = line
            .split_once(':')
            .ok_or_else(|| MapError::Parse("expected '<command>: <arguments>'".to_string()))?;
        let name = name.trim();

        let command_type = CommandType::from_name(name)
            .ok_or_else(|| MapError::Parse(format!("Unrecognized command: {}", name)))?;

        match command_type {
            CommandType::Insert => {
                let (key, value) = args
                    .split_once(',')
                    .ok_or_else(|| MapError::Parse("insert: expected '<key>, <value>'".to_string()))?;
                Ok(Command::Insert {
                    key: Self::parse_key(key)?,
                    value: value.trim().as_bytes().to_vec(),
                })
            }
            CommandType::Remove => Ok(Command::Remove {
                key: Self::parse_key(args)?,
            }),
            CommandType::Get => Ok(Command::Get {
                key: Self::parse_key(args)?,
            }),
        }
    }

    fn parse_key(raw: &str) -> Result<Vec<u8>> {
        let key = raw.trim();
        if key.is_empty() {
            return Err(MapError::Parse("missing key".to_string()));
        }
        Ok(key.as_bytes().to_vec())
    }

    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Insert { .. } => CommandType::Insert,
            Command::Remove { .. } => CommandType::Remove,
            Command::Get { .. } => CommandType::Get,
        }
    }
}
