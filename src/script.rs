//! Command scripts for the headless runner.
//!
//! A script is a comma-separated list of command identifiers, one slot per
//! tick, replayed cyclically. `-` (or an empty slot) means "no command".
//!
//! ```
//! use tetrion::script::CommandScript;
//! use tetrion::types::Command;
//!
//! let script: CommandScript = "moveLeft, -, hardDrop".parse().unwrap();
//! assert_eq!(script.command_at(0), Some(Command::MoveLeft));
//! assert_eq!(script.command_at(1), None);
//! assert_eq!(script.command_at(5), Some(Command::HardDrop));
//! ```

use std::str::FromStr;

use crate::types::{Command, UnknownCommand};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("script slot {index}: {source}")]
    UnknownCommand {
        index: usize,
        #[source]
        source: UnknownCommand,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandScript {
    slots: Vec<Option<Command>>,
}

impl CommandScript {
    pub fn new(slots: Vec<Option<Command>>) -> Self {
        Self { slots }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Command for the given tick; the script wraps around.
    pub fn command_at(&self, tick: u64) -> Option<Command> {
        if self.slots.is_empty() {
            return None;
        }
        self.slots[(tick % self.slots.len() as u64) as usize]
    }
}

impl FromStr for CommandScript {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }

        let slots = s
            .split(',')
            .map(str::trim)
            .enumerate()
            .map(|(index, slot)| match slot {
                "" | "-" => Ok(None),
                name => name
                    .parse()
                    .map(Some)
                    .map_err(|source| ScriptError::UnknownCommand { index, source }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { slots })
    }
}
