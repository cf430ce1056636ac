//! Sound cue output.
//!
//! The controller hands cues to a [`SoundPlayer`] and never waits on or
//! inspects the result. Actual audio lives outside this workspace; the players
//! here discard, log or record cues.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use crate::types::Cue;

/// Fire-and-forget cue sink. Implementations must not panic and cannot fail the caller.
pub trait SoundPlayer: fmt::Debug + Send + Sync {
    fn play(&self, cue: Cue);
}

/// Pick the cue for a board mutation: level-up beats line-clear beats `default`.
pub fn select_cue(default: Cue, cleared_lines: bool, leveled_up: bool) -> Cue {
    if leveled_up {
        Cue::LevelUp
    } else if cleared_lines {
        Cue::ClearLine
    } else {
        default
    }
}

/// Discards every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSoundPlayer;

impl SoundPlayer for NullSoundPlayer {
    fn play(&self, _cue: Cue) {}
}

/// Writes each cue name to the `tetrion::sound` log target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSoundPlayer;

impl SoundPlayer for LogSoundPlayer {
    fn play(&self, cue: Cue) {
        log::info!(target: "tetrion::sound", "{}", cue);
    }
}

/// Keeps cues in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSoundPlayer {
    cues: Mutex<Vec<Cue>>,
}

impl RecordingSoundPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far
    pub fn cues(&self) -> Vec<Cue> {
        self.cues
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain the recording
    pub fn take(&self) -> Vec<Cue> {
        std::mem::take(&mut *self.cues.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl SoundPlayer for RecordingSoundPlayer {
    fn play(&self, cue: Cue) {
        self.cues
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(cue);
    }
}
