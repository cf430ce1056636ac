//! Flat, serializable view of a [`Game`] for traces and debugging.
//!
//! Diagnostic only: field names may change between versions.

use serde::{Deserialize, Serialize};

use crate::core::{BoardEngine, ProgressTracker, Reward};
use crate::game::Game;
use crate::types::Phase;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimersSnapshot {
    pub spawn_ms: u64,
    pub lock_ms: u64,
    pub gravity_ms: u64,
    pub gravity_delay_ms: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RewardSnapshot {
    pub lines: u32,
    pub points: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: u64,
    pub phase: Phase,
    pub paused: bool,
    pub muted: bool,
    pub level: u32,
    pub lines: u32,
    pub score: u32,
    pub falling: bool,
    pub grounded: bool,
    pub reward: Option<RewardSnapshot>,
    pub timers: TimersSnapshot,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase != Phase::Finished && !self.paused
    }
}

impl<B: BoardEngine, P: ProgressTracker> Game<B, P> {
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let board = self.board();

        out.time = self.time();
        out.phase = self.phase();
        out.paused = self.paused();
        out.muted = self.muted();
        out.level = self.level();
        out.lines = self.lines();
        out.score = self.score();
        out.falling = board.has_falling_piece();
        out.grounded = board.has_falling_piece() && !board.can_move_down();
        out.reward = self.reward().map(|reward| RewardSnapshot {
            lines: reward.lines_cleared(),
            points: reward.points(),
        });
        out.timers = TimersSnapshot {
            spawn_ms: self.spawn_timer(),
            lock_ms: self.lock_timer(),
            gravity_ms: self.gravity_timer(),
            gravity_delay_ms: self.gravity_delay(),
        };
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
