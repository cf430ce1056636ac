//! Progress module - cumulative level, lines and score

use std::fmt;

use crate::contract::{ProgressTracker, Reward};
use crate::scoring::level_for_lines;

/// Level/lines/score accumulated over a game. Starts at level 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Progress {
    level: u32,
    lines: u32,
    score: u32,
}

impl Progress {
    pub fn new() -> Self {
        Self {
            level: 1,
            lines: 0,
            score: 0,
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressTracker for Progress {
    fn add<R: Reward>(&self, reward: &R) -> Self {
        let lines = self.lines.saturating_add(reward.lines_cleared());
        Self {
            level: level_for_lines(lines),
            lines,
            score: self.score.saturating_add(reward.points()),
        }
    }

    fn level(&self) -> u32 {
        self.level
    }

    fn lines(&self) -> u32 {
        self.lines
    }

    fn score(&self) -> u32 {
        self.score
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "level {} / lines {} / score {}",
            self.level, self.lines, self.score
        )
    }
}
