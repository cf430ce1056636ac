//! Collaborator contracts consumed by the game controller.
//!
//! The controller never looks inside a board or a progress value. It only
//! calls the operations below and reads the explicit `changed` flag of each
//! [`Outcome`]. Board values are immutable: every operation returns a new one.

use std::fmt;

/// Result of a board-engine operation.
///
/// `changed` is the only "did anything happen" signal. Callers must not fall
/// back to comparing boards: an engine is free to return an unchanged but
/// distinct value, or a changed value that compares equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<B, R> {
    pub board: B,
    pub reward: Option<R>,
    pub changed: bool,
}

impl<B, R> Outcome<B, R> {
    pub fn changed(board: B, reward: Option<R>) -> Self {
        Self {
            board,
            reward,
            changed: true,
        }
    }

    pub fn unchanged(board: B) -> Self {
        Self {
            board,
            reward: None,
            changed: false,
        }
    }
}

/// Outcome of a board mutation, merged into progress by the controller.
pub trait Reward: Clone + fmt::Debug {
    fn lines_cleared(&self) -> u32;

    fn points(&self) -> u32;
}

/// Board engine: piece/board model, collision, line clears and piece generation.
///
/// `level` is the controller's current 1-based level, passed through for
/// engines with level-dependent rules.
pub trait BoardEngine: Clone {
    type Reward: Reward;

    /// Bring the next piece into play; `changed == false` means the spawn area is blocked.
    fn spawn(&self) -> Outcome<Self, Self::Reward>;

    /// Move the falling piece down one row; also serves the `moveDown` command.
    fn move_down(&self) -> Outcome<Self, Self::Reward>;

    /// Fix the falling piece to the board.
    fn lock(&self, level: u32) -> (Self, Self::Reward);

    fn move_left(&self, level: u32) -> Outcome<Self, Self::Reward>;

    fn move_right(&self, level: u32) -> Outcome<Self, Self::Reward>;

    fn soft_drop(&self, level: u32) -> Outcome<Self, Self::Reward>;

    fn rotate_left(&self, level: u32) -> Outcome<Self, Self::Reward>;

    fn rotate_right(&self, level: u32) -> Outcome<Self, Self::Reward>;

    fn firm_drop(&self, level: u32) -> Outcome<Self, Self::Reward>;

    fn hard_drop(&self, level: u32) -> Outcome<Self, Self::Reward>;

    fn hold(&self, level: u32) -> Outcome<Self, Self::Reward>;

    fn has_falling_piece(&self) -> bool;

    fn can_move_down(&self) -> bool;
}

/// Progress tracker: cumulative level, lines and score.
///
/// Implementations must keep `level() >= 1`.
pub trait ProgressTracker: Clone {
    /// New progress with `reward` merged in.
    fn add<R: Reward>(&self, reward: &R) -> Self;

    fn level(&self) -> u32;

    fn lines(&self) -> u32;

    fn score(&self) -> u32;
}
