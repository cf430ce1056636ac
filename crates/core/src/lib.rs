//! Board engine and progress tracking - pure, deterministic collaborators
//!
//! This crate holds everything the timed controller delegates to:
//!
//! - [`contract`]: the traits the controller consumes ([`BoardEngine`],
//!   [`ProgressTracker`], [`Reward`]) and the [`Outcome`] value with its
//!   explicit `changed` flag
//! - [`board`]: 10x20 settled-cell grid with collision checks and line clearing
//! - [`pieces`]: Tetromino shapes and SRS rotation with wall kicks
//! - [`rng`]: seeded 7-bag piece generation
//! - [`scoring`]: line clear, T-spin, combo and drop points
//! - [`playfield`]: the bundled [`BoardEngine`] built from the pieces above
//! - [`progress`]: the bundled [`ProgressTracker`]
//!
//! Nothing here knows about time. Every operation takes `&self` and returns a
//! new value, so a sequence of calls can be replayed exactly from the same seed.
//!
//! # Example
//!
//! ```
//! use tetrion_core::{BoardEngine, Playfield, Progress, ProgressTracker};
//!
//! let field = Playfield::new(12345);
//! let spawned = field.spawn();
//! assert!(spawned.changed);
//!
//! let dropped = spawned.board.hard_drop(1);
//! assert!(!dropped.board.has_falling_piece());
//!
//! let progress = Progress::default().add(&dropped.reward.unwrap());
//! assert!(progress.score() > 0);
//! assert_eq!(progress.level(), 1);
//! ```

pub mod board;
pub mod contract;
pub mod pieces;
pub mod playfield;
pub mod progress;
pub mod rng;
pub mod scoring;

pub use tetrion_types as types;

pub use board::Board;
pub use contract::{BoardEngine, Outcome, ProgressTracker, Reward};
pub use pieces::Tetromino;
pub use playfield::{PlayReward, Playfield};
pub use progress::Progress;
pub use rng::PieceQueue;
