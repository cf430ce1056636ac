//! Timed game controller - the state machine that runs one round
//!
//! [`Game`] decides, once per [`Game::tick`], whether to spawn a piece, apply
//! gravity, lock the falling piece or apply the player's command, and returns a
//! new immutable snapshot. Board rules and scoring are delegated to the
//! collaborators in `tetrion_core`; cues go to a [`SoundPlayer`].
//!
//! # Module Structure
//!
//! - [`game`]: the controller and its transition priority chain
//! - [`gravity`]: level-dependent gravity delay
//! - [`sound`]: cue sinks and cue selection
//! - [`snapshot`]: serializable view of a game for traces
//!
//! # Timing
//!
//! The caller owns the clock. `tick` takes the milliseconds elapsed since the
//! previous call; time only advances while the game is not paused.
//!
//! - **Spawn delay**: 100ms between a lock and the next piece
//! - **Gravity**: 1000ms at level 1, see [`gravity_delay_ms`]
//! - **Lock delay**: 1000ms once the piece can no longer fall
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use tetrion_core::Playfield;
//! use tetrion_engine::{Game, NullSoundPlayer};
//! use tetrion_types::Command;
//!
//! let game = Game::new(Playfield::new(12345), Arc::new(NullSoundPlayer));
//! assert!(game.is_spawning());
//!
//! let game = game.tick(100, None);
//! assert!(game.is_idle());
//!
//! let game = game.tick(16, Some(Command::HardDrop));
//! assert!(game.is_spawning());
//! assert!(game.score() > 0);
//! assert_eq!(game.time(), 116);
//! ```

pub mod game;
pub mod gravity;
pub mod snapshot;
pub mod sound;

pub use tetrion_core as core;
pub use tetrion_types as types;

pub use game::Game;
pub use gravity::gravity_delay_ms;
pub use snapshot::{GameSnapshot, RewardSnapshot, TimersSnapshot};
pub use sound::{select_cue, LogSoundPlayer, NullSoundPlayer, RecordingSoundPlayer, SoundPlayer};
