//! Core types module - shared vocabulary and constants
//!
//! This crate defines the small closed sets every other crate agrees on:
//! player commands, sound cues, controller phases and the tetromino
//! vocabulary used by the bundled board engine. Nothing here has behavior
//! beyond parsing and naming.
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds, on the same clock as the controller's
//! accumulated `time`:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep used by the headless runner (~60 FPS) |
//! | `SPAWN_DELAY_MS` | 100 | Wait between a lock and the next piece |
//! | `LOCK_DELAY_MS` | 1000 | Grace period before a grounded piece locks |
//!
//! Gravity is not a constant: it is a function of the level, see
//! `tetrion_engine::gravity_delay_ms`.
//!
//! # Examples
//!
//! ```
//! use tetrion_types::{Command, Cue, Phase};
//!
//! let command: Command = "hardDrop".parse().unwrap();
//! assert_eq!(command, Command::HardDrop);
//! assert_eq!(command.cue(), Cue::Drop);
//! assert_eq!(Cue::ClearLine.as_str(), "clear-line");
//!
//! assert!("teleport".parse::<Command>().is_err());
//! assert_eq!(Phase::default(), Phase::Spawning);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Wait between a piece locking and the next piece becoming controllable.
pub const SPAWN_DELAY_MS: u64 = 100;

/// Grace period after a piece can no longer fall before it is fixed to the board.
pub const LOCK_DELAY_MS: u64 = 1000;

/// Lines needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;


/// Player commands accepted by the controller.
///
/// The set is closed: the controller dispatches each variant to exactly one
/// board-engine operation and there is no way to name anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (no drop score)
    MoveDown,
    /// Move piece one cell down, scoring one point per cell
    SoftDrop,
    /// Rotate piece 90° counter-clockwise
    RotateLeft,
    /// Rotate piece 90° clockwise
    RotateRight,
    /// Drop piece to the floor without locking it
    FirmDrop,
    /// Drop piece to the floor and lock it immediately
    HardDrop,
    /// Swap piece with the hold slot (once per piece)
    Hold,
}

impl Command {
    /// Every command, in declaration order.
    pub const ALL: [Command; 9] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::MoveDown,
        Command::SoftDrop,
        Command::RotateLeft,
        Command::RotateRight,
        Command::FirmDrop,
        Command::HardDrop,
        Command::Hold,
    ];

    /// Convert to the camelCase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::MoveDown => "moveDown",
            Command::SoftDrop => "softDrop",
            Command::RotateLeft => "rotateLeft",
            Command::RotateRight => "rotateRight",
            Command::FirmDrop => "firmDrop",
            Command::HardDrop => "hardDrop",
            Command::Hold => "hold",
        }
    }

    /// Sound cue for this command's category.
    pub fn cue(&self) -> Cue {
        match self {
            Command::MoveLeft | Command::MoveRight | Command::MoveDown | Command::SoftDrop => {
                Cue::Move
            }
            Command::RotateLeft | Command::RotateRight => Cue::Rotate,
            Command::FirmDrop | Command::HardDrop => Cue::Drop,
            Command::Hold => Cue::Hold,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a command identifier is not part of the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command identifier: {0}")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    /// Parse a command identifier (case-insensitive, surrounding whitespace ignored)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "moveleft" => Ok(Command::MoveLeft),
            "moveright" => Ok(Command::MoveRight),
            "movedown" => Ok(Command::MoveDown),
            "softdrop" => Ok(Command::SoftDrop),
            "rotateleft" => Ok(Command::RotateLeft),
            "rotateright" => Ok(Command::RotateRight),
            "firmdrop" => Ok(Command::FirmDrop),
            "harddrop" => Ok(Command::HardDrop),
            "hold" => Ok(Command::Hold),
            _ => Err(UnknownCommand(s.to_string())),
        }
    }
}

/// Sound cues emitted by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cue {
    Move,
    Rotate,
    Drop,
    Lock,
    Hold,
    ClearLine,
    LevelUp,
    GameOver,
}

impl Cue {
    /// Cue name as handed to a sound backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::Move => "move",
            Cue::Rotate => "rotate",
            Cue::Drop => "drop",
            Cue::Lock => "lock",
            Cue::Hold => "hold",
            Cue::ClearLine => "clear-line",
            Cue::LevelUp => "level-up",
            Cue::GameOver => "game-over",
        }
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Controller phase.
///
/// - **Spawning**: waiting out the spawn delay before the next piece appears
/// - **Idle**: a piece is falling under gravity
/// - **Locking**: the piece is blocked and the lock delay is running
/// - **Finished**: a spawn failed; absorbing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Spawning,
    Idle,
    Locking,
    Finished,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Spawning => "spawning",
            Phase::Idle => "idle",
            Phase::Locking => "locking",
            Phase::Finished => "finished",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in bag order before shuffling.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// Rotation states following the Super Rotation System (SRS)
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use tetrion_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90° or 270°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

/// T-Spin detection result
///
/// - **None**: Not a T-spin
/// - **Mini**: 3+ corners filled but not both front corners
/// - **Full**: 3+ corners filled including both front corners
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TSpinKind {
    #[default]
    None,
    Mini,
    Full,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the specified piece kind
pub type Cell = Option<PieceKind>;

/// Line clear scoring table (Classic Nintendo scoring)
///
/// Base points for clearing N lines at level 1:
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Points are multiplied by the (1-based) level.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Combo scoring base value (50 points per combo step)
pub const COMBO_BASE: u32 = 50;

/// Back-to-back bonus numerator (3/2 = 1.5x multiplier)
pub const B2B_NUMERATOR: u32 = 3;

/// Back-to-back bonus denominator
pub const B2B_DENOMINATOR: u32 = 2;
