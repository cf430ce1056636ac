//! Pieces module - Tetromino shapes and SRS rotation system
//!
//! Implements Standard Rotation System (SRS) with wall kick tables.
//! Reference: https://tetris.wiki/SRS

use crate::board::Board;
use crate::types::{PieceKind, Rotation};

/// Offset of a single mino relative to piece origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece origin
pub type PieceShape = [MinoOffset; 4];

/// Spawn position for new pieces (x, y)
pub const SPAWN_POSITION: (i8, i8) = (3, 0);

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    use Rotation::*;

    match (kind, rotation) {
        (PieceKind::I, North) => [(0, 1), (1, 1), (2, 1), (3, 1)],
        (PieceKind::I, East) => [(2, 0), (2, 1), (2, 2), (2, 3)],
        (PieceKind::I, South) => [(0, 2), (1, 2), (2, 2), (3, 2)],
        (PieceKind::I, West) => [(1, 0), (1, 1), (1, 2), (1, 3)],

        (PieceKind::O, _) => [(1, 0), (2, 0), (1, 1), (2, 1)],

        (PieceKind::T, North) => [(1, 0), (0, 1), (1, 1), (2, 1)],
        (PieceKind::T, East) => [(1, 0), (1, 1), (2, 1), (1, 2)],
        (PieceKind::T, South) => [(0, 1), (1, 1), (2, 1), (1, 2)],
        (PieceKind::T, West) => [(1, 0), (0, 1), (1, 1), (1, 2)],

        (PieceKind::S, North) => [(1, 0), (2, 0), (0, 1), (1, 1)],
        (PieceKind::S, East) => [(1, 0), (1, 1), (2, 1), (2, 2)],
        (PieceKind::S, South) => [(1, 1), (2, 1), (0, 2), (1, 2)],
        (PieceKind::S, West) => [(0, 0), (0, 1), (1, 1), (1, 2)],

        (PieceKind::Z, North) => [(0, 0), (1, 0), (1, 1), (2, 1)],
        (PieceKind::Z, East) => [(2, 0), (1, 1), (2, 1), (1, 2)],
        (PieceKind::Z, South) => [(0, 1), (1, 1), (1, 2), (2, 2)],
        (PieceKind::Z, West) => [(1, 0), (0, 1), (1, 1), (0, 2)],

        (PieceKind::J, North) => [(0, 0), (0, 1), (1, 1), (2, 1)],
        (PieceKind::J, East) => [(1, 0), (2, 0), (1, 1), (1, 2)],
        (PieceKind::J, South) => [(0, 1), (1, 1), (2, 1), (2, 2)],
        (PieceKind::J, West) => [(1, 0), (1, 1), (0, 2), (1, 2)],

        (PieceKind::L, North) => [(2, 0), (0, 1), (1, 1), (2, 1)],
        (PieceKind::L, East) => [(1, 0), (1, 1), (1, 2), (2, 2)],
        (PieceKind::L, South) => [(0, 1), (1, 1), (2, 1), (0, 2)],
        (PieceKind::L, West) => [(0, 0), (1, 0), (1, 1), (1, 2)],
    }
}

/// SRS wall kick data, indexed by [`kick_index`]
/// Entry 0 is the unkicked rotation, 1-4 are the kicks
pub type KickTable = [[(i8, i8); 5]; 8];

/// JLSTZ kick table (shared by J, L, S, T, Z)
const JLSTZ_KICKS: KickTable = [
    // N->E
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // N->W
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // E->N
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // E->S
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // S->E
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // S->W
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // W->S
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // W->N
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
];

/// I piece kick table
const I_KICKS: KickTable = [
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
];

pub fn get_kick_table(kind: PieceKind) -> &'static KickTable {
    match kind {
        PieceKind::I => &I_KICKS,
        _ => &JLSTZ_KICKS,
    }
}

fn kick_index(from: Rotation, clockwise: bool) -> usize {
    match (from, clockwise) {
        (Rotation::North, true) => 0,
        (Rotation::North, false) => 1,
        (Rotation::East, false) => 2,
        (Rotation::East, true) => 3,
        (Rotation::South, false) => 4,
        (Rotation::South, true) => 5,
        (Rotation::West, false) => 6,
        (Rotation::West, true) => 7,
    }
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
        }
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Check if all minos are at valid positions on the board
    pub fn fits(&self, board: &Board) -> bool {
        board.fits(&self.shape(), self.x, self.y)
    }

    /// Copy of this piece shifted by (dx, dy), if it fits
    pub fn shifted(&self, board: &Board, dx: i8, dy: i8) -> Option<Self> {
        let moved = Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        };
        moved.fits(board).then_some(moved)
    }

    /// Number of rows the piece can fall before it rests on something
    pub fn drop_distance(&self, board: &Board) -> u8 {
        let shape = self.shape();
        let mut distance: u8 = 0;
        while board.fits(&shape, self.x, self.y + distance as i8 + 1) {
            distance += 1;
        }
        distance
    }

    /// Rotate with SRS wall kicks; None if every kick collides (O never rotates)
    pub fn rotated(&self, board: &Board, clockwise: bool) -> Option<Self> {
        if self.kind == PieceKind::O {
            return None;
        }

        let rotation = if clockwise {
            self.rotation.rotate_cw()
        } else {
            self.rotation.rotate_ccw()
        };
        let shape = get_shape(self.kind, rotation);
        let kicks = &get_kick_table(self.kind)[kick_index(self.rotation, clockwise)];

        kicks.iter().find_map(|&(dx, dy)| {
            board.fits(&shape, self.x + dx, self.y + dy).then_some(Self {
                rotation,
                x: self.x + dx,
                y: self.y + dy,
                ..*self
            })
        })
    }
}
