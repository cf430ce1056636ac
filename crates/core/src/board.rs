//! Settled cells of the playfield.
//!
//! 10 columns by 20 rows, `(x, y)` with y growing downwards. Storage is an
//! array of rows so clearing shifts whole rows and cloning stays a plain copy.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

type Row = [Cell; WIDTH];

const EMPTY_ROW: Row = [None; WIDTH];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [Row; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            rows: [EMPTY_ROW; HEIGHT],
        }
    }

    fn slot(x: i8, y: i8) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok().filter(|&x| x < WIDTH)?;
        let y = usize::try_from(y).ok().filter(|&y| y < HEIGHT)?;
        Some((x, y))
    }

    /// `None` outside the board, `Some(cell)` inside.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::slot(x, y).map(|(x, y)| self.rows[y][x])
    }

    /// Returns false when out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        let Some((x, y)) = Self::slot(x, y) else {
            return false;
        };
        self.rows[y][x] = cell;
        true
    }

    /// In bounds and empty.
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        self.get(x, y) == Some(None)
    }

    pub fn fits(&self, shape: &[(i8, i8)], x: i8, y: i8) -> bool {
        shape.iter().all(|&(dx, dy)| self.is_free(x + dx, y + dy))
    }

    /// Remove complete rows, dropping everything above them.
    ///
    /// Returns the removed row indices, bottom row first. At most four rows
    /// are removed per call, which is all a single piece can complete.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared = ArrayVec::new();
        let mut target = HEIGHT;

        for y in (0..HEIGHT).rev() {
            let full = self.rows[y].iter().all(Option::is_some);
            if full && cleared.try_push(y).is_ok() {
                continue;
            }
            target -= 1;
            self.rows[target] = self.rows[y];
        }
        self.rows[..target].fill(EMPTY_ROW);

        cleared
    }

    /// Write `kind` into every cell of `shape` at `(x, y)`.
    ///
    /// Leaves the board untouched and returns false if the shape does not fit.
    pub fn stamp(&mut self, shape: &[(i8, i8)], x: i8, y: i8, kind: PieceKind) -> bool {
        if !self.fits(shape, x, y) {
            return false;
        }
        for &(dx, dy) in shape {
            self.set(x + dx, y + dy, Some(kind));
        }
        true
    }

    pub fn filled_count(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: i8) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, Some(PieceKind::I));
        }
    }

    #[test]
    fn test_bounds() {
        let board = Board::new();
        assert_eq!(board.get(0, 0), Some(None));
        assert_eq!(board.get(9, 19), Some(None));
        assert_eq!(board.get(-1, 0), None);
        assert_eq!(board.get(10, 0), None);
        assert_eq!(board.get(0, 20), None);
        assert_eq!(board.rows().len(), 20);
    }

    #[test]
    fn test_set_and_is_free() {
        let mut board = Board::new();
        assert!(board.is_free(5, 10));

        assert!(board.set(5, 10, Some(PieceKind::T)));
        assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
        assert!(!board.is_free(5, 10));

        assert!(!board.set(-1, 0, Some(PieceKind::T)));
        assert!(!board.is_free(0, BOARD_HEIGHT as i8));
    }

    #[test]
    fn test_clear_full_rows_compacts_downwards() {
        let mut board = Board::new();
        fill_row(&mut board, 19);
        fill_row(&mut board, 17);
        board.set(0, 18, Some(PieceKind::O));
        board.set(4, 16, Some(PieceKind::Z));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 17]);

        assert_eq!(board.get(0, 19), Some(Some(PieceKind::O)));
        assert_eq!(board.get(4, 18), Some(Some(PieceKind::Z)));
        assert_eq!(board.filled_count(), 2);
        assert!(board.rows()[..18].iter().flatten().all(Option::is_none));
    }

    #[test]
    fn test_clear_full_rows_none_full() {
        let mut board = Board::new();
        board.set(3, 19, Some(PieceKind::L));
        let before = board.clone();

        assert!(board.clear_full_rows().is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn test_stamp_rejects_overlap() {
        let mut board = Board::new();
        let shape = [(0, 0), (1, 0), (0, 1), (1, 1)];
        board.set(1, 1, Some(PieceKind::I));
        let before = board.clone();

        assert!(!board.stamp(&shape, 0, 0, PieceKind::O));
        assert_eq!(board, before);

        assert!(board.stamp(&shape, 4, 4, PieceKind::O));
        assert_eq!(board.filled_count(), 5);
    }
}
