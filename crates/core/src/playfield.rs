//! Playfield module - the bundled board engine
//!
//! A `Playfield` is the settled board plus the falling piece, hold slot,
//! piece queue and the combo/back-to-back bookkeeping scoring needs. It
//! implements [`BoardEngine`]: every operation clones the receiver, applies
//! one rule and reports through [`Outcome::changed`] whether anything moved.
//! Blocked moves and blocked spawns are ordinary results, never errors.

use crate::contract::{BoardEngine, Outcome, Reward};
use crate::pieces::Tetromino;
use crate::rng::PieceQueue;
use crate::scoring::{drop_points, LockScore};
use crate::types::{PieceKind, Rotation, TSpinKind};
use crate::Board;

/// Points and line clears produced by a single playfield operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayReward {
    pub lines_cleared: u32,
    pub points: u32,
    pub tspin: TSpinKind,
    /// The operation fixed a piece to the board.
    pub locked: bool,
}

impl PlayReward {
    fn drop(cells: u32, is_hard_drop: bool) -> Self {
        Self {
            points: drop_points(cells, is_hard_drop),
            ..Self::default()
        }
    }
}

impl Reward for PlayReward {
    fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    fn points(&self) -> u32 {
        self.points
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playfield {
    board: Board,
    active: Option<Tetromino>,
    hold: Option<PieceKind>,
    can_hold: bool,
    queue: PieceQueue,
    /// -1 when no combo chain is running.
    combo: i32,
    back_to_back: bool,
    last_action_was_rotate: bool,
}

type Step = Outcome<Playfield, PlayReward>;

impl Playfield {
    /// Empty playfield with no falling piece
    pub fn new(seed: u32) -> Self {
        Self::with_board(Board::new(), seed)
    }

    /// Playfield over pre-filled settled cells (puzzles, tests)
    pub fn with_board(board: Board, seed: u32) -> Self {
        Self {
            board,
            active: None,
            hold: None,
            can_hold: true,
            queue: PieceQueue::new(seed),
            combo: -1,
            back_to_back: false,
            last_action_was_rotate: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    /// Kind the next spawn will use
    pub fn next_piece(&self) -> PieceKind {
        self.queue.peek()
    }

    /// Row the falling piece would land on
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        Some(active.y + active.drop_distance(&self.board) as i8)
    }

    /// Replace the falling piece with `next`, or report no change when there is none
    fn step_to(&self, next: Option<Tetromino>, rotated: bool, reward: Option<PlayReward>) -> Step {
        match next {
            Some(piece) => {
                let mut field = self.clone();
                field.active = Some(piece);
                field.last_action_was_rotate = rotated;
                Outcome::changed(field, reward)
            }
            None => Outcome::unchanged(self.clone()),
        }
    }

    fn shift(&self, dx: i8, dy: i8) -> Step {
        let next = self
            .active
            .and_then(|piece| piece.shifted(&self.board, dx, dy));
        // Sideways movement cancels a pending T-spin; falling keeps it.
        let rotated = dx == 0 && self.last_action_was_rotate;
        self.step_to(next, rotated, None)
    }

    fn rotate(&self, clockwise: bool) -> Step {
        let next = self
            .active
            .and_then(|piece| piece.rotated(&self.board, clockwise));
        self.step_to(next, true, None)
    }

    /// Stamp the falling piece, clear rows and score the result
    fn lock_in_place(&mut self, level: u32) -> PlayReward {
        let Some(piece) = self.active.take() else {
            return PlayReward::default();
        };

        let tspin = if piece.kind == PieceKind::T {
            self.t_spin_kind(&piece)
        } else {
            TSpinKind::None
        };

        if !self.board.stamp(&piece.shape(), piece.x, piece.y, piece.kind) {
            log::warn!(
                "lock of {:?} at ({}, {}) overlaps settled cells",
                piece.kind,
                piece.x,
                piece.y
            );
        }
        let lines = self.board.clear_full_rows().len();

        let points = if lines > 0 {
            self.combo += 1;
            let score = LockScore::new(lines, level, tspin, self.combo, self.back_to_back);
            self.back_to_back = score.difficult;
            score.total()
        } else {
            self.combo = -1;
            LockScore::new(0, level, tspin, -1, false).total()
        };

        self.can_hold = true;
        self.last_action_was_rotate = false;

        PlayReward {
            lines_cleared: lines as u32,
            points,
            tspin,
            locked: true,
        }
    }

    /// T-spin type from corner occupancy around the T's 3x3 box
    fn t_spin_kind(&self, piece: &Tetromino) -> TSpinKind {
        if !self.last_action_was_rotate {
            return TSpinKind::None;
        }

        let blocked = |&(cx, cy): &(i8, i8)| !self.board.is_free(piece.x + cx, piece.y + cy);
        let corners = [(0, 0), (2, 0), (0, 2), (2, 2)];
        if corners.iter().filter(|c| blocked(c)).count() < 3 {
            return TSpinKind::None;
        }

        // The two corners on the side the T points to.
        let front = match piece.rotation {
            Rotation::North => [(0, 0), (2, 0)],
            Rotation::East => [(2, 0), (2, 2)],
            Rotation::South => [(0, 2), (2, 2)],
            Rotation::West => [(0, 0), (0, 2)],
        };
        if front.iter().all(blocked) {
            TSpinKind::Full
        } else {
            TSpinKind::Mini
        }
    }
}

impl BoardEngine for Playfield {
    type Reward = PlayReward;

    /// Spawning while a piece is still falling is a no-op.
    fn spawn(&self) -> Step {
        if self.active.is_some() {
            return Outcome::unchanged(self.clone());
        }

        let piece = Tetromino::new(self.queue.peek());
        if !piece.fits(&self.board) {
            return Outcome::unchanged(self.clone());
        }

        let mut field = self.clone();
        field.queue.draw();
        field.active = Some(piece);
        field.can_hold = true;
        field.last_action_was_rotate = false;
        Outcome::changed(field, None)
    }

    fn move_down(&self) -> Step {
        self.shift(0, 1)
    }

    fn lock(&self, level: u32) -> (Self, PlayReward) {
        let mut field = self.clone();
        let reward = field.lock_in_place(level);
        (field, reward)
    }

    fn move_left(&self, _level: u32) -> Step {
        self.shift(-1, 0)
    }

    fn move_right(&self, _level: u32) -> Step {
        self.shift(1, 0)
    }

    fn soft_drop(&self, _level: u32) -> Step {
        let mut step = self.shift(0, 1);
        if step.changed {
            step.reward = Some(PlayReward::drop(1, false));
        }
        step
    }

    fn rotate_left(&self, _level: u32) -> Step {
        self.rotate(false)
    }

    fn rotate_right(&self, _level: u32) -> Step {
        self.rotate(true)
    }

    fn firm_drop(&self, _level: u32) -> Step {
        let Some(piece) = self.active else {
            return Outcome::unchanged(self.clone());
        };
        let distance = piece.drop_distance(&self.board);
        let next = (distance > 0).then_some(Tetromino {
            y: piece.y + distance as i8,
            ..piece
        });
        self.step_to(next, false, Some(PlayReward::drop(distance as u32, false)))
    }

    fn hard_drop(&self, level: u32) -> Step {
        let Some(piece) = self.active else {
            return Outcome::unchanged(self.clone());
        };
        let distance = piece.drop_distance(&self.board);

        let mut field = self.clone();
        if distance > 0 {
            field.active = Some(Tetromino {
                y: piece.y + distance as i8,
                ..piece
            });
            field.last_action_was_rotate = false;
        }
        let mut reward = field.lock_in_place(level);
        reward.points = reward
            .points
            .saturating_add(drop_points(u32::from(distance), true));
        Outcome::changed(field, Some(reward))
    }

    fn hold(&self, _level: u32) -> Step {
        let Some(piece) = self.active else {
            return Outcome::unchanged(self.clone());
        };
        if !self.can_hold {
            return Outcome::unchanged(self.clone());
        }

        let mut field = self.clone();
        let incoming = match self.hold {
            Some(kind) => kind,
            None => field.queue.draw(),
        };
        let swapped = Tetromino::new(incoming);
        if !swapped.fits(&self.board) {
            return Outcome::unchanged(self.clone());
        }

        field.active = Some(swapped);
        field.hold = Some(piece.kind);
        field.can_hold = false;
        field.last_action_was_rotate = false;
        Outcome::changed(field, None)
    }

    fn has_falling_piece(&self) -> bool {
        self.active.is_some()
    }

    fn can_move_down(&self) -> bool {
        self.active
            .is_some_and(|piece| piece.shifted(&self.board, 0, 1).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

    fn spawned(seed: u32) -> Playfield {
        let step = Playfield::new(seed).spawn();
        assert!(step.changed);
        step.board
    }

    fn with_piece(board: Board, piece: Tetromino) -> Playfield {
        let mut field = Playfield::with_board(board, 1);
        field.active = Some(piece);
        field
    }

    #[test]
    fn test_spawn_places_queued_piece() {
        let field = Playfield::new(12345);
        let expected = field.next_piece();

        let step = field.spawn();
        assert!(step.changed);
        assert!(step.reward.is_none());
        assert_eq!(step.board.active().map(|p| p.kind), Some(expected));
        assert!(step.board.has_falling_piece());

        // Receiver untouched.
        assert!(!field.has_falling_piece());
    }

    #[test]
    fn test_spawn_blocked_reports_unchanged() {
        let mut board = Board::new();
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, 0, Some(PieceKind::I));
            board.set(x, 1, Some(PieceKind::I));
        }
        // Keep rows from being full so nothing clears.
        board.set(0, 0, None);
        board.set(0, 1, None);

        let field = Playfield::with_board(board, 1);
        let step = field.spawn();
        assert!(!step.changed);
        assert_eq!(step.board, field);
    }

    #[test]
    fn test_move_down_until_blocked() {
        let mut field = spawned(7);
        let mut moves = 0;
        loop {
            let step = field.move_down();
            if !step.changed {
                break;
            }
            field = step.board;
            moves += 1;
        }
        assert_eq!(moves, 18);
        assert!(!field.can_move_down());
        assert!(field.has_falling_piece());
    }

    #[test]
    fn test_horizontal_moves_stop_at_walls() {
        let mut field = spawned(3);
        let mut moved = 0;
        for _ in 0..BOARD_WIDTH {
            let step = field.move_left(1);
            if !step.changed {
                break;
            }
            field = step.board;
            moved += 1;
        }
        assert!(moved <= 4);
        assert!(!field.move_left(1).changed);
        assert!(field.move_right(1).changed);
    }

    #[test]
    fn test_soft_drop_awards_a_point() {
        let field = spawned(5);
        let step = field.soft_drop(1);
        assert!(step.changed);
        assert_eq!(step.reward.map(|r| r.points), Some(1));
    }

    #[test]
    fn test_firm_drop_lands_without_locking() {
        let field = spawned(5);
        let step = field.firm_drop(1);
        assert!(step.changed);
        assert_eq!(step.reward.map(|r| r.points), Some(18));
        assert!(step.board.has_falling_piece());
        assert!(!step.board.can_move_down());

        // A second firm drop has nowhere to go.
        assert!(!step.board.firm_drop(1).changed);
    }

    #[test]
    fn test_hard_drop_locks_and_scores() {
        let field = spawned(5);
        let step = field.hard_drop(1);
        assert!(step.changed);
        assert!(!step.board.has_falling_piece());
        assert_eq!(step.board.board().filled_count(), 4);

        let reward = step.reward.unwrap();
        assert!(reward.locked);
        assert_eq!(reward.lines_cleared, 0);
        assert_eq!(reward.points, 36);
    }

    #[test]
    fn test_lock_clears_completed_row() {
        let mut board = Board::new();
        let bottom = BOARD_HEIGHT as i8 - 1;
        for x in 4..BOARD_WIDTH as i8 {
            board.set(x, bottom, Some(PieceKind::J));
        }
        // I piece lying flat in columns 0..=3 of the bottom row.
        let piece = Tetromino {
            kind: PieceKind::I,
            rotation: Rotation::North,
            x: 0,
            y: bottom - 1,
        };
        let field = with_piece(board, piece);
        assert!(!field.can_move_down());

        let (locked, reward) = field.lock(2);
        assert_eq!(reward.lines_cleared, 1);
        assert_eq!(reward.points, 80);
        assert!(reward.locked);
        assert!(!locked.has_falling_piece());
        assert_eq!(locked.board().filled_count(), 0);
    }

    #[test]
    fn test_lock_without_piece_is_empty_reward() {
        let (field, reward) = Playfield::new(1).lock(1);
        assert_eq!(reward, PlayReward::default());
        assert_eq!(field, Playfield::new(1));
    }

    #[test]
    fn test_hold_once_per_piece() {
        let field = spawned(11);
        let first = field.active().unwrap().kind;
        let next = field.next_piece();

        let step = field.hold(1);
        assert!(step.changed);
        assert_eq!(step.board.hold_piece(), Some(first));
        assert_eq!(step.board.active().map(|p| p.kind), Some(next));

        assert!(!step.board.hold(1).changed);

        // Locking re-arms hold and the swap brings the held piece back.
        let dropped = step.board.hard_drop(1).board;
        let respawned = dropped.spawn().board;
        let swapped = respawned.hold(1);
        assert!(swapped.changed);
        assert_eq!(swapped.board.active().map(|p| p.kind), Some(first));
    }

    #[test]
    fn test_rotation_sets_tspin_flag() {
        let piece = Tetromino {
            kind: PieceKind::T,
            rotation: Rotation::North,
            x: 3,
            y: 5,
        };
        let field = with_piece(Board::new(), piece);
        let step = field.rotate_right(1);
        assert!(step.changed);
        assert!(step.board.last_action_was_rotate);
        assert_eq!(step.board.active().unwrap().rotation, Rotation::East);

        let moved = step.board.move_left(1);
        assert!(!moved.board.last_action_was_rotate);
    }

    #[test]
    fn test_t_spin_detection() {
        let piece = Tetromino {
            kind: PieceKind::T,
            rotation: Rotation::South,
            x: 3,
            y: 17,
        };
        let mut board = Board::new();
        board.set(3, 17, Some(PieceKind::I));
        board.set(5, 17, Some(PieceKind::I));
        board.set(3, 19, Some(PieceKind::I));
        board.set(5, 19, Some(PieceKind::I));

        let mut field = with_piece(board, piece);
        field.last_action_was_rotate = true;
        assert_eq!(field.t_spin_kind(&piece), TSpinKind::Full);

        field.last_action_was_rotate = false;
        assert_eq!(field.t_spin_kind(&piece), TSpinKind::None);
    }

    #[test]
    fn test_ghost_y() {
        let field = spawned(2);
        let active = field.active().unwrap();
        assert!(field.ghost_y().unwrap() >= active.y);
    }
}
