//! Point values for locks and drops.
//!
//! Levels are 1-based: a clear at level `n` is worth `base * n`. T-spins use
//! their own table instead of the line table. A back-to-back clear multiplies
//! the clear points by 3/2, and the combo bonus is added afterwards without
//! any level factor.

use crate::types::{TSpinKind, B2B_DENOMINATOR, B2B_NUMERATOR, COMBO_BASE, LINES_PER_LEVEL, LINE_SCORES};

/// Breakdown of the points a single lock is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockScore {
    /// Line or T-spin points, after any back-to-back multiplier.
    pub clear: u32,
    pub combo: u32,
    /// This clear keeps a back-to-back chain alive.
    pub difficult: bool,
    pub back_to_back: bool,
}

impl LockScore {
    /// `combo` is the chain index (`-1` no chain, `0` first clear);
    /// `chain` says whether the previous clear was difficult.
    pub fn new(lines: usize, level: u32, tspin: TSpinKind, combo: i32, chain: bool) -> Self {
        let level = level.max(1);
        let base = match tspin {
            TSpinKind::None => LINE_SCORES.get(lines).copied().unwrap_or(0),
            _ => tspin_base(tspin, lines),
        } * level;

        let difficult = matches!(
            (tspin, lines),
            (TSpinKind::Full, 1..=4) | (TSpinKind::None, 4)
        );
        let back_to_back = difficult && chain;
        let clear = if back_to_back {
            base.saturating_mul(B2B_NUMERATOR) / B2B_DENOMINATOR
        } else {
            base
        };

        Self {
            clear,
            combo: u32::try_from(combo).map_or(0, |index| COMBO_BASE * index),
            difficult,
            back_to_back,
        }
    }

    pub fn total(&self) -> u32 {
        self.clear.saturating_add(self.combo)
    }
}

fn tspin_base(tspin: TSpinKind, lines: usize) -> u32 {
    match (tspin, lines) {
        (TSpinKind::Full, 0) => 400,
        (TSpinKind::Full, 1) => 800,
        (TSpinKind::Full, 2) => 1200,
        (TSpinKind::Full, 3) => 1600,
        (TSpinKind::Mini, 0) => 100,
        (TSpinKind::Mini, 1) => 200,
        (TSpinKind::Mini, 2) => 400,
        _ => 0,
    }
}

/// Soft drops earn one point per row, hard drops two.
pub fn drop_points(rows: u32, hard: bool) -> u32 {
    if hard {
        rows * 2
    } else {
        rows
    }
}

/// 1-based level reached after clearing `total_lines`
pub fn level_for_lines(total_lines: u32) -> u32 {
    1 + total_lines / LINES_PER_LEVEL
}
