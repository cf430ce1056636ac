//! Game state module - the timed controller
//!
//! A [`Game`] is an immutable snapshot. [`Game::tick`] takes the time elapsed
//! since the previous tick plus an optional player command and returns the next
//! snapshot, firing at most one transition per call in this order:
//!
//! 1. paused: nothing happens, not even time
//! 2. spawn delay over (Spawning): spawn a piece, or finish the game
//! 3. gravity delay over (Idle): move the piece down, start locking if blocked
//! 4. lock delay over (Locking): lock, merge the reward, back to Spawning
//! 5. command supplied (Idle or Locking): dispatch it to the board engine
//! 6. otherwise: only time advances

use std::fmt;
use std::sync::Arc;

use crate::core::{BoardEngine, Outcome, Progress, ProgressTracker, Reward};
use crate::gravity::gravity_delay_ms;
use crate::sound::{select_cue, SoundPlayer};
use crate::types::{Command, Cue, Phase, LOCK_DELAY_MS, SPAWN_DELAY_MS};

/// One snapshot of a running game.
///
/// `spawn_timer`, `gravity_timer` and `lock_timer` hold the `time` at which the
/// current wait started; only the one matching `phase` is meaningful.
#[derive(Clone, Debug)]
pub struct Game<B: BoardEngine, P: ProgressTracker = Progress> {
    time: u64,
    phase: Phase,
    paused: bool,
    muted: bool,
    board: B,
    spawn_timer: u64,
    lock_timer: u64,
    gravity_timer: u64,
    progress: P,
    /// Reward of the transition that produced this snapshot.
    reward: Option<B::Reward>,
    sound: Arc<dyn SoundPlayer>,
}

impl<B: BoardEngine> Game<B, Progress> {
    /// Fresh game at level 1, waiting to spawn its first piece.
    pub fn new(board: B, sound: Arc<dyn SoundPlayer>) -> Self {
        Self::with_progress(board, Progress::default(), sound)
    }
}

impl<B: BoardEngine, P: ProgressTracker> Game<B, P> {
    /// Fresh game starting from existing progress (e.g. a chosen start level).
    pub fn with_progress(board: B, progress: P, sound: Arc<dyn SoundPlayer>) -> Self {
        Self {
            time: 0,
            phase: Phase::Spawning,
            paused: false,
            muted: false,
            board,
            spawn_timer: 0,
            lock_timer: 0,
            gravity_timer: 0,
            progress,
            reward: None,
            sound,
        }
    }

    /// Set the initial mute flag.
    pub fn with_muted(self, muted: bool) -> Self {
        Self { muted, ..self }
    }

    pub fn time(&self) -> u64 {
        self.time
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn progress(&self) -> &P {
        &self.progress
    }

    pub fn reward(&self) -> Option<&B::Reward> {
        self.reward.as_ref()
    }

    pub fn spawn_timer(&self) -> u64 {
        self.spawn_timer
    }

    pub fn lock_timer(&self) -> u64 {
        self.lock_timer
    }

    pub fn gravity_timer(&self) -> u64 {
        self.gravity_timer
    }

    pub fn level(&self) -> u32 {
        self.progress.level()
    }

    pub fn lines(&self) -> u32 {
        self.progress.lines()
    }

    pub fn score(&self) -> u32 {
        self.progress.score()
    }

    pub fn is_spawning(&self) -> bool {
        self.phase == Phase::Spawning
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn is_locking(&self) -> bool {
        self.phase == Phase::Locking
    }

    /// The game is finished; no tick will leave this state.
    pub fn over(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Gravity delay for the current level.
    pub fn gravity_delay(&self) -> u64 {
        gravity_delay_ms(self.level())
    }

    /// Toggle pause. Timers keep their reference timestamps, so nothing catches up on resume.
    pub fn pause(&self) -> Self {
        Self {
            paused: !self.paused,
            ..self.clone()
        }
    }

    pub fn mute(&self) -> Self {
        Self {
            muted: !self.muted,
            ..self.clone()
        }
    }

    /// Advance by `delta_ms` and apply at most one transition.
    pub fn tick(&self, delta_ms: u32, command: Option<Command>) -> Self {
        if self.paused {
            return self.clone();
        }

        let now = self.time + u64::from(delta_ms);
        let elapsed = |since: u64| now.saturating_sub(since);

        let mut next = Self {
            time: now,
            reward: None,
            ..self.clone()
        };

        match self.phase {
            Phase::Spawning if elapsed(self.spawn_timer) >= SPAWN_DELAY_MS => next.spawn(now),
            Phase::Idle if elapsed(self.gravity_timer) >= self.gravity_delay() => next.fall(now),
            Phase::Locking if elapsed(self.lock_timer) >= LOCK_DELAY_MS => next.settle(now),
            Phase::Idle | Phase::Locking => {
                if let Some(command) = command {
                    next.dispatch(command, now);
                }
            }
            Phase::Spawning | Phase::Finished => {}
        }

        next
    }

    fn spawn(&mut self, now: u64) {
        let outcome = self.board.spawn();
        self.board = outcome.board;

        if outcome.changed {
            log::debug!("t={now} spawned piece");
            self.phase = Phase::Idle;
            self.gravity_timer = now;
        } else {
            log::info!(
                "t={now} spawn blocked, game over at level {} with {} lines, score {}",
                self.level(),
                self.lines(),
                self.score()
            );
            self.phase = Phase::Finished;
            self.play(Cue::GameOver);
        }
    }

    fn fall(&mut self, now: u64) {
        let outcome = self.board.move_down();
        self.board = outcome.board;
        self.reward = outcome.reward;
        self.gravity_timer = now;

        // Played whether or not the piece actually moved.
        self.play(Cue::Move);

        if !outcome.changed {
            log::debug!("t={now} piece blocked, locking");
            self.phase = Phase::Locking;
            self.lock_timer = now;
        }
    }

    fn settle(&mut self, now: u64) {
        let level = self.level();
        let (board, reward) = self.board.lock(level);
        let progress = self.progress.add(&reward);

        self.play(select_cue(
            Cue::Lock,
            reward.lines_cleared() > 0,
            progress.level() > level,
        ));
        log::debug!(
            "t={now} locked piece: {} lines, {} points",
            reward.lines_cleared(),
            reward.points()
        );

        self.board = board;
        self.progress = progress;
        self.reward = Some(reward);
        self.phase = Phase::Spawning;
        self.spawn_timer = now;
    }

    fn dispatch(&mut self, command: Command, now: u64) {
        let level = self.level();
        let outcome = apply_command(&self.board, command, level);
        let progress = match &outcome.reward {
            Some(reward) => self.progress.add(reward),
            None => self.progress.clone(),
        };

        if outcome.changed {
            let cleared = outcome
                .reward
                .as_ref()
                .is_some_and(|reward| reward.lines_cleared() > 0);
            self.play(select_cue(command.cue(), cleared, progress.level() > level));
        }
        log::trace!("t={now} {command} changed={}", outcome.changed);

        let was_locking = self.phase == Phase::Locking;
        self.board = outcome.board;
        self.progress = progress;
        self.reward = outcome.reward;

        if !self.board.has_falling_piece() {
            self.phase = Phase::Spawning;
            self.spawn_timer = now;
        } else if was_locking && self.board.can_move_down() {
            log::debug!("t={now} {command} freed the piece, locking aborted");
            self.phase = Phase::Idle;
            self.gravity_timer = now;
        }
    }

    fn play(&self, cue: Cue) {
        if self.muted {
            return;
        }
        log::trace!("cue {cue}");
        self.sound.play(cue);
    }
}

/// Command dispatch table.
fn apply_command<B: BoardEngine>(
    board: &B,
    command: Command,
    level: u32,
) -> Outcome<B, B::Reward> {
    match command {
        Command::MoveLeft => board.move_left(level),
        Command::MoveRight => board.move_right(level),
        Command::MoveDown => board.move_down(),
        Command::SoftDrop => board.soft_drop(level),
        Command::RotateLeft => board.rotate_left(level),
        Command::RotateRight => board.rotate_right(level),
        Command::FirmDrop => board.firm_drop(level),
        Command::HardDrop => board.hard_drop(level),
        Command::Hold => board.hold(level),
    }
}

/// Every state field takes part; the sound handle does not.
impl<B, P> PartialEq for Game<B, P>
where
    B: BoardEngine + PartialEq,
    B::Reward: PartialEq,
    P: ProgressTracker + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time
            && self.phase == other.phase
            && self.paused == other.paused
            && self.muted == other.muted
            && self.board == other.board
            && self.spawn_timer == other.spawn_timer
            && self.lock_timer == other.lock_timer
            && self.gravity_timer == other.gravity_timer
            && self.progress == other.progress
            && self.reward == other.reward
    }
}

impl<B: BoardEngine, P: ProgressTracker> fmt::Display for Game<B, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | lines {} | level {} | score {} | reward ",
            self.phase,
            self.lines(),
            self.level(),
            self.score()
        )?;
        match &self.reward {
            Some(reward) => write!(f, "{reward:?}"),
            None => f.write_str("-"),
        }
    }
}
