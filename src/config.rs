//! Runner configuration from `TETRION_*` environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TETRION_SEED` | 1 | Piece generator seed |
//! | `TETRION_TICK_MS` | 16 | Delta passed to every tick |
//! | `TETRION_MAX_TICKS` | 100000 | Stop after this many ticks |
//! | `TETRION_MUTED` | false | Start muted (`1` or `true`) |
//! | `TETRION_SCRIPT` | empty | Command script, see [`crate::script`] |
//! | `TETRION_TRACE` | false | Print one JSON snapshot per tick (`1` or `true`) |
//!
//! Malformed numbers fall back to their defaults; a bad script is an error.

use crate::script::{CommandScript, ScriptError};
use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub seed: u32,
    pub tick_ms: u32,
    pub max_ticks: u64,
    pub muted: bool,
    pub script: CommandScript,
    pub trace: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            tick_ms: TICK_MS,
            max_ticks: 100_000,
            muted: false,
            script: CommandScript::default(),
            trace: false,
        }
    }
}

impl RunnerConfig {
    pub fn from_env() -> Result<Self, ScriptError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ScriptError> {
        let defaults = Self::default();

        let seed = lookup("TETRION_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);
        let tick_ms = lookup("TETRION_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.tick_ms);
        let max_ticks = lookup("TETRION_MAX_TICKS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_ticks);
        let muted = lookup("TETRION_MUTED").map(|v| is_truthy(&v)).unwrap_or(false);
        let trace = lookup("TETRION_TRACE").map(|v| is_truthy(&v)).unwrap_or(false);
        let script = match lookup("TETRION_SCRIPT") {
            Some(s) => s.parse()?,
            None => defaults.script,
        };

        Ok(Self {
            seed,
            tick_ms,
            max_ticks,
            muted,
            script,
            trace,
        })
    }
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true")
}
