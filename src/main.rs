//! Headless Tetrion runner (default binary).
//!
//! Drives a [`Game`] over a [`Playfield`] with fixed tick deltas, feeding one
//! scripted command per tick. Configure with `TETRION_*` variables (see
//! [`tetrion::config`]) and `RUST_LOG` for cue and lifecycle logging.

use std::io::{self, BufWriter, Write};
use std::sync::Arc;

use anyhow::{Context, Result};

use tetrion::core::Playfield;
use tetrion::engine::{Game, LogSoundPlayer, SoundPlayer};
use tetrion::RunnerConfig;

fn main() -> Result<()> {
    env_logger::init();

    let config = RunnerConfig::from_env().context("invalid TETRION_SCRIPT")?;
    log::info!(
        "starting seed={} tick_ms={} max_ticks={} muted={} script_len={}",
        config.seed,
        config.tick_ms,
        config.max_ticks,
        config.muted,
        config.script.len()
    );

    let game = run(&config)?;
    println!("{game}");
    Ok(())
}

fn run(config: &RunnerConfig) -> Result<Game<Playfield>> {
    let sound: Arc<dyn SoundPlayer> = Arc::new(LogSoundPlayer);
    let mut game = Game::new(Playfield::new(config.seed), sound).with_muted(config.muted);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut ticks = 0;
    while ticks < config.max_ticks && !game.over() {
        game = game.tick(config.tick_ms, config.script.command_at(ticks));
        ticks += 1;

        if config.trace {
            serde_json::to_writer(&mut out, &game.snapshot()).context("writing trace")?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    if game.over() {
        log::info!("game over after {ticks} ticks ({} ms)", game.time());
    } else {
        log::info!("stopped at tick limit {ticks} ({} ms)", game.time());
    }
    Ok(game)
}
