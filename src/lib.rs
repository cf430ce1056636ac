//! Tetrion (workspace facade crate).
//!
//! Re-exports the member crates under short names and hosts the pieces the
//! headless runner needs: environment configuration and command scripts.

pub use tetrion_core as core;
pub use tetrion_engine as engine;
pub use tetrion_types as types;

pub mod config;
pub mod script;

pub use config::RunnerConfig;
pub use script::{CommandScript, ScriptError};
