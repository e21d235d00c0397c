//! Runtime configuration for the terminal binary.
//!
//! Every option can come from a command-line flag or, failing that, from an
//! environment variable:
//!
//! | Flag | Environment | Default |
//! |------|-------------|---------|
//! | `--seed <N>` | `TUI_2048_SEED` | entropy |
//! | `--log-file <PATH>` | `TUI_2048_LOG_PATH` | no logging |
//! | `--log-level <LEVEL>` | `TUI_2048_LOG` | `info` |
//!
//! The game draws on the alternate screen, so log records only go to a file.
//! `RUST_LOG` is not consulted: the level above is the whole filter.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Target};

use crate::core::{GameState, RandSource};

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(author, version, about = "Play 2048 in the terminal")]
pub struct AppConfig {
    /// Seed for tile spawns; the same seed replays the same game
    #[arg(long, env = "TUI_2048_SEED", value_name = "N")]
    pub seed: Option<u64>,

    /// Append log records to this file
    #[arg(long = "log-file", env = "TUI_2048_LOG_PATH", value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log filter (`error`, `warn`, `info`, `debug`, `trace`, or env_logger directives)
    #[arg(long, env = "TUI_2048_LOG", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse flags and environment, normalising empty values to unset.
    pub fn load() -> Self {
        Self::parse().normalized()
    }

    fn normalized(mut self) -> Self {
        self.log_path = self
            .log_path
            .filter(|p| !p.as_os_str().is_empty());
        if self.log_level.trim().is_empty() {
            self.log_level = "info".to_string();
        }
        self
    }

    /// Install the file logger, if a log file is configured.
    ///
    /// Returns whether a logger was installed. Without a file the `log`
    /// macros stay no-ops.
    pub fn init_logging(&self) -> Result<bool> {
        let Some(path) = &self.log_path else {
            return Ok(false);
        };

        let file = File::options()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;

        self.log_builder()
            .target(Target::Pipe(Box::new(file)))
            .try_init()
            .context("installing logger")?;
        Ok(true)
    }

    /// Logger builder filtered by `log_level` alone.
    fn log_builder(&self) -> Builder {
        let mut builder = Builder::new();
        builder.parse_filters(&self.log_level).format_timestamp_millis();
        builder
    }

    /// Build the engine this configuration asks for.
    pub fn new_game(&self) -> GameState {
        match self.seed {
            Some(seed) => GameState::with_source(RandSource::seeded(seed)),
            None => GameState::from_entropy(),
        }
    }
}
