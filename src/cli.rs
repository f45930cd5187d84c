//! Command-line configuration and log setup for the terminal runner.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use crate::types::FRAME_MS;

#[derive(Debug, Clone, Parser)]
#[command(name = "falling-blocks", version, about = "Falling-block puzzle in the terminal")]
pub struct Args {
    /// Seed for the piece sequence. A random seed is drawn when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds per frame; also the gravity time added per frame.
    #[arg(long, default_value_t = FRAME_MS, value_parser = clap::value_parser!(u32).range(1..))]
    pub frame_ms: u32,

    /// Terminal columns per grid cell.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..=4))]
    pub cell_width: u16,

    /// Write logs to this file. Logging is off when omitted, since the
    /// terminal itself is owned by the game screen.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Maximum log level written to the log file.
    #[arg(long, default_value_t = Level::INFO)]
    pub log_level: Level,
}

impl Args {
    /// The configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

/// Install a file-backed tracing subscriber when `--log-file` is given.
pub fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = args.log_file.as_ref() else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(args.log_level)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["falling-blocks"]).unwrap();
        assert_eq!(args.seed, None);
        assert_eq!(args.frame_ms, 16);
        assert_eq!(args.cell_width, 2);
        assert!(args.log_file.is_none());
        assert_eq!(args.log_level, Level::INFO);
    }

    #[test]
    fn test_explicit_seed_is_used() {
        let args = Args::try_parse_from(["falling-blocks", "--seed", "42"]).unwrap();
        assert_eq!(args.resolve_seed(), 42);
    }

    #[test]
    fn test_rejects_zero_frame_ms() {
        assert!(Args::try_parse_from(["falling-blocks", "--frame-ms", "0"]).is_err());
    }

    #[test]
    fn test_log_level_parses() {
        let args = Args::try_parse_from(["falling-blocks", "--log-level", "debug"]).unwrap();
        assert_eq!(args.log_level, Level::DEBUG);
    }

    #[test]
    fn test_logging_is_noop_without_file() {
        let args = Args::try_parse_from(["falling-blocks"]).unwrap();
        assert!(init_logging(&args).is_ok());
    }
}
