//! Command-line configuration and logging setup

use crate::drill::{DrillConfig, Operation};
use crate::error::AppError;
use clap::Parser;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(name = "mathdrill", version)]
#[command(about = "Timed beginner arithmetic drills in the terminal")]
pub struct Args {
    /// Seed for a reproducible question sequence
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start right away in this mode
    #[arg(short, long, value_enum)]
    pub mode: Option<Operation>,

    /// Timer refresh interval in milliseconds
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Delay before the next question after an answer, in milliseconds
    #[arg(long, default_value_t = 250, value_parser = clap::value_parser!(u64).range(1..))]
    pub advance_delay_ms: u64,

    /// Write logs to this file (the terminal is busy with the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "info" or "mathdrill=debug"
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn drill_config(&self) -> Result<DrillConfig, AppError> {
        let config = DrillConfig::new(
            Duration::from_millis(self.tick_ms),
            Duration::from_millis(self.advance_delay_ms),
        )?;
        Ok(config)
    }
}

/// Install a file-backed subscriber when a log file was requested.
///
/// Returns `Ok(false)` when logging stays disabled.
pub fn init_logging(args: &Args) -> Result<bool, AppError> {
    let Some(path) = &args.log_file else {
        return Ok(false);
    };

    let filter = EnvFilter::try_new(&args.log_level).map_err(|source| AppError::LogFilter {
        level: args.log_level.clone(),
        source,
    })?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::LogFile {
            path: path.clone(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_drill_config() {
        let args = Args::parse_from(["mathdrill"]);
        assert_eq!(args.drill_config().unwrap(), DrillConfig::default());
        assert_eq!(args.mode, None);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_mode_and_timing_flags() {
        let args = Args::parse_from([
            "mathdrill",
            "--mode",
            "div",
            "--seed",
            "9",
            "--tick-ms",
            "500",
            "--advance-delay-ms",
            "100",
        ]);
        assert_eq!(args.mode, Some(Operation::Divide));
        assert_eq!(args.seed, Some(9));
        let config = args.drill_config().unwrap();
        assert_eq!(config.tick_interval(), Duration::from_millis(500));
        assert_eq!(config.advance_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert!(Args::try_parse_from(["mathdrill", "--tick-ms", "0"]).is_err());
    }

    #[test]
    fn test_no_log_file_means_no_subscriber() {
        let args = Args::parse_from(["mathdrill"]);
        assert!(!init_logging(&args).unwrap());
    }
}
