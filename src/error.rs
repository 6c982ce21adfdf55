//! Errors surfaced by the binary
//!
//! Everything the drill itself can get wrong is handled inline (see
//! [`AnswerError`](crate::drill::AnswerError)); these are setup and terminal
//! failures that end the program.

use crate::drill::ConfigError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("invalid drill timing: {0}")]
    Config(#[from] ConfigError),

    #[error("cannot open log file '{path}': {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid log level '{level}': {source}")]
    LogFilter {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
}
