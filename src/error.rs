//! Error type for the fallible surfaces around the engine
//!
//! Recorders, live structures and playback never fail; empty structures and
//! unreachable targets are ordinary results. Errors only come from
//! configuration (command line, speed levels, size bounds) and from the binary's
//! I/O.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VizError {
    #[error("speed level {0} is out of range (expected 1-5)")]
    InvalidSpeed(u8),

    #[error("invalid value '{value}' for {flag}")]
    InvalidArgument { flag: String, value: String },

    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("unknown algorithm '{id}' for the {view} view")]
    UnknownAlgorithm { view: &'static str, id: String },

    #[error("unknown view '{0}' (expected sorting, graph, recursion or structures)")]
    UnknownView(String),

    #[error("{what} must be between {min} and {max}, got {got}")]
    OutOfRange {
        what: &'static str,
        min: usize,
        max: usize,
        got: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VizError>;
