// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types.
//!
//! Each layer has its own error enum. [`Error`] wraps them for callers that
//! drive several layers at once (the CLI, batch scans).

use std::path::PathBuf;
use thiserror::Error;

use crate::memo::Sequence;

/// Rejected candidate for `n`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("input must be a positive integer, got {0}")]
    NotPositive(String),

    #[error("input must be an integer, got {0:?}")]
    NotAnInteger(String),

    #[error("input must not exceed {max}, got {value}", max = u64::MAX)]
    OutOfRange { value: String },
}

/// Failures of the lookup table provider.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The backing file does not exist. Downstream pruning depends on this
    /// data, so it is never masked.
    #[error("lookup table {sequence} not found at {}", .path.display())]
    MissingTable { sequence: Sequence, path: PathBuf },

    #[error("failed to read lookup table {sequence} from {}: {source}", .path.display())]
    Io {
        sequence: Sequence,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("lookup table {sequence} is invalid: {reason}")]
    InvalidTable { sequence: Sequence, reason: String },

    /// `n` lies beyond the last value of the table, membership is unknown.
    #[error("the value n = {n} exceeds the maximum data value in {sequence}: {max}")]
    RangeExceeded { sequence: Sequence, n: u64, max: u64 },
}

/// Failures while saving or loading computed entropies.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A line could not be parsed, typically the tail of an interrupted write.
    #[error(
        "error loading {} at line {line}; remove incomplete entries. Last complete key: {}",
        .path.display(),
        .last_good.as_deref().unwrap_or("none found")
    )]
    Corrupt {
        path: PathBuf,
        line: usize,
        last_good: Option<String>,
    },

    #[error("a file named {} already exists", .path.display())]
    Aborted { path: PathBuf },
}

/// Failures while reading or writing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Persist(#[from] PersistError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_exceeded_message() {
        let err = LookupError::RangeExceeded {
            sequence: Sequence::PrimitivePseudoperfect,
            n: 400_000,
            max: 358_671,
        };
        let message = err.to_string();
        assert!(message.contains("400000"));
        assert!(message.contains("358671"));
    }

    #[test]
    fn test_corrupt_without_last_key() {
        let err = PersistError::Corrupt {
            path: PathBuf::from("perfection_entropies.json"),
            line: 1,
            last_good: None,
        };
        assert!(err.to_string().contains("none found"));
    }
}
