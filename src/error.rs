use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::snake::Coordinates;

/// Errors raised while building, loading or driving a game.
#[derive(Debug, Error)]
pub enum SnakeError {
    /// Grid storage could not be reserved.
    #[error("cannot allocate board storage: {0}")]
    Allocation(#[from] TryReserveError),
    #[error("cannot access board file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// `line` is 1-based; 0 means the grid as a whole.
    #[error("malformed grid at line {line}: {reason}")]
    MalformedGrid { line: usize, reason: String },
    #[error("corrupt snake topology at {at}: {reason}")]
    CorruptTopology { at: Coordinates, reason: String },
    /// Non-fatal: the requested operation was skipped.
    #[error("snake index {index} out of range ({count} snakes on the board)")]
    InvalidSnakeIndex { index: usize, count: usize },
    /// Non-fatal: the requested operation was skipped.
    #[error("snake {index} is dead")]
    DeadSnake { index: usize },
}

impl SnakeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SnakeError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        SnakeError::MalformedGrid {
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn corrupt(at: Coordinates, reason: impl Into<String>) -> Self {
        SnakeError::CorruptTopology {
            at,
            reason: reason.into(),
        }
    }

    /// True for errors that leave the game untouched and can be ignored.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SnakeError::InvalidSnakeIndex { .. } | SnakeError::DeadSnake { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SnakeError>;
