//! Error types for draw operations.
//!
//! Every failure a draw session can recover from is a [`DrawError`]. The
//! coarse [`ErrorKind`] is what the presenter reports to the user.

use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`DrawError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Choice or value not accepted at the current prompt
    InvalidInput,
    /// Range bound out of domain
    DomainError,
    /// Range draw requested before `N` was set
    NotConfigured,
    /// Nothing left to draw
    EmptyPool,
    /// Roster file or export file could not be read or written
    IoError,
}

impl ErrorKind {
    /// Short label used in status messages and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid input",
            Self::DomainError => "domain error",
            Self::NotConfigured => "not configured",
            Self::EmptyPool => "empty pool",
            Self::IoError => "I/O error",
        }
    }
}

/// Draw engine error type
#[derive(Debug, Error)]
pub enum DrawError {
    /// Menu choice or typed value was not acceptable
    #[error("{0}")]
    InvalidInput(String),

    /// Range bound rejected; carries the value that was supplied
    #[error("N must be between 1 and {max}, got {value}")]
    Domain {
        /// Rejected value
        value: i64,
        /// Largest accepted value
        max: u32,
    },

    /// Range mode has no `N` yet
    #[error("Range is not configured; set N first")]
    NotConfigured,

    /// The applicable pool has no candidates left
    #[error("Pool is empty; reset or add entries first")]
    EmptyPool,

    /// File could not be opened, read, or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// Reading stopped part-way through a roster file
    #[error("Read of {} failed after {kept} entries: {source}", path.display())]
    PartialRead {
        /// Path being read
        path: PathBuf,
        /// Entries accepted before the failure
        kept: usize,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },
}

impl DrawError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an I/O error bound to a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::Domain { .. } => ErrorKind::DomainError,
            Self::NotConfigured => ErrorKind::NotConfigured,
            Self::EmptyPool => ErrorKind::EmptyPool,
            Self::Io { .. } | Self::PartialRead { .. } => ErrorKind::IoError,
        }
    }
}

/// Result alias for draw operations.
pub type Result<T> = std::result::Result<T, DrawError>;
