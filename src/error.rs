//! Error type for resource content retrieval.
//!
//! Everything that can go wrong between a logical path and its decoded text
//! is reported as one [`ResourceError`], always carrying the path that was
//! being resolved. Errors are terminal at this layer: nothing is retried and
//! nothing is recovered locally; callers decide whether to abort the larger
//! operation or report to a user.

use std::io;

use thiserror::Error;

/// Error raised while resolving a resource path to text.
///
/// All variants carry the path exactly as it was handed to the reader, so a
/// caller several layers up can still name the resource that failed.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The accessor had no stream for the path.
    #[error("path {path:?} could not be resolved")]
    NotFound {
        /// The path that resolved to nothing.
        path: String,
    },

    /// An I/O fault occurred while resolving, opening, reading, or decoding
    /// an opened stream.
    #[error("could not read resource {path:?}")]
    ReadFailed {
        /// The path being read.
        path: String,
        /// The underlying I/O fault.
        #[source]
        source: io::Error,
    },

    /// Releasing the stream failed after a successful read.
    #[error("could not close stream for {path:?}")]
    CloseFailed {
        /// The path whose stream failed to close.
        path: String,
        /// The underlying I/O fault.
        #[source]
        source: io::Error,
    },
}

/// Standard result type for resource content operations.
pub type Result<T> = std::result::Result<T, ResourceError>;

impl ResourceError {
    /// Create a [`ResourceError::NotFound`] for a path.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a [`ResourceError::ReadFailed`] wrapping an I/O fault.
    pub fn read_failed(path: impl Into<String>, source: io::Error) -> Self {
        Self::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a [`ResourceError::CloseFailed`] wrapping an I/O fault.
    pub fn close_failed(path: impl Into<String>, source: io::Error) -> Self {
        Self::CloseFailed {
            path: path.into(),
            source,
        }
    }

    /// The path this error was raised for.
    pub fn path(&self) -> &str {
        match self {
            Self::NotFound { path }
            | Self::ReadFailed { path, .. }
            | Self::CloseFailed { path, .. } => path,
        }
    }

    /// Whether this is the not-found case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
