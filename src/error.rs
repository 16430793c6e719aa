//! Errors

use thiserror::Error;

/// Result type using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building meshes, graphs and degrees of freedom
///
/// Every variant reports a violated precondition of the caller. None of them is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// A lookup missed on an initialised mesh
    #[error("not found: {0}")]
    NotFound(String),

    /// Inconsistent input, e.g. a boundary position that does not exist for the mesh dimension
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An index outside the declared extents
    #[error("index {index} is out of range for axis {axis} with {extent} nodes")]
    OutOfRange {
        /// Axis of the offending index
        axis: usize,
        /// The offending index
        index: usize,
        /// Number of nodes along the axis
        extent: usize,
    },

    /// The worker pool could not be created
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// RON serialisation error
    #[cfg(feature = "serde")]
    #[error("RON serialisation failed: {0}")]
    RonSerialize(#[from] ron::Error),

    /// RON parse error
    #[cfg(feature = "serde")]
    #[error("RON parsing failed: {0}")]
    RonDeserialize(#[from] ron::error::SpannedError),
}

impl Error {
    /// Create an invalid configuration error
    pub fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration(message.into())
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Error::NotFound(message.into())
    }
}
