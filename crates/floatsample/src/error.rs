//! Error types for sample conversion and buffer management.

use thiserror::Error;

/// Result type for sample operations.
pub type SampleResult<T> = Result<T, SampleError>;

/// Errors that can occur while resolving formats, converting samples, or
/// mutating a [`SampleBuffer`](crate::SampleBuffer).
///
/// Both kinds are raised before anything is written for the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// A caller-supplied value violates a precondition.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Error message.
        message: String,
    },

    /// The format denotes an encoding/width/endianness combination the codec
    /// does not implement.
    #[error("unsupported format: {message}")]
    UnsupportedFormat {
        /// Error message.
        message: String,
    },
}

impl SampleError {
    /// Creates an invalid argument error.
    pub fn invalid_arg(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates an unsupported format error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            message: message.into(),
        }
    }

    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            SampleError::InvalidArgument { .. } => "SAMPLE_001",
            SampleError::UnsupportedFormat { .. } => "SAMPLE_002",
        }
    }

    /// Error category for grouping related errors.
    pub fn category(&self) -> &'static str {
        "sample"
    }

    /// Returns true for [`SampleError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SampleError::InvalidArgument { .. })
    }

    /// Returns true for [`SampleError::UnsupportedFormat`].
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, SampleError::UnsupportedFormat { .. })
    }
}
