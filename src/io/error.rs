//! Error types for sample handling and generation setup
//!
//! Contradictions are not errors: they are reported through
//! [`crate::generator::PropagationResult`]. Errors cover invalid
//! configuration and I/O failures only.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Failed to load a sample image from the filesystem
    SampleLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to parse a persisted sample record
    SampleDecode {
        /// Path to the record
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// The sample yields no extractable states
    DegenerateSample {
        /// Description of what is wrong with the sample
        reason: String,
    },

    /// Flattened grid length disagrees with the declared dimensions
    DimensionMismatch {
        /// Expected cell count (`width * height`)
        expected: usize,
        /// Actual data length
        actual: usize,
    },

    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SampleLoad { path, source } => {
                write!(f, "Failed to load sample '{}': {source}", path.display())
            }
            Self::SampleDecode { path, source } => {
                write!(f, "Failed to decode sample '{}': {source}", path.display())
            }
            Self::DegenerateSample { reason } => {
                write!(f, "Degenerate sample: {reason}")
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Grid length {actual} does not match declared dimensions ({expected} cells)"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SampleLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::SampleDecode { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
