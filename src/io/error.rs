//! Error types for pattern growth, configuration and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generator operations
#[derive(Debug)]
pub enum CircuitError {
    /// A probability table ran out of weight before absorbing the drawn sample
    ///
    /// Signals a configuration or logic bug, never transient input.
    MalformedTable {
        /// Which table was being sampled
        table: &'static str,
        /// The uniform sample that could not be placed
        sample: f64,
        /// Sum of the table's weights at the time of the draw
        total: f64,
    },

    /// A split strategy label outside the recognised set
    InvalidSplitStrategy {
        /// The offending label
        label: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Export was requested for a pattern with nothing drawn
    NothingToRender {
        /// Description of what was missing
        reason: String,
    },

    /// Failed to encode or save an image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image error
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

impl fmt::Display for CircuitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedTable {
                table,
                sample,
                total,
            } => {
                write!(
                    f,
                    "Invalid probability table '{table}': weights sum to {total} which cannot absorb sample {sample}"
                )
            }
            Self::InvalidSplitStrategy { label } => {
                write!(f, "Invalid splitting strategy \"{label}\"")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::NothingToRender { reason } => {
                write!(f, "Nothing to render: {reason}")
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

impl std::error::Error for CircuitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generator results
pub type Result<T> = std::result::Result<T, CircuitError>;

impl CircuitError {
    /// Whether the error indicates a broken configuration rather than an output failure
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedTable { .. }
                | Self::InvalidSplitStrategy { .. }
                | Self::InvalidParameter { .. }
        )
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CircuitError {
    CircuitError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to a path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> CircuitError {
    CircuitError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
