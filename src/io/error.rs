//! Error types and path context for image analysis operations

use std::fmt;
use std::path::{Path, PathBuf};

use crate::math::interpolation::InterpolationError;

/// Main error type for all analysis operations
#[derive(Debug)]
pub enum FractalError {
    /// Requested image does not exist in the images directory
    ImageNotFound {
        /// Path that was resolved for the image
        path: PathBuf,
    },

    /// Failed to decode source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Raster cannot be analysed (empty or degenerate)
    InvalidInput {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Analysis parameter validation failed
    InvalidConfig {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
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

    /// Failed to save the binarized grid to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// A box-count results file could not be parsed
    MalformedSeries {
        /// One-based line number of the offending line
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// The external plotting step could not be run or failed
    PostProcess {
        /// Rendered command line
        command: String,
        /// Description of the failure
        reason: String,
    },
}

impl FractalError {
    /// Process exit status reported for this error at the CLI boundary
    ///
    /// Status 2 is left to argument parsing errors.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::ImageNotFound { .. } | Self::ImageLoad { .. } | Self::InvalidInput { .. } => 3,
            Self::InvalidConfig { .. } => 4,
            Self::FileSystem { .. } | Self::ImageExport { .. } => 5,
            Self::MalformedSeries { .. } => 6,
            Self::PostProcess { .. } => 7,
        }
    }
}

impl fmt::Display for FractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageNotFound { path } => {
                write!(f, "Image '{}' not found", path.display())
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidInput { reason } => {
                write!(f, "Invalid input: {reason}")
            }
            Self::InvalidConfig {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::MalformedSeries { line, reason } => {
                write!(f, "Malformed box-count series at line {line}: {reason}")
            }
            Self::PostProcess { command, reason } => {
                write!(f, "Post-processing '{command}' failed: {reason}")
            }
        }
    }
}

impl std::error::Error for FractalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for analysis results
pub type Result<T> = std::result::Result<T, FractalError>;

/// Attaches the file involved to errors converted with `?`
pub trait WithPath<T> {
    /// Replace the placeholder path of a converted error
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<FractalError>,
{
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|e| match Into::<FractalError>::into(e) {
            FractalError::FileSystem { source, .. } => FractalError::FileSystem {
                path: path.to_path_buf(),
                operation,
                source,
            },
            FractalError::ImageLoad { source, .. } => FractalError::ImageLoad {
                path: path.to_path_buf(),
                source,
            },
            FractalError::ImageExport { source, .. } => FractalError::ImageExport {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }
}

impl From<image::ImageError> for FractalError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for FractalError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<InterpolationError> for FractalError {
    fn from(err: InterpolationError) -> Self {
        Self::InvalidInput {
            reason: err.to_string(),
        }
    }
}

/// Create an invalid configuration error
pub fn invalid_config(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FractalError {
    FractalError::InvalidConfig {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid input error
pub fn invalid_input(reason: &impl ToString) -> FractalError {
    FractalError::InvalidInput {
        reason: reason.to_string(),
    }
}
