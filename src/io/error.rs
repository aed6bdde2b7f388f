//! Error types for asset loading and preview export
//!
//! Placement itself is infallible by contract: missing zones are skipped and
//! unmet spacing degrades to best-effort positions. Errors only arise when
//! artwork or previews touch the filesystem.

use std::fmt;
use std::path::PathBuf;

/// Main error type for I/O and rendering operations
#[derive(Debug)]
pub enum PlacerError {
    /// Failed to load sticker artwork from the filesystem
    AssetLoad {
        /// Path to the artwork file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a zone preview to disk
    PreviewExport {
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

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for PlacerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetLoad { path, source } => {
                write!(
                    f,
                    "Failed to load sticker artwork '{}': {source}",
                    path.display()
                )
            }
            Self::PreviewExport { path, source } => {
                write!(
                    f,
                    "Failed to export preview to '{}': {source}",
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
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for PlacerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AssetLoad { source, .. } | Self::PreviewExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for placement tooling results
pub type Result<T> = std::result::Result<T, PlacerError>;

impl From<image::ImageError> for PlacerError {
    fn from(err: image::ImageError) -> Self {
        Self::AssetLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for PlacerError {
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
) -> PlacerError {
    PlacerError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path_and_operation() {
        let err = PlacerError::FileSystem {
            path: PathBuf::from("previews/hero.png"),
            operation: "create directory",
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        let message = err.to_string();
        assert!(message.contains("create directory"));
        assert!(message.contains("previews/hero.png"));
    }

    #[test]
    fn test_invalid_parameter_formatting() {
        let err = invalid_parameter("output", &"previews.png", &"must be a directory");
        let message = err.to_string();
        assert!(message.contains("output"));
        assert!(message.contains("previews.png"));
        assert!(message.contains("must be a directory"));
    }

    #[test]
    fn test_source_chain_reaches_io_error() {
        use std::error::Error;

        let err = PlacerError::FileSystem {
            path: PathBuf::from("previews"),
            operation: "create directory",
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.source().is_some());

        let flat = invalid_parameter("seed", &"nan", &"not a number");
        assert!(flat.source().is_none());
    }
}
