//! Error types and exit code mapping for the collage pipeline

use std::fmt;
use std::path::PathBuf;

/// Main error type for all collage operations
#[derive(Debug)]
pub enum CollageError {
    /// Configuration value failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Input directory could not be scanned
    Discovery {
        /// Path that failed to be read
        path: PathBuf,
        /// Underlying traversal error
        source: walkdir::Error,
    },

    /// Input directory does not contain enough images for the grid
    NotEnoughImages {
        /// Number of images the grid requires
        needed: usize,
        /// Number of supported images found
        found: usize,
    },

    /// Failed to open or decode a source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Output extension does not map to a known encoder
    UnsupportedFormat {
        /// Requested output path
        path: PathBuf,
        /// Extension that was not recognized (empty if none)
        extension: String,
    },

    /// Failed to encode the collage
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

impl CollageError {
    /// Process exit code reported for this error
    ///
    /// Configuration errors share code 2 with clap's own usage errors.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidParameter { .. } => 2,
            Self::Discovery { .. } => 3,
            Self::NotEnoughImages { .. } => 4,
            Self::ImageLoad { .. } => 5,
            Self::UnsupportedFormat { .. } => 6,
            Self::ImageExport { .. } | Self::FileSystem { .. } => 7,
        }
    }
}

impl fmt::Display for CollageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Discovery { path, source } => {
                write!(
                    f,
                    "Failed to scan directory '{}': {source}",
                    path.display()
                )
            }
            Self::NotEnoughImages { needed, found } => {
                write!(
                    f,
                    "Not enough images in the directory: need at least {needed}, got {found}"
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::UnsupportedFormat { path, extension } => {
                if extension.is_empty() {
                    write!(
                        f,
                        "Unsupported output format for '{}': missing extension (use .png, .jpg or .jpeg)",
                        path.display()
                    )
                } else {
                    write!(
                        f,
                        "Unsupported output format '.{extension}' for '{}' (use .png, .jpg or .jpeg)",
                        path.display()
                    )
                }
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

impl std::error::Error for CollageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::Discovery { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidParameter { .. }
            | Self::NotEnoughImages { .. }
            | Self::UnsupportedFormat { .. } => None,
        }
    }
}

/// Convenience type alias for collage results
pub type Result<T> = std::result::Result<T, CollageError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CollageError {
    CollageError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
