//! Error types and path context for pattern rendering and palette handling

use std::fmt;
use std::path::{Path, PathBuf};

const UNKNOWN_PATH: &str = "<unknown>";

/// Main error type for all pattern operations
#[derive(Debug)]
pub enum PatternError {
    /// Palette cannot be used for rendering
    ///
    /// Raised for a zero-length palette at render time, since no tile
    /// could ever be colored.
    InvalidPalette {
        /// Description of what's wrong with the palette
        reason: String,
    },

    /// Render parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Imported palette document is malformed
    ///
    /// The whole document is rejected; no entries are partially applied.
    InvalidPaletteFile {
        /// File the document came from, if any
        path: Option<PathBuf>,
        /// Description of the first offending entry
        reason: String,
    },

    /// A single color could not be parsed
    InvalidColor {
        /// Text that failed to parse
        value: String,
        /// Explanation of the failure
        reason: String,
    },

    /// Palette index exceeds the stored palette
    InvalidPaletteIndex {
        /// The requested index
        index: usize,
        /// Number of colors in the palette
        len: usize,
    },

    /// Render was cancelled through its cancellation token
    Cancelled {
        /// Tile row that was about to be computed
        row: usize,
    },

    /// Failed to save rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
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

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPalette { reason } => write!(f, "Invalid palette: {reason}"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidPaletteFile { path, reason } => match path {
                Some(path) => write!(
                    f,
                    "Invalid palette file '{}': {reason}",
                    path.display()
                ),
                None => write!(f, "Invalid palette file: {reason}"),
            },
            Self::InvalidColor { value, reason } => {
                write!(f, "Invalid color '{value}': {reason}")
            }
            Self::InvalidPaletteIndex { index, len } => {
                write!(
                    f,
                    "Palette index {index} is out of bounds (palette has {len} colors)"
                )
            }
            Self::Cancelled { row } => write!(f, "Render cancelled before tile row {row}"),
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

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl PatternError {
    /// Whether the error came from caller input rather than the environment
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPalette { .. }
                | Self::InvalidParameter { .. }
                | Self::InvalidPaletteFile { .. }
                | Self::InvalidColor { .. }
                | Self::InvalidPaletteIndex { .. }
        )
    }
}

/// Convenience type alias for pattern results
pub type Result<T> = std::result::Result<T, PatternError>;

/// Attaches a file path to errors that were created without one
pub trait WithPath<T> {
    /// Fill in the path on path-carrying errors that still hold a placeholder
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<PatternError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                PatternError::ImageExport { path: p, .. }
                | PatternError::FileSystem { path: p, .. }
                    if p.as_os_str() == UNKNOWN_PATH =>
                {
                    *p = path.to_path_buf();
                }
                PatternError::InvalidPaletteFile { path: p, .. } if p.is_none() => {
                    *p = Some(path.to_path_buf());
                }
                _ => {}
            }
            error
        })
    }
}

impl From<image::ImageError> for PatternError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from(UNKNOWN_PATH),
            source: err,
        }
    }
}

impl From<std::io::Error> for PatternError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from(UNKNOWN_PATH),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for PatternError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidPaletteFile {
            path: None,
            reason: err.to_string(),
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PatternError {
    PatternError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid palette error
pub fn invalid_palette(reason: &impl ToString) -> PatternError {
    PatternError::InvalidPalette {
        reason: reason.to_string(),
    }
}

/// Create an invalid palette file error without a path
pub fn invalid_palette_file(reason: &impl ToString) -> PatternError {
    PatternError::InvalidPaletteFile {
        path: None,
        reason: reason.to_string(),
    }
}
