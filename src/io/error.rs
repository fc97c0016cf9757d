//! Error types for map loading, solver configuration and map editing
//!
//! An unsatisfiable map is not an error: the solver reports it as a normal outcome.
//! Everything here is either a configuration mistake, a malformed map, or an I/O failure.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all map coloring operations
#[derive(Debug)]
pub enum MapColorError {
    /// Solver or palette parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Two regions share the same id
    DuplicateRegion {
        /// The repeated region id
        id: String,
    },

    /// An operation referred to a region that is not on the map
    UnknownRegion {
        /// The id that could not be resolved
        id: String,
    },

    /// Map structure cannot be used as given
    InvalidMap {
        /// Description of what's wrong with the map
        reason: String,
    },

    /// Requested sample map does not exist
    UnknownSample {
        /// Name that was requested
        name: String,
    },

    /// Map file contents are not a valid map description
    MapParse {
        /// Path to the map file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
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

impl fmt::Display for MapColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::DuplicateRegion { id } => {
                write!(f, "Region id '{id}' is used more than once")
            }
            Self::UnknownRegion { id } => {
                write!(f, "No region with id '{id}'")
            }
            Self::InvalidMap { reason } => {
                write!(f, "Invalid map: {reason}")
            }
            Self::UnknownSample { name } => {
                write!(f, "Unknown sample map '{name}'")
            }
            Self::MapParse { path, source } => {
                write!(f, "Failed to parse map '{}': {source}", path.display())
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

impl std::error::Error for MapColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MapParse { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for map coloring results
pub type Result<T> = std::result::Result<T, MapColorError>;

impl From<std::io::Error> for MapColorError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for MapColorError {
    fn from(err: serde_json::Error) -> Self {
        Self::MapParse {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MapColorError {
    MapColorError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an unknown region error
pub fn unknown_region(id: &str) -> MapColorError {
    MapColorError::UnknownRegion { id: id.to_string() }
}
