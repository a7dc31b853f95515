//! Custom error types for coordinate processing

use std::fmt;
use std::io;

/// Error types raised outside of the (infallible) coordinate transforms
#[derive(Debug)]
pub enum GeoError {
    /// I/O error
    IoError(io::Error),
    /// Ellipsoid name not present in the catalog
    UnknownEllipsoid(String),
    /// Unrecognized angle unit specifier
    InvalidUnit(String),
    /// Input line that could not be read as a point
    MalformedLine {
        /// The offending input line
        line: String,
        /// What went wrong
        reason: String,
    },
    /// The embedded ellipsoid catalog could not be parsed
    CatalogError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::IoError(e) => write!(f, "I/O error: {}", e),
            GeoError::UnknownEllipsoid(name) => write!(f, "Unknown ellipsoid/datum: {}", name),
            GeoError::InvalidUnit(unit) => write!(f, "Invalid angle unit: {}", unit),
            GeoError::MalformedLine { line, reason } => {
                write!(f, "Cannot read coordinates from line '{}': {}", line, reason)
            },
            GeoError::CatalogError(msg) => write!(f, "Ellipsoid catalog error: {}", msg),
            GeoError::GenericError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for GeoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GeoError {
    fn from(error: io::Error) -> Self {
        GeoError::IoError(error)
    }
}

impl From<String> for GeoError {
    fn from(msg: String) -> Self {
        GeoError::GenericError(msg)
    }
}

/// Result type for coordinate processing operations
pub type GeoResult<T> = Result<T, GeoError>;
