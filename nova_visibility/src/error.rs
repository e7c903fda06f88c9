//! Error types for the Nova visibility library
//!
//! This module defines the error types used throughout the library.
//! Every failure is a caller contract violation (malformed input),
//! surfaced immediately — there is no retry or recovery path.

use std::fmt;

/// Result type for Nova visibility operations
pub type Result<T> = std::result::Result<T, Error>;

/// Nova visibility errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Malformed input (non-finite matrix, degenerate data, bad parameter)
    InvalidInput(String),

    /// Projection parameters that cannot produce a valid projection matrix
    InvalidProjection(String),

    /// Degenerate bounding volume (inverted AABB, negative radius, non-finite)
    InvalidBounds(String),

    /// World transform with no inverse — the view matrix cannot be derived
    NonInvertibleTransform(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Error::InvalidProjection(msg) => write!(f, "Invalid projection: {}", msg),
            Error::InvalidBounds(msg) => write!(f, "Invalid bounds: {}", msg),
            Error::NonInvertibleTransform(msg) => {
                write!(f, "Non-invertible transform: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Create an `Error::InvalidInput` with a source tag and formatted message
///
/// # Example
///
/// ```ignore
/// value.ok_or_else(|| engine_err!("nova::Scene", "key {:?} not found", key))?;
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {
        $crate::nova::Error::InvalidInput(
            format!("[{}] {}", $source, format!($($arg)*))
        )
    };
}

/// Return early with an `Error::InvalidInput`
///
/// # Example
///
/// ```ignore
/// if !matrix.is_finite() {
///     engine_bail!("nova::Scene", "world matrix contains non-finite values");
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
