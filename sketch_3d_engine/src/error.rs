//! Error types for Sketch3D
//!
//! Every fallible operation returns [`Result`]. Nothing in the engine panics on
//! bad input: malformed vertex streams and failed GPU resource creation are
//! surfaced to the caller.

use std::fmt;

/// Result type for Sketch3D operations
pub type Result<T> = std::result::Result<T, Error>;

/// Sketch3D errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Backend-specific error reported by a GraphicsDevice
    BackendError(String),

    /// A GPU resource could not be created (handle left unset)
    ResourceError(String),

    /// Caller-supplied data violates an API contract
    InvalidArgument(String),

    /// Initialization failed
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::ResourceError(msg) => write!(f, "Resource error: {}", msg),
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build an [`Error`] variant from a format string, logging it at ERROR severity.
///
/// ```ignore
/// let err = engine_err!("sketch3d::PrimitiveDispatcher", InvalidArgument, "odd count {}", n);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::sketch3d::Error::$variant(message)
    }};
}

/// Return early with an [`Error`] built by [`engine_err!`].
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $variant, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
