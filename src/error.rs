use std::fmt;
use std::io;

pub(crate) type IndacoResult<T> = Result<T, Error>;

/// Errors that can occur during indaco usage
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred when reading a theme file
    Io(io::Error),

    /// JSON parsing failed when loading a theme.
    Json(serde_json::Error),

    /// An invalid color was encountered.
    /// Can only happen when compiling a theme.
    #[allow(missing_docs)]
    InvalidColor { value: String, reason: String },

    /// An opacity outside of `[0.0, 1.0]` was encountered.
    /// Can only happen when compiling a theme.
    InvalidOpacity(f64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Json(err) => write!(f, "JSON parsing error: {}", err),
            Error::InvalidColor { value, reason } => {
                write!(f, "invalid color '{}': {}", value, reason)
            }
            Error::InvalidOpacity(value) => {
                write!(f, "invalid opacity {}: must be within 0.0 and 1.0", value)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::InvalidColor { .. } | Error::InvalidOpacity(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
