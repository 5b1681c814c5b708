use std::fmt;
use std::path::PathBuf;

/// Result type for healthlog-parser operations
pub type Result<T> = std::result::Result<T, Error>;

/// Whole-run failures. Malformed report content never produces an error.
#[derive(Debug)]
pub enum Error {
    /// Input log file does not exist
    InputNotFound(PathBuf),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputNotFound(path) => write!(f, "Log file {} not found!", path.display()),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::InputNotFound(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
