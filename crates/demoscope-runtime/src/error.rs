use std::fmt;

/// Result type for demoscope-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the I/O layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Dataset document did not parse
    Parse(serde_json::Error),

    /// Geometry fetch failed
    Http(reqwest::Error),

    /// Geometry document was malformed
    Geometry(String),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Parse(err) => write!(f, "Dataset parse error: {}", err),
            Error::Http(err) => write!(f, "Geometry fetch error: {}", err),
            Error::Geometry(msg) => write!(f, "Geometry error: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Parse(err) => Some(err),
            Error::Http(err) => Some(err),
            Error::Geometry(_) | Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}
