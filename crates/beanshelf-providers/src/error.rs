use std::fmt;

/// Result type for beanshelf-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while talking to catalog sources
#[derive(Debug)]
pub enum Error {
    /// Request could not be sent or the body could not be read
    Http(reqwest::Error),

    /// Request exceeded the wall-clock budget
    Timeout { url: String },

    /// Endpoint answered with a non-2xx status
    Status { url: String, status: u16 },

    /// JSON parsing failed
    Json(serde_json::Error),

    /// Payload parsed but is neither an accepted collection nor record shape
    Shape(String),

    /// Source is not reachable at all (no route, not configured, ...)
    Unavailable(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Timeout { url } => write!(f, "Request timed out: {}", url),
            Error::Status { url, status } => write!(f, "HTTP {} from {}", status, url),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Shape(msg) => write!(f, "Unexpected payload shape: {}", msg),
            Error::Unavailable(msg) => write!(f, "Source unavailable: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Timeout { .. } | Error::Status { .. } | Error::Shape(_) | Error::Unavailable(_) => {
                None
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
