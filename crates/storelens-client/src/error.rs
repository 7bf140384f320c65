use std::fmt;

/// Result type for storelens-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the client layer
#[derive(Debug)]
pub enum Error {
    /// Response arrived with a non-success status code
    Status { status: u16 },

    /// Request never produced a response (DNS, connect, read failure)
    Transport(reqwest::Error),

    /// Response body was not the expected JSON shape
    Decode(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Rendered verbatim in screen error states, so keep the
            // upstream "HTTP {status}" wording.
            Error::Status { status } => write!(f, "HTTP {}", status),
            Error::Transport(err) => write!(f, "request failed: {}", err),
            Error::Decode(err) => write!(f, "invalid catalog payload: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Status { .. } => None,
            Error::Transport(err) => Some(err),
            Error::Decode(err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err)
    }
}
