use std::{fmt, io};

/// Failure reported by an ML service.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// The service could not be reached or is not ready.
    Unavailable(String),
    /// The service processed the request and failed.
    Failed(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Unavailable(msg) => write!(f, "service unavailable: {msg}"),
            ServiceError::Failed(msg) => write!(f, "service failed: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {}

/// Failure loading a recorded response file.
#[derive(Debug)]
pub enum ReplayError {
    Io(io::Error),
    Parse(serde_json::Error),
    /// The file holds no responses.
    Empty,
    /// A detection box as `[x, y, width, height]` that cannot be drawn.
    InvalidBox([i32; 4]),
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::Io(err) => write!(f, "cannot read replay file: {err}"),
            ReplayError::Parse(err) => write!(f, "invalid replay file: {err}"),
            ReplayError::Empty => write!(f, "replay file has no responses"),
            ReplayError::InvalidBox(bounds) => write!(f, "invalid detection box {bounds:?}"),
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReplayError::Io(err) => Some(err),
            ReplayError::Parse(err) => Some(err),
            ReplayError::Empty | ReplayError::InvalidBox(_) => None,
        }
    }
}

impl From<io::Error> for ReplayError {
    fn from(err: io::Error) -> Self {
        ReplayError::Io(err)
    }
}

impl From<serde_json::Error> for ReplayError {
    fn from(err: serde_json::Error) -> Self {
        ReplayError::Parse(err)
    }
}
