use std::fmt;

#[derive(Debug)]
pub enum PredictError {
    /// The network call itself could not complete. Carries the underlying
    /// transport error unmodified.
    Transport(reqwest::Error),
    /// The endpoint answered with a non-success status.
    Api { status: u16, message: String },
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::Transport(err) => write!(f, "Transport error: {}", err),
            PredictError::Api { status, message } => {
                write!(f, "API Error {}: {}", status, message)
            }
        }
    }
}

impl std::error::Error for PredictError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PredictError::Transport(err) => Some(err),
            PredictError::Api { .. } => None,
        }
    }
}

impl From<reqwest::Error> for PredictError {
    fn from(err: reqwest::Error) -> Self {
        PredictError::Transport(err)
    }
}

pub type Result<T> = std::result::Result<T, PredictError>;
