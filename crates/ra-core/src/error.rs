use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RaError {
    /// Scalar input outside the operation's domain.
    InvalidArgument(String),
    /// Name lookup against a fixed table found nothing.
    NotFound(String),
}

impl fmt::Display for RaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RaError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            RaError::NotFound(msg) => write!(f, "not found: {msg}"),
        }
    }
}

impl std::error::Error for RaError {}

pub type Result<T> = std::result::Result<T, RaError>;
