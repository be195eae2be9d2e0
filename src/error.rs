//! Client Errors

use thiserror::Error;

/// Result type for task store operations
pub type TaskResult<T> = Result<T, TaskError>;

/// Everything that can stop a task operation from being applied
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TaskError {
    /// Request never reached the store, or the response could not be read
    #[error("transport error: {0}")]
    Transport(String),

    /// Store answered with something other than the documented success code
    #[error("{operation} returned status {status}")]
    UnexpectedStatus { operation: &'static str, status: u16 },

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("invalid action: {0}")]
    InvalidAction(String),
}

impl From<reqwest::Error> for TaskError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            TaskError::Decode(e.to_string())
        } else {
            TaskError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TaskError::UnexpectedStatus { operation: "delete", status: 500 };
        assert_eq!(err.to_string(), "delete returned status 500");
        assert_eq!(
            TaskError::InvalidAction("too long".into()).to_string(),
            "invalid action: too long"
        );
    }
}
