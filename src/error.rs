// src/error.rs
use thiserror::Error;

/// Failures surfaced by the jobs API boundary.
///
/// Screens store these inside `RequestState::Failure`, so the type stays `Clone`
/// and carries rendered messages instead of the underlying client errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// Login rejected with the server's own message.
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Stable short code used in log lines
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => "transport",
            ApiError::Status { .. } => "status",
            ApiError::Decode(_) => "decode",
            ApiError::InvalidRequest(_) => "invalid_request",
            ApiError::Rejected(_) => "rejected",
        }
    }

    /// Message to show inline on the login form
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected(msg) => msg.clone(),
            _ => "Something went wrong. Please try again".to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_keeps_server_text() {
        let err = ApiError::Rejected("invalid username".to_string());
        assert_eq!(err.user_message(), "invalid username");
        assert_eq!(err.to_string(), "invalid username");
    }

    #[test]
    fn test_user_message_hides_transport_details() {
        let err = ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.user_message(), "Something went wrong. Please try again");
        assert_eq!(err.code(), "status");
    }
}
