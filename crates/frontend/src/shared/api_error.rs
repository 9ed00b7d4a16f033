use contracts::system::auth::MessageResponse;
use thiserror::Error;

/// Failure of a single gateway call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// HTTP 401; the token is missing, expired or rejected
    #[error("Request failed with status code 401")]
    Unauthorized { message: String },

    #[error("Request failed with status code {status}")]
    Status { status: u16, message: String },

    /// The request never produced a response
    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx response; `body` is expected to be `{ "message": ... }`
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<MessageResponse>(body)
            .map(|m| m.message)
            .unwrap_or_else(|_| format!("Request failed with status code {}", status));

        if status == 401 {
            ApiError::Unauthorized { message }
        } else {
            ApiError::Status { status, message }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Text shown to the user after a failed article call
    pub fn server_message(&self) -> String {
        match self {
            ApiError::Unauthorized { message } | ApiError::Status { message, .. } => {
                message.clone()
            }
            ApiError::Transport(text) | ApiError::Decode(text) => text.clone(),
        }
    }
}
