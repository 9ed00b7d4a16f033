use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contracts::domain::a001_article::aggregate::ArticleId;
use contracts::system::auth::MessageResponse;
use thiserror::Error;

/// Handler error, rendered as `{ "message": ... }` with a matching status
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Ouch: {0}")]
    Unauthorized(String),

    #[error("Ouch: {0}")]
    Validation(String),

    #[error("Ouch: {0}")]
    BadRequest(String),

    #[error("Ouch: article {0} does not exist")]
    NotFound(ArticleId),

    #[error("Ouch: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(e) = &self {
            tracing::error!("Internal error: {:#}", e);
        }
        let body = MessageResponse {
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
