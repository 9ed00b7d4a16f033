use axum::extract::Json;
use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::error::ApiError;
use crate::system::auth::jwt;

const MIN_USERNAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 8;

/// POST /api/login
///
/// Any username/password pair of sufficient length is accepted.
pub async fn login(Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>, ApiError> {
    let username = request.username.trim();
    let password = request.password.trim();

    if username.chars().count() < MIN_USERNAME_LEN || password.chars().count() < MIN_PASSWORD_LEN {
        tracing::warn!("Login rejected for {:?}", username);
        return Err(ApiError::Unauthorized(format!(
            "username must be >= {} chars and password >= {} chars",
            MIN_USERNAME_LEN, MIN_PASSWORD_LEN
        )));
    }

    let token = jwt::generate_access_token(username)?;
    tracing::info!("User {} logged in", username);

    Ok(Json(LoginResponse {
        token,
        message: format!("Welcome back, {}!", username),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_short_credentials_are_unauthorized() {
        let result = login(Json(LoginRequest {
            username: " fo ".into(),
            password: "12345678".into(),
        }))
        .await;
        let err = result.err().unwrap();
        assert_eq!(err.status(), axum::http::StatusCode::UNAUTHORIZED);
        assert_eq!(
            err.to_string(),
            "Ouch: username must be >= 3 chars and password >= 8 chars"
        );

        let result = login(Json(LoginRequest {
            username: "foo".into(),
            password: " 1234567 ".into(),
        }))
        .await;
        assert!(result.is_err());
    }
}
