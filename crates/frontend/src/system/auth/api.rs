use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::{Request, RequestBuilder};

use super::storage;
use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{api_url, read_json};

/// Exchange credentials for a bearer token
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/api/login"))
        .json(&request)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    read_json(response).await
}

/// Attach `Authorization: Bearer <token>` when a token is stored
pub fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &bearer(&token)),
        None => builder,
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
