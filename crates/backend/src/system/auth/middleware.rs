use axum::{body::Body, extract::Request, middleware::Next, response::Response};

use crate::shared::error::ApiError;

/// Middleware that requires a valid bearer token
pub async fn require_auth(mut req: Request<Body>, next: Next) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("token required".to_string()))?;

    let claims = super::jwt::validate_token(token).map_err(|rejection| {
        tracing::warn!("Rejected bearer token: {}", rejection.reason());
        ApiError::Unauthorized(rejection.reason().to_string())
    })?;

    // Handlers read the claims through the CurrentUser extractor
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
