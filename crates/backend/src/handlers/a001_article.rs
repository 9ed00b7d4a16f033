use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path},
    http::StatusCode,
    Json,
};
use contracts::domain::a001_article::aggregate::{
    ArticleDraft, ArticleId, ArticleResponse, ArticlesResponse,
};
use contracts::system::auth::MessageResponse;

use crate::domain::a001_article::service::{self, DRAFT_REQUIRED};
use crate::shared::error::ApiError;
use crate::system::auth::extractor::CurrentUser;

/// Unknown topics, missing fields and bad JSON all read as an incomplete draft
fn draft_body(body: Result<Json<ArticleDraft>, JsonRejection>) -> Result<ArticleDraft, ApiError> {
    body.map(|Json(draft)| draft).map_err(|rejection| {
        tracing::warn!("Rejected article body: {}", rejection.body_text());
        ApiError::Validation(DRAFT_REQUIRED.to_string())
    })
}

fn article_id(path: Result<Path<u64>, PathRejection>) -> Result<ArticleId, ApiError> {
    path.map(|Path(id)| ArticleId(id))
        .map_err(|_| ApiError::BadRequest("article id must be a positive integer".to_string()))
}

/// GET /api/articles
pub async fn list_all(CurrentUser(claims): CurrentUser) -> Json<ArticlesResponse> {
    Json(service::list_all(&claims.sub).await)
}

/// POST /api/articles
pub async fn create(
    CurrentUser(claims): CurrentUser,
    body: Result<Json<ArticleDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<ArticleResponse>), ApiError> {
    let response = service::create(&claims.sub, draft_body(body)?).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /api/articles/:id
pub async fn update(
    CurrentUser(claims): CurrentUser,
    path: Result<Path<u64>, PathRejection>,
    body: Result<Json<ArticleDraft>, JsonRejection>,
) -> Result<Json<ArticleResponse>, ApiError> {
    let id = article_id(path)?;
    service::update(&claims.sub, id, draft_body(body)?)
        .await
        .map(Json)
}

/// DELETE /api/articles/:id
pub async fn delete(
    CurrentUser(claims): CurrentUser,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    service::delete(&claims.sub, article_id(path)?).await.map(Json)
}
