use contracts::domain::a001_article::aggregate::{
    ArticleDraft, ArticleId, ArticleResponse, ArticlesResponse,
};
use contracts::system::auth::MessageResponse;
use gloo_net::http::Request;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{api_url, read_json};
use crate::system::auth::api::with_auth;

const ARTICLES_PATH: &str = "/api/articles";

fn article_path(id: ArticleId) -> String {
    format!("{}/{}", ARTICLES_PATH, id)
}

fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

/// GET /api/articles
pub async fn fetch_articles() -> Result<ArticlesResponse, ApiError> {
    let response = with_auth(Request::get(&api_url(ARTICLES_PATH)))
        .send()
        .await
        .map_err(transport)?;
    read_json(response).await
}

/// POST /api/articles
pub async fn create_article(draft: &ArticleDraft) -> Result<ArticleResponse, ApiError> {
    let response = with_auth(Request::post(&api_url(ARTICLES_PATH)))
        .json(draft)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    read_json(response).await
}

/// PUT /api/articles/:id
pub async fn update_article(
    id: ArticleId,
    draft: &ArticleDraft,
) -> Result<ArticleResponse, ApiError> {
    let response = with_auth(Request::put(&api_url(&article_path(id))))
        .json(draft)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    read_json(response).await
}

/// DELETE /api/articles/:id
pub async fn delete_article(id: ArticleId) -> Result<MessageResponse, ApiError> {
    let response = with_auth(Request::delete(&api_url(&article_path(id))))
        .send()
        .await
        .map_err(transport)?;
    read_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_path() {
        assert_eq!(article_path(ArticleId(12)), "/api/articles/12");
    }
}
