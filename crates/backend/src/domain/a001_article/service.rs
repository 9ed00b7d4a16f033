use super::repository;
use crate::shared::error::ApiError;
use contracts::domain::a001_article::aggregate::{
    ArticleDraft, ArticleId, ArticleResponse, ArticlesResponse,
};
use contracts::system::auth::MessageResponse;

pub const DRAFT_REQUIRED: &str = "title, text and topic are required";

fn validated(draft: ArticleDraft) -> Result<ArticleDraft, ApiError> {
    if !draft.is_valid() {
        return Err(ApiError::Validation(DRAFT_REQUIRED.to_string()));
    }
    Ok(draft.trimmed())
}

pub async fn list_all(username: &str) -> ArticlesResponse {
    ArticlesResponse {
        articles: repository::list_all().await,
        message: format!("Here are your articles, {}!", username),
    }
}

pub async fn create(username: &str, draft: ArticleDraft) -> Result<ArticleResponse, ApiError> {
    let article = repository::insert(validated(draft)?).await;
    tracing::info!("Article {} created by {}", article.article_id, username);
    Ok(ArticleResponse {
        article,
        message: format!("Well done, {}. Great article!", username),
    })
}

pub async fn update(
    username: &str,
    id: ArticleId,
    draft: ArticleDraft,
) -> Result<ArticleResponse, ApiError> {
    let draft = validated(draft)?;
    let article = repository::update(id, draft)
        .await
        .ok_or(ApiError::NotFound(id))?;
    tracing::info!("Article {} updated by {}", id, username);
    Ok(ArticleResponse {
        article,
        message: format!("Nice update, {}!", username),
    })
}

pub async fn delete(username: &str, id: ArticleId) -> Result<MessageResponse, ApiError> {
    if !repository::delete(id).await {
        return Err(ApiError::NotFound(id));
    }
    tracing::info!("Article {} deleted by {}", id, username);
    Ok(MessageResponse {
        message: format!("Article {} was deleted, {}!", id, username),
    })
}
