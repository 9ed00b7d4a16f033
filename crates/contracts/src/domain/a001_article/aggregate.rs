use serde::{Deserialize, Serialize};
use std::fmt;

use super::topic::Topic;

// ============================================================================
// ID Type
// ============================================================================

/// Server-assigned article identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(pub u64);

impl ArticleId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub article_id: ArticleId,
    pub title: String,
    pub text: String,
    pub topic: Topic,
}

impl Article {
    pub fn from_draft(article_id: ArticleId, draft: ArticleDraft) -> Self {
        Self {
            article_id,
            title: draft.title,
            text: draft.text,
            topic: draft.topic,
        }
    }

    pub fn to_draft(&self) -> ArticleDraft {
        ArticleDraft {
            title: self.title.clone(),
            text: self.text.clone(),
            topic: self.topic,
        }
    }
}

/// Article without an id: body of create and update requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    pub text: String,
    pub topic: Topic,
}

impl ArticleDraft {
    /// Title and text must be non-blank
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.text.trim().is_empty()
    }

    /// Copy with title and text trimmed
    pub fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            text: self.text.trim().to_string(),
            topic: self.topic,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticlesResponse {
    pub articles: Vec<Article>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub article: Article,
    pub message: String,
}
