use contracts::domain::a001_article::aggregate::{Article, ArticleDraft, ArticleId};
use contracts::domain::a001_article::topic::Topic;
use once_cell::sync::Lazy;
use tokio::sync::RwLock;

/// In-memory article table with monotonically allocated ids
#[derive(Debug, Default)]
pub struct ArticleTable {
    rows: Vec<Article>,
    last_id: u64,
}

impl ArticleTable {
    pub fn list(&self) -> Vec<Article> {
        self.rows.clone()
    }

    pub fn insert(&mut self, draft: ArticleDraft) -> Article {
        self.last_id += 1;
        let article = Article::from_draft(ArticleId(self.last_id), draft);
        self.rows.push(article.clone());
        article
    }

    /// Returns `None` when no row has `id`
    pub fn update(&mut self, id: ArticleId, draft: ArticleDraft) -> Option<Article> {
        let row = self.rows.iter_mut().find(|a| a.article_id == id)?;
        *row = Article::from_draft(id, draft);
        Some(row.clone())
    }

    /// Returns `false` when no row has `id`
    pub fn delete(&mut self, id: ArticleId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|a| a.article_id != id);
        self.rows.len() != before
    }

    /// One starter article per topic
    pub fn seed(&mut self) {
        let drafts = [
            (
                "Closures",
                "Closures capture variables from the scope where they are defined.",
                Topic::JavaScript,
            ),
            (
                "Hooks",
                "useState and useEffect let function components hold state and run effects.",
                Topic::React,
            ),
            (
                "Streams",
                "Node streams process data piece by piece instead of loading it whole.",
                Topic::Node,
            ),
        ];
        for (title, text, topic) in drafts {
            self.insert(ArticleDraft {
                title: title.to_string(),
                text: text.to_string(),
                topic,
            });
        }
    }
}

static TABLE: Lazy<RwLock<ArticleTable>> = Lazy::new(|| RwLock::new(ArticleTable::default()));

pub async fn seed() {
    let mut table = TABLE.write().await;
    if table.last_id == 0 {
        table.seed();
    }
}

pub async fn list_all() -> Vec<Article> {
    TABLE.read().await.list()
}

pub async fn insert(draft: ArticleDraft) -> Article {
    TABLE.write().await.insert(draft)
}

pub async fn update(id: ArticleId, draft: ArticleDraft) -> Option<Article> {
    TABLE.write().await.update(id, draft)
}

pub async fn delete(id: ArticleId) -> bool {
    TABLE.write().await.delete(id)
}
