//! Application state and its transitions.
//!
//! Everything here is plain data: [`AppState::apply`] consumes an [`Event`],
//! mutates the state and returns the [`Effect`]s the store must run against
//! durable storage. Network calls live in the gateways; this module only
//! decides what their outcomes mean.

use contracts::domain::a001_article::aggregate::{
    Article, ArticleDraft, ArticleId, ArticleResponse, ArticlesResponse,
};
use contracts::domain::a001_article::topic::Topic;

use crate::routes::routes::View;
use crate::shared::api_error::ApiError;

pub const FAREWELL_MESSAGE: &str = "Goodbye!";

/// One row of the article list
///
/// Rows appended after a create carry no id until the list is fetched again.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleEntry {
    pub article_id: Option<ArticleId>,
    pub title: String,
    pub text: String,
    pub topic: Topic,
}

impl ArticleEntry {
    pub fn to_draft(&self) -> ArticleDraft {
        ArticleDraft {
            title: self.title.clone(),
            text: self.text.clone(),
            topic: self.topic,
        }
    }
}

impl From<Article> for ArticleEntry {
    fn from(a: Article) -> Self {
        Self {
            article_id: Some(a.article_id),
            title: a.title,
            text: a.text,
            topic: a.topic,
        }
    }
}

impl From<ArticleDraft> for ArticleEntry {
    fn from(d: ArticleDraft) -> Self {
        Self {
            article_id: None,
            title: d.title,
            text: d.text,
            topic: d.topic,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub view: View,
    pub message: String,
    pub spinner_on: bool,
    pub articles: Vec<ArticleEntry>,
    pub current_article_id: Option<ArticleId>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            view: View::Login,
            message: String::new(),
            spinner_on: false,
            articles: Vec::new(),
            current_article_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    LoginStarted,
    LoginSucceeded { token: String, message: String },
    /// `error` is the display text of the failure
    LoginFailed { error: String },
    LoggedOut,
    /// Any article call entering Pending
    RequestStarted,
    ArticlesLoaded(ArticlesResponse),
    /// `submitted` is what the form sent, not what the server echoed
    ArticleCreated { submitted: ArticleDraft, message: String },
    ArticleUpdated(ArticleResponse),
    ArticleDeleted { article_id: ArticleId, message: String },
    RequestFailed(ApiError),
    Navigate(View),
    SelectArticle(Option<ArticleId>),
}

/// Side effects on durable storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StoreToken(String),
    ClearToken,
}

impl AppState {
    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::LoginStarted | Event::RequestStarted => {
                self.message.clear();
                self.spinner_on = true;
                vec![]
            }
            Event::LoginSucceeded { token, message } => {
                self.message = message;
                self.spinner_on = false;
                self.view = View::Articles;
                vec![Effect::StoreToken(token)]
            }
            Event::LoginFailed { error } => {
                // spinner stays as it was
                self.message = error;
                vec![]
            }
            Event::LoggedOut => {
                self.message = FAREWELL_MESSAGE.to_string();
                self.view = View::Login;
                vec![Effect::ClearToken]
            }
            Event::ArticlesLoaded(response) => {
                self.articles = response.articles.into_iter().map(Into::into).collect();
                self.message = response.message;
                self.view = View::Articles;
                self.spinner_on = false;
                vec![]
            }
            Event::ArticleCreated { submitted, message } => {
                self.articles.push(submitted.into());
                self.message = message;
                self.spinner_on = false;
                vec![]
            }
            Event::ArticleUpdated(response) => {
                let id = response.article.article_id;
                let updated = ArticleEntry::from(response.article);
                for entry in self.articles.iter_mut() {
                    if entry.article_id == Some(id) {
                        *entry = updated.clone();
                    }
                }
                self.message = response.message;
                self.spinner_on = false;
                vec![]
            }
            Event::ArticleDeleted {
                article_id,
                message,
            } => {
                self.articles
                    .retain(|entry| entry.article_id != Some(article_id));
                self.message = message;
                self.spinner_on = false;
                vec![]
            }
            Event::RequestFailed(error) => {
                if error.is_unauthorized() {
                    self.view = View::Login;
                }
                self.message = error.server_message();
                self.spinner_on = false;
                vec![]
            }
            Event::Navigate(view) => {
                self.view = view;
                vec![]
            }
            Event::SelectArticle(article_id) => {
                self.current_article_id = article_id;
                vec![]
            }
        }
    }

    /// The list entry being edited, if the selection still exists
    pub fn current_article(&self) -> Option<&ArticleEntry> {
        let id = self.current_article_id?;
        self.articles
            .iter()
            .find(|entry| entry.article_id == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: u64, title: &str) -> Article {
        Article {
            article_id: ArticleId(id),
            title: title.to_string(),
            text: format!("{} text", title),
            topic: Topic::React,
        }
    }

    fn loaded(titles: &[&str]) -> AppState {
        let mut state = AppState::default();
        state.apply(Event::RequestStarted);
        state.apply(Event::ArticlesLoaded(ArticlesResponse {
            articles: titles
                .iter()
                .enumerate()
                .map(|(i, t)| article(i as u64 + 1, t))
                .collect(),
            message: "Here are your articles, foo!".to_string(),
        }));
        state
    }

    fn unauthorized() -> ApiError {
        ApiError::Unauthorized {
            message: "Ouch: jwt expired".to_string(),
        }
    }

    #[test]
    fn test_login_success_stores_token_and_shows_articles() {
        let mut state = AppState {
            message: "stale".to_string(),
            ..Default::default()
        };

        assert!(state.apply(Event::LoginStarted).is_empty());
        assert!(state.spinner_on);
        assert_eq!(state.message, "");

        let effects = state.apply(Event::LoginSucceeded {
            token: "abc".to_string(),
            message: "Welcome back, foo!".to_string(),
        });
        assert_eq!(effects, vec![Effect::StoreToken("abc".to_string())]);
        assert_eq!(state.view, View::Articles);
        assert_eq!(state.message, "Welcome back, foo!");
        assert!(!state.spinner_on);
    }

    #[test]
    fn test_login_failure_keeps_view_and_spinner() {
        let mut state = AppState::default();
        state.apply(Event::LoginStarted);
        let effects = state.apply(Event::LoginFailed {
            error: "TypeError: Failed to fetch".to_string(),
        });

        assert!(effects.is_empty());
        assert_eq!(state.view, View::Login);
        assert_eq!(state.message, "TypeError: Failed to fetch");
        assert!(state.spinner_on);
    }

    #[test]
    fn test_logout_clears_token_and_says_goodbye() {
        let mut state = loaded(&["a"]);
        let effects = state.apply(Event::LoggedOut);
        assert_eq!(effects, vec![Effect::ClearToken]);
        assert_eq!(state.message, FAREWELL_MESSAGE);
        assert_eq!(state.view, View::Login);
    }

    #[test]
    fn test_list_replaces_articles() {
        let mut state = loaded(&["a", "b"]);
        state.apply(Event::RequestStarted);
        state.apply(Event::ArticlesLoaded(ArticlesResponse {
            articles: vec![article(9, "z")],
            message: "again".to_string(),
        }));

        assert_eq!(state.articles.len(), 1);
        assert_eq!(state.articles[0].article_id, Some(ArticleId(9)));
        assert_eq!(state.message, "again");
        assert_eq!(state.view, View::Articles);
        assert!(!state.spinner_on);
    }

    #[test]
    fn test_unauthorized_on_every_article_call_goes_to_login() {
        for started in [loaded(&["a"]), AppState::default()] {
            let mut state = started;
            state.view = View::Articles;
            state.apply(Event::RequestStarted);
            state.apply(Event::RequestFailed(unauthorized()));

            assert_eq!(state.view, View::Login);
            assert_eq!(state.message, "Ouch: jwt expired");
            assert!(!state.spinner_on);
        }
    }

    #[test]
    fn test_other_failure_only_sets_message() {
        let mut state = loaded(&["a", "b"]);
        state.apply(Event::RequestStarted);
        state.apply(Event::RequestFailed(ApiError::Status {
            status: 422,
            message: "Ouch: title, text and topic are required".to_string(),
        }));

        assert_eq!(state.view, View::Articles);
        assert_eq!(state.articles.len(), 2);
        assert_eq!(state.message, "Ouch: title, text and topic are required");
        assert!(!state.spinner_on);
    }

    #[test]
    fn test_create_appends_submitted_object() {
        let mut state = loaded(&["a", "b"]);
        let submitted = ArticleDraft {
            title: "A".to_string(),
            text: "B".to_string(),
            topic: Topic::JavaScript,
        };

        state.apply(Event::RequestStarted);
        state.apply(Event::ArticleCreated {
            submitted: submitted.clone(),
            message: "Well done, foo. Great article!".to_string(),
        });

        assert_eq!(state.articles.len(), 3);
        let last = state.articles.last().unwrap();
        assert_eq!(last.to_draft(), submitted);
        assert_eq!(last.article_id, None);
        assert_eq!(state.message, "Well done, foo. Great article!");
        assert!(!state.spinner_on);
    }

    #[test]
    fn test_update_replaces_only_matching_entry() {
        let mut state = loaded(&["a", "b", "c"]);
        let before = state.articles.clone();

        state.apply(Event::RequestStarted);
        state.apply(Event::ArticleUpdated(ArticleResponse {
            article: Article {
                article_id: ArticleId(2),
                title: "B2".to_string(),
                text: "new".to_string(),
                topic: Topic::Node,
            },
            message: "Nice update, foo!".to_string(),
        }));

        assert_eq!(state.articles[0], before[0]);
        assert_eq!(state.articles[2], before[2]);
        assert_eq!(state.articles[1].title, "B2");
        assert_eq!(state.articles[1].topic, Topic::Node);
        assert_eq!(state.articles[1].article_id, Some(ArticleId(2)));
        assert!(!state.spinner_on);
    }

    #[test]
    fn test_delete_removes_exactly_matching_entry() {
        let mut state = loaded(&["a", "b", "c"]);
        state.apply(Event::RequestStarted);
        state.apply(Event::ArticleDeleted {
            article_id: ArticleId(2),
            message: "Article 2 was deleted, foo!".to_string(),
        });

        let ids: Vec<_> = state.articles.iter().map(|e| e.article_id).collect();
        assert_eq!(ids, vec![Some(ArticleId(1)), Some(ArticleId(3))]);
        assert_eq!(state.message, "Article 2 was deleted, foo!");
        assert!(!state.spinner_on);
    }

    #[test]
    fn test_delete_leaves_id_less_entries() {
        let mut state = loaded(&["a"]);
        state.apply(Event::ArticleCreated {
            submitted: article(5, "draft").to_draft(),
            message: String::new(),
        });
        state.apply(Event::ArticleDeleted {
            article_id: ArticleId(1),
            message: String::new(),
        });
        assert_eq!(state.articles.len(), 1);
        assert_eq!(state.articles[0].title, "draft");
    }

    #[test]
    fn test_spinner_off_after_every_article_outcome() {
        let outcomes = vec![
            Event::ArticlesLoaded(ArticlesResponse {
                articles: vec![],
                message: String::new(),
            }),
            Event::ArticleCreated {
                submitted: article(1, "a").to_draft(),
                message: String::new(),
            },
            Event::ArticleUpdated(ArticleResponse {
                article: article(1, "a"),
                message: String::new(),
            }),
            Event::ArticleDeleted {
                article_id: ArticleId(1),
                message: String::new(),
            },
            Event::RequestFailed(unauthorized()),
            Event::RequestFailed(ApiError::Transport("offline".to_string())),
        ];
        for outcome in outcomes {
            let mut state = loaded(&["a"]);
            state.apply(Event::RequestStarted);
            assert!(state.spinner_on);
            state.apply(outcome);
            assert!(!state.spinner_on);
        }
    }

    #[test]
    fn test_current_article_follows_selection() {
        let mut state = loaded(&["a", "b"]);
        assert!(state.current_article().is_none());

        state.apply(Event::SelectArticle(Some(ArticleId(2))));
        assert_eq!(state.current_article().unwrap().title, "b");

        state.apply(Event::ArticleDeleted {
            article_id: ArticleId(2),
            message: String::new(),
        });
        assert!(state.current_article().is_none());

        state.apply(Event::SelectArticle(None));
        assert_eq!(state.current_article_id, None);
    }
}
