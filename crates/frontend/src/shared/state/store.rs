use contracts::domain::a001_article::aggregate::{ArticleDraft, ArticleId};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::session::{AppState, ArticleEntry, Effect, Event};
use crate::domain::a001_article::api as article_api;
use crate::routes::routes::{resolve_view, View};
use crate::shared::api_error::ApiError;
use crate::system::auth::{api as auth_api, storage};

/// Owner of [`AppState`]; every change goes through [`Store::dispatch`]
#[derive(Clone, Copy)]
pub struct Store {
    state: RwSignal<AppState>,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        Self {
            state: RwSignal::new(initial),
        }
    }

    pub fn dispatch(&self, event: Event) {
        let mut effects = Vec::new();
        self.state.update(|state| effects = state.apply(event));
        for effect in effects {
            run_effect(effect);
        }
    }

    // ------------------------------------------------------------------
    // Reactive reads
    // ------------------------------------------------------------------

    pub fn view(&self) -> View {
        self.state.with(|s| s.view)
    }

    pub fn view_untracked(&self) -> View {
        self.state.with_untracked(|s| s.view)
    }

    pub fn message(&self) -> String {
        self.state.with(|s| s.message.clone())
    }

    pub fn spinner_on(&self) -> bool {
        self.state.with(|s| s.spinner_on)
    }

    pub fn articles(&self) -> Vec<ArticleEntry> {
        self.state.with(|s| s.articles.clone())
    }

    pub fn current_article_id(&self) -> Option<ArticleId> {
        self.state.with(|s| s.current_article_id)
    }

    pub fn current_article(&self) -> Option<ArticleEntry> {
        self.state.with(|s| s.current_article().cloned())
    }

    // ------------------------------------------------------------------
    // Navigation and selection
    // ------------------------------------------------------------------

    /// Switch views; the articles view needs a stored token
    pub fn navigate(&self, requested: View) {
        let view = resolve_view(requested, storage::has_token());
        if view != self.view_untracked() {
            self.dispatch(Event::Navigate(view));
        }
    }

    pub fn select_article(&self, article_id: Option<ArticleId>) {
        self.dispatch(Event::SelectArticle(article_id));
    }

    // ------------------------------------------------------------------
    // Auth gateway
    // ------------------------------------------------------------------

    pub fn login(&self, username: String, password: String) {
        self.dispatch(Event::LoginStarted);
        let store = *self;
        spawn_local(async move {
            log::debug!("POST /api/login as {}", username);
            let event = match auth_api::login(username, password).await {
                Ok(response) => Event::LoginSucceeded {
                    token: response.token,
                    message: response.message,
                },
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    Event::LoginFailed {
                        error: e.to_string(),
                    }
                }
            };
            store.dispatch(event);
        });
    }

    pub fn logout(&self) {
        self.dispatch(Event::LoggedOut);
    }

    // ------------------------------------------------------------------
    // Article gateway
    // ------------------------------------------------------------------

    pub fn list_articles(&self) {
        self.dispatch(Event::RequestStarted);
        let store = *self;
        spawn_local(async move {
            log::debug!("GET /api/articles");
            let result = article_api::fetch_articles().await;
            store.settle(result, Event::ArticlesLoaded);
        });
    }

    pub fn create_article(&self, draft: ArticleDraft) {
        self.dispatch(Event::RequestStarted);
        let store = *self;
        spawn_local(async move {
            log::debug!("POST /api/articles");
            let result = article_api::create_article(&draft).await;
            store.settle(result, move |response| Event::ArticleCreated {
                submitted: draft,
                message: response.message,
            });
        });
    }

    pub fn update_article(&self, article_id: ArticleId, draft: ArticleDraft) {
        self.dispatch(Event::RequestStarted);
        let store = *self;
        spawn_local(async move {
            log::debug!("PUT /api/articles/{}", article_id);
            let result = article_api::update_article(article_id, &draft).await;
            store.settle(result, Event::ArticleUpdated);
        });
    }

    pub fn delete_article(&self, article_id: ArticleId) {
        self.dispatch(Event::RequestStarted);
        let store = *self;
        spawn_local(async move {
            log::debug!("DELETE /api/articles/{}", article_id);
            let result = article_api::delete_article(article_id).await;
            store.settle(result, move |response| Event::ArticleDeleted {
                article_id,
                message: response.message,
            });
        });
    }

    fn settle<T>(&self, result: Result<T, ApiError>, on_success: impl FnOnce(T) -> Event) {
        let event = match result {
            Ok(value) => on_success(value),
            Err(e) => {
                log::warn!("article request failed: {:?}", e);
                Event::RequestFailed(e)
            }
        };
        self.dispatch(event);
    }
}

fn run_effect(effect: Effect) {
    match effect {
        Effect::StoreToken(token) => storage::save_token(&token),
        Effect::ClearToken => storage::clear_token(),
    }
}

/// Hook to access the store provided by `App`
pub fn use_store() -> Store {
    use_context::<Store>().expect("Store not found in component tree")
}
