use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::window;

use crate::domain::a001_article::ui::form::ArticleForm;
use crate::domain::a001_article::ui::list::Articles;
use crate::shared::state::use_store;
use crate::system::pages::login::LoginForm;

/// Screens of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Articles,
}

impl View {
    pub fn path(&self) -> &'static str {
        match self {
            View::Login => "/",
            View::Articles => "/articles",
        }
    }

    /// Unknown paths land on the login screen
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/articles" => View::Articles,
            _ => View::Login,
        }
    }
}

/// The articles view is only reachable with a stored token
pub fn resolve_view(requested: View, has_token: bool) -> View {
    match requested {
        View::Articles if !has_token => View::Login,
        view => view,
    }
}

/// Path to write back when the shown view no longer matches the address bar
pub fn path_correction(current: &str, shown: View) -> Option<&'static str> {
    (current != shown.path()).then_some(shown.path())
}

fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

fn push_path(path: &str) {
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

fn replace_path(path: &str) {
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let store = use_store();

    // The router's own corrections overwrite the entry instead of adding one
    let correct_location = move || {
        if let Some(path) = path_correction(&current_path(), store.view_untracked()) {
            replace_path(path);
        }
    };

    // Initial view comes from the address bar
    store.navigate(View::from_path(&current_path()));
    correct_location();

    // Mirror user navigation into the location
    Effect::new(move |_| {
        let path = store.view().path();
        if current_path() != path {
            push_path(path);
        }
    });

    // Back/forward buttons; a refused navigation leaves the old view in place
    let _popstate = window_event_listener(ev::popstate, move |_| {
        store.navigate(View::from_path(&current_path()));
        correct_location();
    });

    view! {
        <Show
            when=move || store.view() == View::Articles
            fallback=|| view! { <LoginForm /> }
        >
            <ArticleForm />
            <Articles />
        </Show>
    }
}
