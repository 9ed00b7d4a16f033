use crate::routes::routes::{AppRoutes, View};
use crate::shared::components::message::Message;
use crate::shared::components::spinner::Spinner;
use crate::shared::state::{AppState, Store};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Single owner of the session state, shared through context
    let store = Store::new(AppState::default());
    provide_context(store);

    let spinner_on = Signal::derive(move || store.spinner_on());
    let message = Signal::derive(move || store.message());

    let nav_link = move |view: View, id: &'static str, label: &'static str| {
        view! {
            <a
                id=id
                href=view.path()
                class:active=move || store.view() == view
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    store.navigate(view);
                }
            >
                {label}
            </a>
        }
    };

    view! {
        <Spinner spinner_on=spinner_on />
        <Message message=message />
        <button id="logout" on:click=move |_| store.logout()>
            "Logout from app"
        </button>
        <div
            id="wrapper"
            style=move || if spinner_on.get() { "opacity: 0.25" } else { "opacity: 1" }
        >
            <h1>"Advanced Web Applications"</h1>
            <nav>
                {nav_link(View::Login, "loginScreen", "Login")}
                {nav_link(View::Articles, "articlesScreen", "Articles")}
            </nav>
            <AppRoutes />
            <footer>"Articles SPA"</footer>
        </div>
    }
}
