use leptos::prelude::*;

use crate::shared::state::use_store;

const MIN_USERNAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 8;

/// Submit is enabled once both trimmed values are long enough
pub fn credentials_valid(username: &str, password: &str) -> bool {
    username.trim().chars().count() >= MIN_USERNAME_LEN
        && password.trim().chars().count() >= MIN_PASSWORD_LEN
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let store = use_store();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let is_disabled = move || !credentials_valid(&username.get(), &password.get());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        store.login(
            username.get_untracked().trim().to_string(),
            password.get_untracked().trim().to_string(),
        );
    };

    view! {
        <form id="loginForm" on:submit=on_submit>
            <h2>"Login"</h2>
            <input
                type="text"
                id="username"
                maxlength="20"
                placeholder="Enter username"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(event_target_value(&ev))
            />
            <input
                type="password"
                id="password"
                maxlength="20"
                placeholder="Enter password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button type="submit" id="submitCredentials" disabled=is_disabled>
                "Submit credentials"
            </button>
        </form>
    }
}
