use leptos::prelude::*;

pub const SPINNER_TEXT: &str = "Please wait...";

/// Text the spinner shows, if any
pub fn spinner_text(spinner_on: bool) -> Option<&'static str> {
    spinner_on.then_some(SPINNER_TEXT)
}

/// Busy indicator shown while a request is pending
#[component]
pub fn Spinner(
    #[prop(into)]
    spinner_on: Signal<bool>,
) -> impl IntoView {
    move || {
        spinner_text(spinner_on.get()).map(|text| view! { <div id="spinner">{text}</div> })
    }
}
