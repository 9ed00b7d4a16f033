use leptos::prelude::*;

#[component]
pub fn Message(
    /// Last server or client message; empty renders an empty box
    #[prop(into)]
    message: Signal<String>,
) -> impl IntoView {
    view! {
        <div id="message">{move || message.get()}</div>
    }
}
