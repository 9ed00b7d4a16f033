use contracts::domain::a001_article::aggregate::ArticleDraft;
use contracts::domain::a001_article::topic::Topic;
use leptos::prelude::*;

use crate::shared::state::{use_store, ArticleEntry};

/// Raw form inputs; `topic` is the selected option value, empty when none
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleFormValues {
    pub title: String,
    pub text: String,
    pub topic: String,
}

impl ArticleFormValues {
    pub fn from_entry(entry: &ArticleEntry) -> Self {
        Self {
            title: entry.title.clone(),
            text: entry.text.clone(),
            topic: entry.topic.code().to_string(),
        }
    }

    /// `None` until title and text are non-blank and a topic is chosen
    pub fn to_draft(&self) -> Option<ArticleDraft> {
        let topic = Topic::from_code(&self.topic)?;
        let draft = ArticleDraft {
            title: self.title.trim().to_string(),
            text: self.text.trim().to_string(),
            topic,
        };
        draft.is_valid().then_some(draft)
    }
}

#[component]
pub fn ArticleForm() -> impl IntoView {
    let store = use_store();
    let form = RwSignal::new(ArticleFormValues::default());

    // Refill the inputs whenever the selection changes
    let current = Memo::new(move |_| store.current_article());
    Effect::new(move |_| match current.get() {
        Some(entry) => form.set(ArticleFormValues::from_entry(&entry)),
        None => form.set(ArticleFormValues::default()),
    });

    let is_editing = move || current.with(|c| c.is_some());
    let is_disabled = move || form.with(|f| f.to_draft().is_none());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(draft) = form.with_untracked(|f| f.to_draft()) else {
            return;
        };
        match current.get_untracked().and_then(|entry| entry.article_id) {
            Some(article_id) => {
                store.update_article(article_id, draft);
                store.select_article(None);
            }
            None => store.create_article(draft),
        }
        form.set(ArticleFormValues::default());
    };

    view! {
        <form id="form" on:submit=on_submit>
            <h2>{move || if is_editing() { "Edit Article" } else { "Create Article" }}</h2>
            <input
                type="text"
                id="title"
                maxlength="50"
                placeholder="Enter title"
                prop:value=move || form.with(|f| f.title.clone())
                on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
            />
            <textarea
                id="text"
                maxlength="200"
                placeholder="Enter text"
                prop:value=move || form.with(|f| f.text.clone())
                on:input=move |ev| form.update(|f| f.text = event_target_value(&ev))
            />
            <select
                id="topic"
                prop:value=move || form.with(|f| f.topic.clone())
                on:change=move |ev| form.update(|f| f.topic = event_target_value(&ev))
            >
                <option value="">"-- Select topic --"</option>
                {Topic::all()
                    .into_iter()
                    .map(|topic| view! { <option value=topic.code()>{topic.code()}</option> })
                    .collect_view()}
            </select>
            <div class="button-group">
                <button type="submit" id="submitArticle" disabled=is_disabled>
                    "Submit"
                </button>
                <Show when=is_editing>
                    <button type="button" on:click=move |_| store.select_article(None)>
                        "Cancel edit"
                    </button>
                </Show>
            </div>
        </form>
    }
}
