use leptos::prelude::*;

use crate::shared::state::{use_store, ArticleEntry};

#[component]
pub fn Articles() -> impl IntoView {
    let store = use_store();

    // Fetch once per mount
    store.list_articles();

    let editing = move || store.current_article_id().is_some();

    let render_entry = move |entry: ArticleEntry| {
        let article_id = entry.article_id;
        // rows appended after a create have no id to act on
        let actions_disabled = move || editing() || article_id.is_none();
        view! {
            <div class="article">
                <div>
                    <h3>{entry.title}</h3>
                    <p>{entry.text}</p>
                    <p>"Topic: " {entry.topic.code()}</p>
                </div>
                <div>
                    <button
                        disabled=actions_disabled
                        on:click=move |_| store.select_article(article_id)
                    >
                        "Edit"
                    </button>
                    <button
                        disabled=actions_disabled
                        on:click=move |_| {
                            if let Some(id) = article_id {
                                store.delete_article(id);
                            }
                        }
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        }
    };

    view! {
        <div class="articles">
            <h2>"Articles"</h2>
            {move || {
                let articles = store.articles();
                if articles.is_empty() {
                    view! { <p>"No articles yet"</p> }.into_any()
                } else {
                    articles.into_iter().map(render_entry).collect_view().into_any()
                }
            }}
        </div>
    }
}
