use leptos::prelude::*;

/// Inline list of topic tags.
#[component]
pub fn TagList(tags: Vec<String>) -> impl IntoView {
    view! {
        <div class="tag-list">
            {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect::<Vec<_>>()}
        </div>
    }
}
