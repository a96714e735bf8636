use leptos::prelude::*;

/// Centered placeholder panel for "nothing here" and failed-load states.
#[component]
pub fn EmptyState(#[prop(into)] heading: String, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h3>{heading}</h3>
            {children.map(|children| children())}
        </div>
    }
}

/// Full-page spinner with an optional caption.
#[component]
pub fn LoadingPanel(#[prop(optional, into)] caption: Option<String>) -> impl IntoView {
    view! {
        <div class="page loading-panel">
            <span class="spinner spinner--large"></span>
            {caption.map(|caption| view! { <p class="loading-panel__caption">{caption}</p> })}
        </div>
    }
}
