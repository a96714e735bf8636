//! Saved briefs page listing the most recent briefs.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::brief_card::BriefCard;
use crate::components::empty_state::EmptyState;
use crate::net::api::ApiClient;
use crate::net::types::BriefListItem;
use crate::state::load::LoadState;
use crate::util::lifecycle::ViewLifetime;

#[component]
pub fn SavedBriefsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let lifetime = ViewLifetime::bound_to_owner();
    let state = RwSignal::new(LoadState::<Vec<BriefListItem>>::Loading);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = api.list_briefs().await;
        lifetime.deliver(|| state.set(LoadState::from_result(result, crate::net::api::ApiError::user_message)));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (api, lifetime);

    let items = move || state.with(|s| s.loaded().cloned().unwrap_or_default());

    view! {
        <div class="page fade-up">
            <h1 class="page-title">"Saved Briefs"</h1>
            <p class="page-subtitle">"Your last 5 generated research briefs"</p>

            <Show when=move || state.with(LoadState::is_loading)>
                <div class="loading-inline">
                    <span class="spinner spinner--large"></span>
                </div>
            </Show>

            <Show when=move || state.with(|s| s.error().is_some())>
                <div class="error-banner" role="alert">
                    {move || state.with(|s| s.error().unwrap_or_default().to_owned())}
                </div>
            </Show>

            <Show when=move || state.with(|s| s.loaded().is_some_and(Vec::is_empty))>
                <EmptyState heading="No briefs yet">
                    <p>"Head to the home page and paste some article links to get started."</p>
                    <A href="/" attr:class="btn btn-primary">"Generate a Brief"</A>
                </EmptyState>
            </Show>

            {move || {
                items()
                    .into_iter()
                    .map(|item| view! { <BriefCard item=item/> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
