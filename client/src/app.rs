//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::fault_panel::FaultPanel;
use crate::components::navbar::Navbar;
use crate::net::api::ApiClient;
use crate::pages::{
    brief_detail::BriefDetailPage, compare_sources::CompareSourcesPage, home::HomePage,
    saved_briefs::SavedBriefsPage, status::StatusPage,
};
use crate::state::fault::{AppFault, FaultState};
use crate::util::panic_panel::capture_stack;

/// Path of the detail page for brief `id`.
pub fn brief_path(id: i64) -> String {
    format!("/brief/{id}")
}

/// Path of the compare-sources page for brief `id`.
pub fn compare_path(id: i64) -> String {
    format!("/brief/{id}/compare")
}

/// Collapse the errors caught by the boundary into one fault, if any,
/// carrying the stack captured where the latch trips.
pub(crate) fn fault_from_errors(messages: Vec<String>, stack: Option<String>) -> Option<AppFault> {
    if messages.is_empty() {
        return None;
    }
    let fault = AppFault::new(messages.join("\n"));
    Some(match stack {
        Some(stack) => fault.with_stack(stack),
        None => fault,
    })
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the fault latch and the API client, then sets up client-side
/// routing. A tripped latch replaces the whole UI with [`FaultPanel`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let fault = RwSignal::new(FaultState::default());
    provide_context(fault);
    provide_context(ApiClient::from_env());

    let fault_view = move || fault.with(|s| s.fault().cloned()).map(|f| view! { <FaultPanel fault=f/> });

    view! {
        <Stylesheet id="leptos" href="/pkg/research-brief.css"/>
        <Title text="ResearchBrief"/>

        <Show when=move || !fault.with(FaultState::is_tripped) fallback=fault_view>
            <ErrorBoundary fallback=move |errors| {
                Effect::new(move |_| {
                    let messages = errors.get().into_iter().map(|(_, e)| e.to_string()).collect();
                    if let Some(caught) = fault_from_errors(messages, capture_stack()) {
                        fault.update(|s| {
                            s.trip(caught);
                        });
                    }
                });
            }>
                <Router>
                    <Navbar/>
                    <main class="main-content">
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=StaticSegment("") view=HomePage/>
                            <Route path=(StaticSegment("brief"), ParamSegment("id")) view=BriefDetailPage/>
                            <Route
                                path=(StaticSegment("brief"), ParamSegment("id"), StaticSegment("compare"))
                                view=CompareSourcesPage
                            />
                            <Route path=StaticSegment("briefs") view=SavedBriefsPage/>
                            <Route path=StaticSegment("status") view=StatusPage/>
                        </Routes>
                    </main>
                </Router>
            </ErrorBoundary>
        </Show>
    }
}
