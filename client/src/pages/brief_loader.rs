//! Route-scoped brief fetch shared by the detail and compare pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both pages are keyed by the `:id` segment and render the same loading and
//! failure states, so the param parsing, fetch and error wording live here.

#[cfg(test)]
#[path = "brief_loader_test.rs"]
mod brief_loader_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api::ApiClient;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
use crate::net::types::Brief;
use crate::state::load::LoadState;
use crate::util::lifecycle::{RequestGeneration, ViewLifetime};

#[cfg(any(test, feature = "hydrate"))]
pub(crate) const NOT_FOUND_MESSAGE: &str = "Brief not found";
pub(crate) const INVALID_ID_MESSAGE: &str = "Invalid brief id";

/// Parse the `:id` route segment.
pub(crate) fn parse_brief_id(raw: &str) -> Result<i64, &'static str> {
    raw.trim().parse::<i64>().map_err(|_| INVALID_ID_MESSAGE)
}

/// Heading for a failed brief load: missing briefs always read
/// "Brief not found", anything else shows the call's own message.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn brief_failure_message(err: &ApiError) -> String {
    if err.is_not_found() {
        NOT_FOUND_MESSAGE.to_owned()
    } else {
        err.user_message()
    }
}

/// Fetch the brief named by the current route and expose its load state.
///
/// Re-fetches when the `:id` segment changes; only the response for the
/// current segment is applied. Results arriving after the page is torn down
/// are discarded.
pub(crate) fn use_brief() -> RwSignal<LoadState<Brief>> {
    let params = use_params_map();
    let api = expect_context::<ApiClient>();
    let lifetime = ViewLifetime::bound_to_owner();
    let generation = RequestGeneration::new();
    let state = RwSignal::new(LoadState::<Brief>::Loading);

    Effect::new(move || {
        let ticket = generation.begin();
        let raw_id = params.read().get("id").unwrap_or_default();
        let id = match parse_brief_id(&raw_id) {
            Ok(id) => id,
            Err(message) => {
                state.set(LoadState::Failed(message.to_owned()));
                return;
            }
        };
        state.set(LoadState::Loading);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let lifetime = lifetime.clone();
            let generation = generation.clone();
            leptos::task::spawn_local(async move {
                let result = api.get_brief(id).await;
                lifetime.deliver(|| {
                    if generation.is_current(ticket) {
                        state.set(LoadState::from_result(result, brief_failure_message));
                    }
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, ticket, &api, &lifetime);
        }
    });

    state
}
