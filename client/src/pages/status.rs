//! System status page: backend, database, and language-model health.
//!
//! SYSTEM CONTEXT
//! ==============
//! Issues `get_health` on mount and on each manual refresh. No polling: a
//! stale report stays until the user refreshes.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use leptos::prelude::*;

use crate::components::service_row::ServiceRow;
use crate::net::api::ApiClient;
use crate::net::types::HealthStatus;
use crate::util::health::{SERVICES, aggregate_message, all_operational, service_state};
use crate::util::lifecycle::ViewLifetime;

pub(crate) fn banner_class(health: &HealthStatus) -> &'static str {
    if all_operational(health) {
        "status-banner status-banner--ok"
    } else {
        "status-banner status-banner--degraded"
    }
}

fn banner_dot_class(health: &HealthStatus) -> &'static str {
    if all_operational(health) {
        "status-dot dot-ok"
    } else {
        "status-dot dot-error"
    }
}

pub(crate) fn subtitle(last_checked: Option<&str>) -> String {
    match last_checked {
        Some(at) if !at.is_empty() => format!("Live health of all backend services · Last checked: {at}"),
        _ => "Live health of all backend services".to_owned(),
    }
}

#[component]
pub fn StatusPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let base_url = api.base_url().to_owned();
    let lifetime = ViewLifetime::bound_to_owner();

    let health = RwSignal::new(None::<HealthStatus>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let last_checked = RwSignal::new(None::<String>);

    let check = move || {
        loading.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let lifetime = lifetime.clone();
            leptos::task::spawn_local(async move {
                let result = api.get_health().await;
                lifetime.deliver(|| {
                    match result {
                        Ok(report) => {
                            health.set(Some(report));
                            last_checked.set(Some(crate::util::format::local_time_now()));
                        }
                        Err(e) => error.set(Some(e.user_message())),
                    }
                    loading.set(false);
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &lifetime);
        }
    };
    check();

    // Rows show "Checking" while a request is in flight.
    let report = move || if loading.get() { None } else { health.get() };
    let banner_base_url = base_url.clone();

    view! {
        <div class="page fade-up">
            <h1 class="page-title">"System Status"</h1>
            <p class="page-subtitle">{move || subtitle(last_checked.get().as_deref())}</p>

            {move || {
                report()
                    .map(|h| {
                        view! {
                            <div class=banner_class(&h)>
                                <span class=banner_dot_class(&h)></span>
                                <span class="status-banner__text">{aggregate_message(&h)}</span>
                            </div>
                        }
                    })
            }}

            <Show when=move || error.get().is_some()>
                <div class="error-banner" role="alert">
                    {move || error.get().unwrap_or_default()}
                    " Make sure the backend is running at "
                    <code>{banner_base_url.clone()}</code>
                </div>
            </Show>

            <div class="service-grid">
                {SERVICES
                    .into_iter()
                    .map(|descriptor| {
                        let state = Signal::derive(move || service_state(descriptor.key, report().as_ref()));
                        view! { <ServiceRow descriptor=descriptor state=state/> }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="page-actions">
                <button class="btn btn-secondary" on:click=move |_| check() disabled=move || loading.get()>
                    <Show when=move || loading.get() fallback=|| "Refresh">
                        <span class="spinner"></span>
                        " Checking..."
                    </Show>
                </button>
            </div>

            <div class="card">
                <p class="section-label">"Connection"</p>
                <table class="info-table">
                    <tbody>
                        <tr>
                            <td class="info-table__key">"API base URL"</td>
                            <td class="info-table__value">{base_url}</td>
                        </tr>
                    </tbody>
                </table>
            </div>
        </div>
    }
}
