//! One service row of the status dashboard.

use leptos::prelude::*;

use crate::util::health::{ServiceDescriptor, ServiceState};

fn dot_class(state: &ServiceState) -> &'static str {
    match state {
        ServiceState::Checking => "status-dot dot-loading",
        ServiceState::Operational => "status-dot dot-ok",
        ServiceState::Degraded(_) => "status-dot dot-error",
    }
}

fn badge_class(state: &ServiceState) -> &'static str {
    match state {
        ServiceState::Checking => "badge badge-warning",
        ServiceState::Operational => "badge badge-success",
        ServiceState::Degraded(_) => "badge badge-error",
    }
}

#[component]
pub fn ServiceRow(descriptor: ServiceDescriptor, #[prop(into)] state: Signal<ServiceState>) -> impl IntoView {
    view! {
        <div class="card service-row">
            <div class="service-row__info">
                <div class="service-row__label">{descriptor.label}</div>
                <div class="service-row__description">{descriptor.description}</div>
                {move || {
                    state
                        .get()
                        .detail()
                        .map(|raw| view! { <div class="service-row__detail">{raw.to_owned()}</div> })
                }}
            </div>
            <div class="service-row__status">
                <span class=move || dot_class(&state.get())></span>
                <span class=move || badge_class(&state.get())>{move || state.get().badge()}</span>
            </div>
        </div>
    }
}
