use leptos::prelude::*;

use crate::state::fault::AppFault;
use crate::util::panic_panel::{PANEL_INTRO, PANEL_TITLE};

/// Diagnostic panel that replaces the whole UI once the fault latch trips.
///
/// Mirrors the static markup the panic hook writes, so both failure paths
/// look the same.
#[component]
pub fn FaultPanel(fault: AppFault) -> impl IntoView {
    view! {
        <div class="fatal-error">
            <h1>{PANEL_TITLE}</h1>
            <p>{PANEL_INTRO}</p>
            <pre>{fault.report()}</pre>
        </div>
    }
}
