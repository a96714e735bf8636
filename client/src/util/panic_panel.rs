//! Static fatal-error panel written straight into the DOM on panic.
//!
//! After a panic the reactive runtime can no longer be trusted, so the
//! panel bypasses Leptos entirely and replaces the `<body>` markup.

#[cfg(test)]
#[path = "panic_panel_test.rs"]
mod panic_panel_test;

use crate::state::fault::AppFault;

pub const PANEL_TITLE: &str = "Application Error";
pub const PANEL_INTRO: &str =
    "The application encountered an unexpected error. Check the browser console for details.";

/// Install the panic hook. Browser builds only; a no-op elsewhere.
pub fn install() {
    #[cfg(feature = "hydrate")]
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        let fault = AppFault::new(info.to_string()).with_stack(js::capture_stack());
        render(&fault);
    }));
}

/// JS stack at the call site. Browser builds only.
pub fn capture_stack() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        Some(js::capture_stack())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(feature = "hydrate")]
fn render(fault: &AppFault) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    body.set_inner_html(&panel_html(fault));
}

/// Markup of the static panel; all fault text is escaped.
pub fn panel_html(fault: &AppFault) -> String {
    format!(
        "<div class=\"fatal-error\"><h1>{PANEL_TITLE}</h1><p>{PANEL_INTRO}</p><pre>{}</pre></div>",
        escape_html(&fault.report())
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(feature = "hydrate")]
mod js {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        type Error;

        #[wasm_bindgen(constructor)]
        fn new() -> Error;

        #[wasm_bindgen(structural, method, getter)]
        fn stack(error: &Error) -> String;
    }

    pub(super) fn capture_stack() -> String {
        Error::new().stack()
    }
}
