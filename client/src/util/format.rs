//! Display formatting helpers.
//!
//! Timestamps are rendered in the browser's locale via `js_sys::Date`;
//! outside the browser the raw backend string is returned unchanged so SSR
//! output stays deterministic.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// `"1 source"`, `"3 sources"`.
pub fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Subtitle line of the brief detail page.
pub fn generated_line(created_at: &str, source_count: usize) -> String {
    format!(
        "Generated {} · {}",
        local_timestamp(created_at),
        count_label(source_count, "source")
    )
}

/// Render a backend timestamp in local date + time.
pub fn local_timestamp(raw: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
        if date.get_time().is_nan() {
            return raw.to_owned();
        }
        String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        raw.to_owned()
    }
}

/// Current local wall-clock time, for "last checked" labels.
pub fn local_time_now() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_locale_time_string("default"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Wrap a snippet in quotes for display, `None` when there is nothing to show.
pub fn quoted_snippet(snippet: Option<&str>) -> Option<String> {
    snippet
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| format!("\u{201c}{s}\u{201d}"))
}
