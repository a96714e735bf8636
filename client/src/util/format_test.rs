#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn count_label_pluralizes() {
    assert_eq!(count_label(0, "source"), "0 sources");
    assert_eq!(count_label(1, "source"), "1 source");
    assert_eq!(count_label(5, "source"), "5 sources");
}

#[test]
fn local_timestamp_is_passthrough_off_browser() {
    assert_eq!(local_timestamp("2026-10-01T12:30:00"), "2026-10-01T12:30:00");
}

#[test]
fn generated_line_combines_time_and_count() {
    assert_eq!(
        generated_line("2026-10-01T12:30:00", 1),
        "Generated 2026-10-01T12:30:00 · 1 source"
    );
}

#[test]
fn local_time_now_is_empty_off_browser() {
    assert_eq!(local_time_now(), "");
}

#[test]
fn quoted_snippet_skips_blank() {
    assert_eq!(quoted_snippet(None), None);
    assert_eq!(quoted_snippet(Some("   ")), None);
    assert_eq!(
        quoted_snippet(Some(" costs fell ")),
        Some("\u{201c}costs fell\u{201d}".to_owned())
    );
}
