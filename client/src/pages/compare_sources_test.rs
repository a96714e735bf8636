use super::*;

#[test]
fn source_row_links_url_and_lists_points() {
    let row = SourceRow {
        url: "https://a.test/1".to_owned(),
        title: "Article A".to_owned(),
        points: vec!["Cost is falling".to_owned()],
    };
    let html = source_row_view(row).to_html();
    assert!(html.contains(r#"href="https://a.test/1""#), "{html}");
    assert!(html.contains("Article A"), "{html}");
    assert!(html.contains("Cost is falling"), "{html}");
    assert!(!html.contains(NO_POINTS), "{html}");
}

#[test]
fn source_row_without_points_shows_placeholder() {
    let row = SourceRow {
        url: "https://b.test/2".to_owned(),
        title: "https://b.test/2".to_owned(),
        points: Vec::new(),
    };
    let html = source_row_view(row).to_html();
    assert!(html.contains(NO_POINTS), "{html}");
}
