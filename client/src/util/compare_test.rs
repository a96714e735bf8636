use super::*;
use crate::net::types::{KeyPoint, Source};

// =============================================================
// Helpers
// =============================================================

fn source(id: i64, url: &str, title: Option<&str>) -> Source {
    Source {
        id,
        url: url.to_owned(),
        title: title.map(str::to_owned),
        snippet: None,
    }
}

fn key_point(point: &str, source_url: &str) -> KeyPoint {
    KeyPoint {
        point: point.to_owned(),
        source_url: source_url.to_owned(),
        snippet: String::new(),
    }
}

fn brief(sources: Vec<Source>, key_points: Vec<KeyPoint>) -> Brief {
    Brief {
        id: 1,
        title: "T".to_owned(),
        summary: String::new(),
        key_points,
        conflicting_claims: Vec::new(),
        verify_checklist: Vec::new(),
        topic_tags: Vec::new(),
        created_at: "2026-10-01T00:00:00".to_owned(),
        sources,
    }
}

// =============================================================
// Grouping
// =============================================================

#[test]
fn groups_points_and_drops_unknown_sources() {
    let b = brief(
        vec![source(1, "a", None), source(2, "b", None)],
        vec![key_point("from a", "a"), key_point("from c", "c")],
    );
    let rows = group_points_by_source(&b);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].url, "a");
    assert_eq!(rows[0].points, vec!["from a".to_owned()]);
    assert_eq!(rows[1].url, "b");
    assert!(rows[1].points.is_empty());
    assert!(rows.iter().all(|r| !r.points.contains(&"from c".to_owned())));
}

#[test]
fn rows_follow_source_order_and_points_keep_order() {
    let b = brief(
        vec![source(1, "z", None), source(2, "y", None)],
        vec![key_point("y1", "y"), key_point("z1", "z"), key_point("y2", "y")],
    );
    let rows = group_points_by_source(&b);
    let urls: Vec<&str> = rows.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(urls, vec!["z", "y"]);
    assert_eq!(rows[1].points, vec!["y1".to_owned(), "y2".to_owned()]);
}

#[test]
fn title_defaults_to_url() {
    let b = brief(
        vec![
            source(1, "https://a.test", Some("Article A")),
            source(2, "https://b.test", None),
            source(3, "https://c.test", Some("")),
        ],
        Vec::new(),
    );
    let rows = group_points_by_source(&b);
    assert_eq!(rows[0].title, "Article A");
    assert_eq!(rows[0].heading(), "Article A");
    assert_eq!(rows[1].title, "https://b.test");
    assert_eq!(rows[1].heading(), "");
    assert_eq!(rows[2].title, "https://c.test");
}

#[test]
fn duplicate_source_urls_share_one_row() {
    let b = brief(
        vec![source(1, "a", Some("first")), source(2, "a", Some("second"))],
        vec![key_point("p", "a")],
    );
    let rows = group_points_by_source(&b);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "first");
    assert_eq!(rows[0].points, vec!["p".to_owned()]);
}

#[test]
fn empty_brief_has_no_rows() {
    assert!(group_points_by_source(&brief(Vec::new(), vec![key_point("p", "a")])).is_empty());
}

#[test]
fn point_without_source_url_is_dropped() {
    let b = brief(vec![source(1, "a", None)], vec![key_point("kept", "a"), key_point("orphan", "")]);
    let rows = group_points_by_source(&b);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].points, vec!["kept".to_owned()]);
}
