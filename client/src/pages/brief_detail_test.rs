use super::*;

#[test]
fn toggle_checked_flips_membership() {
    let mut checked = HashSet::new();
    toggle_checked(&mut checked, 2);
    assert!(checked.contains(&2));
    toggle_checked(&mut checked, 2);
    assert!(!checked.contains(&2));
}

#[test]
fn toggle_checked_is_per_item() {
    let mut checked = HashSet::new();
    toggle_checked(&mut checked, 0);
    toggle_checked(&mut checked, 3);
    toggle_checked(&mut checked, 0);
    assert_eq!(checked.into_iter().collect::<Vec<_>>(), vec![3]);
}

#[test]
fn key_point_links_its_source() {
    let kp = KeyPoint {
        point: "Cost is falling".to_owned(),
        source_url: "https://a.test/1".to_owned(),
        snippet: "costs fell 20%".to_owned(),
    };
    let html = key_point_view(kp).to_html();
    assert!(html.contains(r#"href="https://a.test/1""#), "{html}");
    assert!(html.contains("Cost is falling"), "{html}");
    assert!(html.contains("costs fell 20%"), "{html}");
}

#[test]
fn source_card_links_url_and_skips_blank_title() {
    let source = Source {
        id: 1,
        url: "https://b.test/2".to_owned(),
        title: Some(String::new()),
        snippet: None,
    };
    let html = source_view(source).to_html();
    assert!(html.contains(r#"href="https://b.test/2""#), "{html}");
    assert!(!html.contains("source-title"), "{html}");
}
