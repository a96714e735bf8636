use super::*;

#[test]
fn claim_side_links_its_source() {
    let html = view! {
        <ClaimSide label="Source A" claim="Parity by 2027".to_owned() source="https://a.test/1".to_owned()/>
    }
    .to_html();
    assert!(html.contains(r#"href="https://a.test/1""#), "{html}");
    assert!(html.contains(">https://a.test/1</a>"), "{html}");
    assert!(html.contains("Parity by 2027"), "{html}");
}
