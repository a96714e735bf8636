//! Side-by-side rendering of conflicting claims.
//!
//! Used by both the brief detail and compare-sources pages. Renders nothing
//! when the brief has no conflicts.

#[cfg(test)]
#[path = "conflict_panel_test.rs"]
mod conflict_panel_test;

use leptos::prelude::*;

use crate::net::types::ConflictingClaim;

#[component]
pub fn ConflictPanel(claims: Vec<ConflictingClaim>) -> impl IntoView {
    (!claims.is_empty()).then(|| {
        view! {
            <div class="card">
                <p class="section-label">"Conflicting Claims"</p>
                {claims
                    .into_iter()
                    .map(|claim| {
                        let topic = (!claim.topic.is_empty()).then(|| view! { <strong class="conflict-topic">{claim.topic}</strong> });
                        view! {
                            <div class="conflict-card">
                                {topic}
                                <div class="conflict-grid">
                                    <ClaimSide label="Source A" claim=claim.claim_a source=claim.source_a/>
                                    <ClaimSide label="Source B" claim=claim.claim_b source=claim.source_b/>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
    })
}

#[component]
fn ClaimSide(label: &'static str, claim: String, source: String) -> impl IntoView {
    let href = source.clone();
    view! {
        <div class="conflict-side">
            <div class="conflict-side-label">{label}</div>
            <div class="conflict-claim">{claim}</div>
            <a class="conflict-src" href=href target="_blank" rel="noopener noreferrer">
                {source}
            </a>
        </div>
    }
}
