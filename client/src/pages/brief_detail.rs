//! Brief detail page: summary, key points, conflicts, checklist, sources.

#[cfg(test)]
#[path = "brief_detail_test.rs"]
mod brief_detail_test;

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;

use super::brief_loader::use_brief;
use crate::app::compare_path;
use crate::components::conflict_panel::ConflictPanel;
use crate::components::empty_state::{EmptyState, LoadingPanel};
use crate::components::tag_list::TagList;
use crate::net::types::{Brief, KeyPoint, Source};
use crate::state::load::LoadState;
use crate::util::format::{generated_line, quoted_snippet};

/// Flip one checklist item. Check marks are local to the page view.
pub(crate) fn toggle_checked(checked: &mut HashSet<usize>, index: usize) {
    if !checked.remove(&index) {
        checked.insert(index);
    }
}

#[component]
pub fn BriefDetailPage() -> impl IntoView {
    let state = use_brief();

    move || match state.get() {
        LoadState::Loading => view! { <LoadingPanel caption="Loading brief..."/> }.into_any(),
        LoadState::Failed(message) => view! {
            <div class="page">
                <EmptyState heading=message>
                    <A href="/" attr:class="btn btn-secondary">"Back to Home"</A>
                </EmptyState>
            </div>
        }
        .into_any(),
        LoadState::Loaded(brief) => view! { <BriefView brief=brief/> }.into_any(),
    }
}

#[component]
fn BriefView(brief: Brief) -> impl IntoView {
    let checked = RwSignal::new(HashSet::<usize>::new());
    let subtitle = generated_line(&brief.created_at, brief.sources.len());
    let key_point_label = format!("Key Points ({})", brief.key_points.len());
    let source_label = format!("Sources Used ({})", brief.sources.len());

    view! {
        <div class="page fade-up">
            <div class="page-actions">
                <A href="/briefs" attr:class="btn btn-secondary btn-sm">"Back to Saved"</A>
                <A href=compare_path(brief.id) attr:class="btn btn-secondary btn-sm">"Compare Sources"</A>
            </div>

            <h1 class="page-title">{brief.title}</h1>
            <p class="page-subtitle">{subtitle}</p>
            <TagList tags=brief.topic_tags/>

            <div class="card">
                <p class="section-label">"Executive Summary"</p>
                <p class="summary-text">{brief.summary}</p>
            </div>

            <div class="card">
                <p class="section-label">{key_point_label}</p>
                {brief.key_points.into_iter().map(key_point_view).collect::<Vec<_>>()}
            </div>

            <ConflictPanel claims=brief.conflicting_claims/>

            <div class="card">
                <p class="section-label">"What to Verify"</p>
                <ul class="checklist">
                    {brief
                        .verify_checklist
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| {
                            let is_checked = move || checked.with(|c| c.contains(&index));
                            let input_id = format!("chk-{index}");
                            view! {
                                <li class:checked=is_checked>
                                    <input
                                        type="checkbox"
                                        id=input_id.clone()
                                        prop:checked=is_checked
                                        on:change=move |_| checked.update(|c| toggle_checked(c, index))
                                    />
                                    <label for=input_id>{item}</label>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>

            <div class="card">
                <p class="section-label">{source_label}</p>
                {brief.sources.into_iter().map(source_view).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

fn key_point_view(kp: KeyPoint) -> impl IntoView {
    let snippet = quoted_snippet(Some(kp.snippet.as_str()));
    let href = kp.source_url.clone();
    view! {
        <div class="key-point">
            <div class="key-point-text">{kp.point}</div>
            {snippet.map(|s| view! { <div class="key-point-snippet">{s}</div> })}
            <a class="key-point-src" href=href target="_blank" rel="noopener noreferrer">
                {kp.source_url}
            </a>
        </div>
    }
}

fn source_view(source: Source) -> impl IntoView {
    let snippet = quoted_snippet(source.snippet.as_deref());
    let title = source.title.filter(|t| !t.is_empty());
    let href = source.url.clone();
    view! {
        <div class="source-card">
            {title.map(|t| view! { <div class="source-title">{t}</div> })}
            <a class="source-url" href=href target="_blank" rel="noopener noreferrer">
                {source.url}
            </a>
            {snippet.map(|s| view! { <div class="source-snippet">{s}</div> })}
        </div>
    }
}
