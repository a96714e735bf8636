//! Compare-sources page: one matrix row per source with the key points
//! attributed to it.

#[cfg(test)]
#[path = "compare_sources_test.rs"]
mod compare_sources_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;

use super::brief_loader::use_brief;
use crate::app::brief_path;
use crate::components::conflict_panel::ConflictPanel;
use crate::components::empty_state::{EmptyState, LoadingPanel};
use crate::components::tag_list::TagList;
use crate::net::types::Brief;
use crate::state::load::LoadState;
use crate::util::compare::{SourceRow, group_points_by_source};

const NO_POINTS: &str = "No key points attributed to this source";

#[component]
pub fn CompareSourcesPage() -> impl IntoView {
    let state = use_brief();

    move || match state.get() {
        LoadState::Loading => view! { <LoadingPanel/> }.into_any(),
        LoadState::Failed(message) => view! {
            <div class="page">
                <EmptyState heading=message/>
            </div>
        }
        .into_any(),
        LoadState::Loaded(brief) => view! { <CompareView brief=brief/> }.into_any(),
    }
}

#[component]
fn CompareView(brief: Brief) -> impl IntoView {
    let rows = group_points_by_source(&brief);

    view! {
        <div class="page fade-up">
            <A href=brief_path(brief.id) attr:class="btn btn-secondary btn-sm">"Back to Brief"</A>
            <h1 class="page-title">"Compare Sources"</h1>
            <p class="page-subtitle">{brief.title}</p>
            <TagList tags=brief.topic_tags/>

            <div class="compare-scroll">
                <table class="compare-table">
                    <thead>
                        <tr>
                            <th class="compare-table__source">"Source"</th>
                            <th>"Key Points from This Source"</th>
                        </tr>
                    </thead>
                    <tbody>{rows.into_iter().map(source_row_view).collect::<Vec<_>>()}</tbody>
                </table>
            </div>

            <ConflictPanel claims=brief.conflicting_claims/>
        </div>
    }
}

fn source_row_view(row: SourceRow) -> impl IntoView {
    let heading = row.heading().to_owned();
    let href = row.url.clone();
    let points = if row.points.is_empty() {
        view! { <span class="compare-table__empty">{NO_POINTS}</span> }.into_any()
    } else {
        view! {
            <ul class="compare-table__points">
                {row.points.into_iter().map(|p| view! { <li>{p}</li> }).collect::<Vec<_>>()}
            </ul>
        }
        .into_any()
    };

    view! {
        <tr>
            <td>
                <div class="compare-table__title">{heading}</div>
                <a class="src-url" href=href target="_blank" rel="noopener noreferrer">
                    {row.url}
                </a>
            </td>
            <td>{points}</td>
        </tr>
    }
}
