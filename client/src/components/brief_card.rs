//! Card for one entry of the saved-briefs list.
//!
//! DESIGN
//! ======
//! Rendered as an anchor so click, Enter and middle-click all behave like
//! normal links into the detail route.

use leptos::prelude::*;

use crate::app::brief_path;
use crate::components::tag_list::TagList;
use crate::net::types::BriefListItem;
use crate::util::format::{count_label, local_timestamp};

#[component]
pub fn BriefCard(item: BriefListItem) -> impl IntoView {
    let href = brief_path(item.id);
    let meta = format!(
        "{} · {}",
        local_timestamp(&item.created_at),
        count_label(item.source_count, "source")
    );

    view! {
        <a class="brief-card" href=href>
            <span class="brief-card__body">
                <span class="brief-card__title">{item.title}</span>
                <TagList tags=item.topic_tags/>
                <span class="brief-card__meta">{meta}</span>
            </span>
            <span class="brief-card__chevron" aria-hidden="true">"›"</span>
        </a>
    }
}
