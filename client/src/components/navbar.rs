//! Top navigation bar shared by every page.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::components::A;

pub(crate) struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    /// Only active on an exact path match (used for `/`).
    pub exact: bool,
}

pub(crate) const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        href: "/",
        label: "Home",
        exact: true,
    },
    NavLink {
        href: "/briefs",
        label: "Saved",
        exact: false,
    },
    NavLink {
        href: "/status",
        label: "Status",
        exact: false,
    },
];

/// Brand plus page links; the router marks the active link with
/// `aria-current="page"`.
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="nav-inner">
                <A href="/" attr:class="nav-brand">"ResearchBrief"</A>
                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <A href=link.href exact=link.exact attr:class="nav-link">
                                    {link.label}
                                </A>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </nav>
    }
}
