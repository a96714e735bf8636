//! Home page: URL input, validation, and the generate flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation runs before any network call. A valid list is submitted as one
//! `create_brief` request; while it is in flight a ticker animates the
//! per-URL progress rows. Success navigates to the new brief, failure keeps
//! the user here with an error banner.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "hydrate"))]
use crate::app::brief_path;
use crate::net::api::ApiClient;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::Brief;
use crate::state::progress::{ProgressStatus, ProgressTracker};
use crate::util::lifecycle::ViewLifetime;
use crate::util::urls::{UrlValidationError, parse_urls, url_count_hint, validate_urls};

const PLACEHOLDER: &str = "https://example.com/article-1\nhttps://example.com/article-2\nhttps://example.com/article-3";

/// What the page does once `create_brief` settles.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum SubmitOutcome {
    Navigate(String),
    Failed(String),
}

/// Parse and validate the textarea contents.
pub(crate) fn prepare_submission(input: &str) -> Result<Vec<String>, UrlValidationError> {
    let urls = parse_urls(input);
    validate_urls(&urls)?;
    Ok(urls)
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn submission_outcome(result: Result<Brief, ApiError>) -> SubmitOutcome {
    match result {
        Ok(brief) => SubmitOutcome::Navigate(brief_path(brief.id)),
        Err(err) => SubmitOutcome::Failed(err.user_message()),
    }
}

fn dot_class(status: ProgressStatus) -> &'static str {
    match status {
        ProgressStatus::Waiting => "status-dot dot-waiting",
        ProgressStatus::Loading => "spinner",
        ProgressStatus::Done => "status-dot dot-ok",
        ProgressStatus::Error => "status-dot dot-error",
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let lifetime = ViewLifetime::bound_to_owner();

    let input = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let progress = RwSignal::new(ProgressTracker::default());
    let generating = RwSignal::new(false);

    let url_count = move || input.with(|text| parse_urls(text).len());

    let on_generate = move |_| {
        if generating.get_untracked() {
            return;
        }
        error.set(None);
        let urls = match prepare_submission(&input.get_untracked()) {
            Ok(urls) => urls,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        progress.set(ProgressTracker::start(&urls));
        generating.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            let lifetime = lifetime.clone();
            let ticker = ViewLifetime::new();
            spawn_progress_ticker(progress, ticker.clone(), lifetime.clone());
            leptos::task::spawn_local(async move {
                let result = api.create_brief(&urls).await;
                ticker.retire();
                match submission_outcome(result) {
                    SubmitOutcome::Navigate(path) => {
                        if !lifetime.deliver(|| progress.update(ProgressTracker::finish_ok)) {
                            return;
                        }
                        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                            crate::state::progress::NAVIGATE_DELAY_MS,
                        )))
                        .await;
                        lifetime.deliver(|| navigate(&path, NavigateOptions::default()));
                    }
                    SubmitOutcome::Failed(message) => {
                        lifetime.deliver(|| {
                            progress.update(ProgressTracker::finish_err);
                            error.set(Some(message));
                            generating.set(false);
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &navigate, &lifetime, urls);
        }
    };

    view! {
        <div class="hero">
            <h1 class="hero-title">"Turn links into" <br/> "research briefs"</h1>
            <p class="hero-sub">
                "Paste 5–10 article links. The service fetches, reads, and synthesises them into a
                structured brief with key insights, citations, and a verification checklist."
            </p>

            <div class="steps-grid">
                <StepCard number=1 title="Paste Links" description="One URL per line, up to 10 articles, docs, or blog posts."/>
                <StepCard number=2 title="AI Analyses" description="Each page is fetched and cleaned, then a language model synthesises the content."/>
                <StepCard number=3 title="Get Your Brief" description="Summary, key points, citation links, conflict detection, and a checklist."/>
            </div>

            <div class="input-card fade-up">
                <p class="section-label">"Paste your URLs, one per line"</p>

                <Show when=move || error.get().is_some()>
                    <div class="error-banner" role="alert">
                        <strong>"Error: "</strong>
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>

                <textarea
                    rows="7"
                    placeholder=PLACEHOLDER
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    disabled=move || generating.get()
                ></textarea>
                <div class="input-hint">{move || url_count_hint(url_count())}</div>

                <Show when=move || !progress.with(ProgressTracker::is_empty)>
                    <ul class="progress-list">
                        {move || {
                            progress
                                .get()
                                .rows()
                                .iter()
                                .map(|row| {
                                    view! {
                                        <li class=row.status.css_class()>
                                            <span class=dot_class(row.status)></span>
                                            <span class="progress-url">{row.url.clone()}</span>
                                            <span class="progress-status-label">{row.status.label()}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>

                <div class="input-actions">
                    <Show when=move || generating.get()>
                        <span class="char-count">"Generating..."</span>
                    </Show>
                    <button class="btn btn-primary" on:click=on_generate disabled=move || generating.get()>
                        <Show when=move || generating.get() fallback=|| "Generate Brief">
                            <span class="spinner"></span>
                            " Analysing..."
                        </Show>
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn StepCard(number: u8, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="step-card">
            <div class="step-num">{number}</div>
            <div class="step-title">{title}</div>
            <div class="step-desc">{description}</div>
        </div>
    }
}

/// Reveal progress rows on a fixed interval until either guard retires.
#[cfg(feature = "hydrate")]
fn spawn_progress_ticker(progress: RwSignal<ProgressTracker>, ticker: ViewLifetime, view: ViewLifetime) {
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                crate::state::progress::TICK_MS,
            )))
            .await;
            if !ticker.is_alive() || !view.is_alive() {
                break;
            }
            progress.update(|p| {
                p.tick();
            });
        }
    });
}
