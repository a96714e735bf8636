//! View-lifetime guards for async work started by a page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages fire their fetches with `spawn_local`, which cannot be cancelled.
//! Instead each page holds a [`ViewLifetime`] that is retired on cleanup;
//! async tasks check it before writing results into the page's signals, so
//! a response that lands after navigation is dropped.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Shared liveness flag. Clones observe the same flag.
#[derive(Clone, Debug)]
pub struct ViewLifetime {
    alive: Arc<AtomicBool>,
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Create a guard retired when the current reactive owner is cleaned up.
    pub fn bound_to_owner() -> Self {
        let lifetime = Self::new();
        let on_drop = lifetime.clone();
        leptos::prelude::on_cleanup(move || on_drop.retire());
        lifetime
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn retire(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// Run `apply` only while the view is still mounted.
    ///
    /// Returns whether `apply` ran.
    pub fn deliver<F: FnOnce()>(&self, apply: F) -> bool {
        if self.is_alive() {
            apply();
            true
        } else {
            false
        }
    }
}

/// Tags successive requests from one view so only the newest may land.
///
/// Each [`RequestGeneration::begin`] supersedes every earlier ticket.
#[derive(Clone, Debug, Default)]
pub struct RequestGeneration {
    latest: Arc<AtomicU64>,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request and return its ticket.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket
    }
}
