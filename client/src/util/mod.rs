//! Helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure view logic (validation, grouping, health evaluation, formatting)
//! lives here so it can be unit tested without a browser, alongside the few
//! browser concerns (view lifetimes, the panic panel) pages depend on.

pub mod compare;
pub mod format;
pub mod health;
pub mod lifecycle;
pub mod panic_panel;
pub mod urls;
