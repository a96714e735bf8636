//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its fetches and local signals and delegates rendering
//! details to `components`. The two brief routes share one loader.

pub mod brief_detail;
pub(crate) mod brief_loader;
pub mod compare_sources;
pub mod home;
pub mod saved_briefs;
pub mod status;
