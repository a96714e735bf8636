//! Networking modules for the research-brief REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the four backend calls and `types` defines the shared wire
//! schema.

pub mod api;
pub mod types;
