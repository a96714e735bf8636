//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render brief fragments and page chrome from props; they do
//! not fetch data themselves.

pub mod brief_card;
pub mod conflict_panel;
pub mod empty_state;
pub mod fault_panel;
pub mod navbar;
pub mod service_row;
pub mod tag_list;
