//! Client-side view state.
//!
//! DESIGN
//! ======
//! Pages keep their data in local signals; only the fault latch is shared
//! through context. State types here are plain data so they can be tested
//! without a reactive runtime.

pub mod fault;
pub mod load;
pub mod progress;
