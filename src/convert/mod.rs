//! Conversions between the canonical skill tree and the editor graph.
//!
//! `materialize` runs on load, `reconstruct` on export. For a tree whose
//! siblings end up with distinct x positions the two are inverse to each other
//! up to node identity.

pub mod layout;
pub mod materialize;
pub mod reconstruct;

pub use layout::*;
pub use materialize::*;
pub use reconstruct::*;
