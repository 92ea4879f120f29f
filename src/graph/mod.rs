//! The live, editable graph: flat nodes with positions plus parent→child edges.
//!
//! Edges are the only record of structure. Sibling order is derived from
//! `position.x` whenever it is needed, so there is no second representation of
//! a node's children that could drift out of sync.

pub mod changes;
pub mod ids;
pub mod lifecycle;
pub mod model;

pub use changes::*;
pub use ids::*;
pub use lifecycle::*;
pub use model::*;
