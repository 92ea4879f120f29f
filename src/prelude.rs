//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the waza crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use waza::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let tree_json = std::fs::read_to_string("path/to/skill.json")?;
//!
//! let mut store = FlowStore::new();
//! store.load_json(&tree_json)?;
//! println!("Editing {} nodes", store.graph().node_count());
//!
//! if let Some(json) = store.export_json()? {
//!     std::fs::write("path/to/skill.json", json)?;
//! }
//! # Ok(())
//! # }
//! ```

// Editor session
pub use crate::store::{EntityReferences, FlowStore, FlowStoreBuilder};

// Tree model
pub use crate::action::{
    ActionNode, DisplayTree, NodeCategory, NodeData, NodeType, Predicate, RequirementExpr,
    RequirementOperator,
};

// Graph model
pub use crate::graph::{
    Direction, EdgeChange, EdgeId, FlowEdge, FlowNode, Graph, IdAllocator, NodeChange, NodeId,
    Position,
};

// Conversions
pub use crate::convert::{LayoutConfig, Materializer, materialize, reconstruct};

// Error types
pub use crate::error::{EditError, FormatError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
