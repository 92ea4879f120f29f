//! # Waza - Skill Tree Graph Editor Engine
//!
//! **Waza** keeps a game's skill execution trees and their node-based editor
//! view in sync. A skill is a small tree-shaped program: Sequence and Parallel
//! containers, timed/animation/audio leaves, combat-effect leaves, and a
//! Requirement node that gates a single child. Designers edit it as a graph of
//! connected boxes; the game runtime consumes the tree.
//!
//! ## Core Workflow
//!
//! The canonical model is the [`ActionNode`](action::ActionNode) tree, which is
//! the only thing ever persisted. The graph is ephemeral editor state.
//!
//! 1.  **Load**: Parse a skill tree (JSON with an internal `type` tag) and hand it to a
//!     [`FlowStore`](store::FlowStore). The store *materializes* it into flat
//!     nodes with positions plus parent→child edges.
//! 2.  **Edit**: Apply lifecycle operations (`add_node`, `update_node`, `remove_node`,
//!     `reorder_node`, `connect`) or forward the rendering surface's change batches.
//!     Every operation either applies completely or is rejected with the graph unchanged.
//! 3.  **Export**: *Reconstruct* the tree from the graph. Sibling order comes from the
//!     children's horizontal positions.
//!
//! ## Quick Start
//!
//! ```rust
//! use waza::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let tree = ActionNode::sequence(
//!         "Root",
//!         vec![ActionNode::delay(1.0), ActionNode::sound("hit1")],
//!     );
//!
//!     // 1. Load the tree into an editor session.
//!     let mut store = FlowStore::builder().with_tree(tree).build();
//!     assert_eq!(store.graph().node_count(), 3);
//!
//!     // 2. Edit the graph: add a Hit under the root and move it to the front.
//!     let root_id = store.graph().root().map(|n| n.id.clone()).unwrap();
//!     let hit_id = store.add_node(NodeType::Hit, Some(&root_id))?;
//!     store.reorder_node(&hit_id, Direction::Left)?;
//!     store.reorder_node(&hit_id, Direction::Left)?;
//!
//!     // 3. Export the tree again.
//!     let exported = store.export().unwrap();
//!     let order: Vec<_> = exported.children().iter().map(|c| c.node_type()).collect();
//!     assert_eq!(order, vec![NodeType::Hit, NodeType::Delay, NodeType::Sound]);
//!
//!     println!("{}", DisplayTree::new(exported));
//!     Ok(())
//! }
//! ```

pub mod action;
pub mod convert;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod store;
