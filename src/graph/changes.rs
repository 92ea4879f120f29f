use super::{EdgeId, FlowEdge, FlowNode, Graph, NodeId, Position};
use crate::error::EditError;
use serde::{Deserialize, Serialize};

/// A node intent reported by the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeChange {
    /// The user dragged a node.
    Position { id: NodeId, position: Position },
    /// A node created on the surface, e.g. pasted.
    Add { node: FlowNode },
    Remove { id: NodeId },
}

/// An edge intent reported by the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EdgeChange {
    Add { edge: FlowEdge },
    Remove { id: EdgeId },
}

impl Graph {
    pub fn apply_node_change(&mut self, change: &NodeChange) -> Result<(), EditError> {
        match change {
            NodeChange::Position { id, position } => self.move_node(id, *position),
            NodeChange::Add { node } => self.add_flow_node(node.clone()),
            NodeChange::Remove { id } => self.remove_node(id).map(|_| ()),
        }
    }

    pub fn apply_edge_change(&mut self, change: &EdgeChange) -> Result<(), EditError> {
        match change {
            EdgeChange::Add { edge } => self.add_flow_edge(edge.clone()),
            EdgeChange::Remove { id } => self.remove_edge(id).map(|_| ()),
        }
    }
}
